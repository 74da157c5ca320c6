#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::ffi::{
        pl_create, pl_destroy, pl_finish, pl_get_cell, pl_is_finished, pl_seed_top_row,
        pl_set_cell, pl_snapshot, pl_step_back, pl_step_forward,
    };
    use crate::{CellType, Config, Coord, Dimensions, Engine, PercolationError, Phase, StatSnapshot};

    fn engine(w: i32, h: i32, d: i32, p: f64) -> Engine {
        let config = Config::new(Dimensions::new(w, h, d).unwrap(), p).unwrap();
        Engine::with_lattice(config).unwrap()
    }

    fn seeded_random(n: i32, p: f64, seed: u64) -> Engine {
        let mut e = engine(n, n, n, p);
        e.randomize(&mut StdRng::seed_from_u64(seed)).unwrap();
        e.seed_top_row().unwrap();
        e
    }

    #[test]
    fn test_scenario_a_single_column() {
        let mut e = engine(1, 3, 1, 0.5);
        e.fill(CellType::Open).unwrap();

        assert_eq!(e.seed_top_row().unwrap(), 1);
        assert_eq!(e.step_cells(0).unwrap(), &[Coord::new(0, 2, 0)]);
        assert_eq!(e.phase(), Phase::Seeded);

        assert_eq!(e.step_forward().unwrap(), 1);
        assert_eq!(e.cell(Coord::new(0, 1, 0)).unwrap(), CellType::Water);
        assert_eq!(e.step_forward().unwrap(), 1);
        assert_eq!(e.cell(Coord::new(0, 0, 0)).unwrap(), CellType::Water);
        assert_eq!(e.step_forward().unwrap(), 0);
        assert_eq!(e.phase(), Phase::Finished);

        assert_eq!(e.snapshot().unwrap().percolated, 1);
    }

    #[test]
    fn test_scenario_b_single_layer() {
        let mut e = engine(2, 1, 1, 0.5);
        e.fill(CellType::Open).unwrap();

        assert_eq!(e.seed_top_row().unwrap(), 2);
        assert_eq!(e.step_forward().unwrap(), 0);
        assert_eq!(e.snapshot().unwrap().percolated, 2);
    }

    #[test]
    fn test_scenario_c_blocked_column() {
        let mut e = engine(3, 3, 3, 0.5);
        e.fill(CellType::Open).unwrap();
        for y in 0..3 {
            e.set_cell(Coord::new(1, y, 1), CellType::Closed).unwrap();
        }

        e.seed_top_row().unwrap();
        e.finish().unwrap();

        let snap = e.snapshot().unwrap();
        assert!(snap.percolates());
        assert_eq!(snap.percolated, 8);
        assert_eq!(snap.water, 24);
        assert_eq!(snap.closed, 3);
    }

    #[test]
    fn test_scenario_c_lateral_path_required() {
        // y=2: O C C
        // y=1: O O O
        // y=0: C C O
        // The only route down runs sideways along y = 1.
        let mut e = engine(3, 3, 1, 0.5);
        for (x, y) in [(0, 2), (0, 1), (1, 1), (2, 1), (2, 0)] {
            e.set_cell(Coord::new(x, y, 0), CellType::Open).unwrap();
        }

        e.seed_top_row().unwrap();
        assert_eq!(e.finish().unwrap(), 4);
        assert_eq!(e.current_step(), 4);
        assert_eq!(e.snapshot().unwrap().percolated, 1);
        assert_eq!(e.cell(Coord::new(2, 0, 0)).unwrap(), CellType::Water);
    }

    #[test]
    fn test_scenario_d_all_closed() {
        let mut e = engine(4, 4, 4, 0.5);
        e.randomize_with(0.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(e.snapshot().unwrap().closed, 64);

        assert_eq!(e.seed_top_row().unwrap(), 0);
        assert_eq!(e.current_step(), -1);
        assert!(matches!(
            e.step_forward(),
            Err(PercolationError::InvalidState {
                phase: Phase::Randomized,
                ..
            })
        ));
        assert!(matches!(
            e.finish(),
            Err(PercolationError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_counts_always_sum_to_total() {
        for seed in 0..8 {
            let mut e = seeded_random(6, 0.6, seed);
            loop {
                let snap = e.snapshot().unwrap();
                assert_eq!(snap.closed + snap.open + snap.water, snap.total);
                if e.history().is_empty() || e.step_forward().unwrap() == 0 {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_round_trip_restores_layout() {
        for seed in 0..8 {
            let mut e = seeded_random(7, 0.55, seed);
            if e.history().is_empty() {
                continue;
            }
            e.step_forward().unwrap();

            let before = e.lattice().unwrap().clone();
            let len_before = e.step_count();

            let mut forward = 0;
            for _ in 0..4 {
                if e.step_forward().unwrap() > 0 {
                    forward += 1;
                }
            }
            for _ in 0..forward {
                e.step_back().unwrap();
            }

            assert_eq!(e.lattice().unwrap(), &before, "seed {seed}");
            assert_eq!(e.step_count(), len_before, "seed {seed}");
        }
    }

    #[test]
    fn test_finished_stays_finished_until_reset() {
        let mut e = seeded_random(5, 0.7, 1);
        e.finish().unwrap();
        let snap = e.snapshot().unwrap();
        for _ in 0..5 {
            assert_eq!(e.step_forward().unwrap(), 0);
        }
        assert_eq!(e.snapshot().unwrap(), snap);

        e.clear_water().unwrap();
        assert!(!e.is_finished());
    }

    #[test]
    fn test_no_cell_appears_in_two_steps() {
        for seed in 0..8 {
            let mut e = seeded_random(8, 0.6, seed);
            if e.history().is_empty() {
                continue;
            }
            e.finish().unwrap();

            let mut seen = HashSet::new();
            for step in e.history().iter() {
                for &c in step {
                    assert!(seen.insert(c), "{c:?} recorded twice");
                }
            }
            assert_eq!(seen.len() as u64, e.snapshot().unwrap().water);
        }
    }

    #[test]
    fn test_water_only_arrives_from_level_or_above() {
        for seed in 0..8 {
            let mut e = seeded_random(8, 0.6, seed);
            if e.history().is_empty() {
                continue;
            }
            e.finish().unwrap();
            let lattice = e.lattice().unwrap();

            for i in 1..e.step_count() {
                let previous: HashSet<Coord> =
                    e.step_cells(i - 1).unwrap().iter().copied().collect();
                for &c in e.step_cells(i).unwrap() {
                    let fed = lattice
                        .neighbors6(c)
                        .any(|n| previous.contains(&n) && n.y >= c.y);
                    assert!(fed, "{c:?} in step {i} has no source at or above it");
                }
            }
        }
    }

    #[test]
    fn test_full_lattice_percolates_everywhere() {
        let mut e = seeded_random(6, 1.0, 0);
        e.finish().unwrap();
        let snap = e.snapshot().unwrap();
        assert_eq!(snap.water, snap.total);
        assert_eq!(snap.percent_percolated(1), 100.0);
        assert_eq!(snap.current_step, 5);
    }

    #[test]
    fn test_ffi_scenario_a() {
        unsafe {
            let engine = pl_create(1, 3, 1, 0.5);
            for y in 0..3 {
                assert_eq!(pl_set_cell(engine, 0, y, 0, 1), 0);
            }

            assert_eq!(pl_seed_top_row(engine), 1);
            assert_eq!(pl_get_cell(engine, 0, 2, 0), 2);
            assert_eq!(pl_step_forward(engine), 1);
            assert_eq!(pl_step_forward(engine), 1);
            assert_eq!(pl_step_forward(engine), 0);
            assert_eq!(pl_is_finished(engine), 1);

            let mut snap = StatSnapshot::default();
            assert_eq!(pl_snapshot(engine, &mut snap), 0);
            assert_eq!(snap.percolated, 1);

            assert_eq!(pl_step_back(engine), 1);
            assert_eq!(pl_get_cell(engine, 0, 0, 0), 1);
            assert_eq!(pl_finish(engine), 1);
            pl_destroy(engine);
        }
    }
}
