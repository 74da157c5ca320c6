//! Point-in-time statistics over a lattice and its propagation history.

use rayon::prelude::*;
use serde::Serialize;

use super::cell::{CellType, Coord};
use super::grid::Lattice;
use crate::error::Result;
use crate::state::Engine;

/// Lattices at least this large are counted with a parallel reduction.
pub const PARALLEL_COUNT_THRESHOLD: usize = 1 << 16;

/// Cells per work unit in the parallel count.
const COUNT_CHUNK: usize = 1 << 14;

/// Aggregate view of an engine at one moment. Never mutated after creation.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatSnapshot {
    pub total: u64,
    pub closed: u64,
    pub open: u64,
    pub water: u64,
    /// Water cells on the bottom face (`y = 0`).
    pub percolated: u64,
    /// `W·D`, the denominator for the percolated percentage.
    pub footprint: u64,
    /// History length minus one; -1 before seeding.
    pub current_step: i64,
}

impl StatSnapshot {
    /// True once water has reached the bottom face.
    pub fn percolates(&self) -> bool {
        self.percolated > 0
    }

    pub fn count_of(&self, cell: CellType) -> u64 {
        match cell {
            CellType::Closed => self.closed,
            CellType::Open => self.open,
            CellType::Water => self.water,
        }
    }

    /// Percent of the bottom face reached by water, rounded for display.
    pub fn percent_percolated(&self, decimals: u32) -> f64 {
        round_to(percent(self.percolated, self.footprint), decimals)
    }

    /// Percent of all cells of the given type, rounded for display.
    pub fn percent_of(&self, cell: CellType, decimals: u32) -> f64 {
        round_to(percent(self.count_of(cell), self.total), decimals)
    }
}

/// Snapshots at the seed, now, and after propagation would finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatReport {
    pub seeded: StatSnapshot,
    pub current: StatSnapshot,
    pub projected: StatSnapshot,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub closed: u64,
    pub open: u64,
    pub water: u64,
}

impl CellCounts {
    fn of_slice(cells: &[CellType]) -> Self {
        cells.iter().fold(CellCounts::default(), |mut acc, &c| {
            match c {
                CellType::Closed => acc.closed += 1,
                CellType::Open => acc.open += 1,
                CellType::Water => acc.water += 1,
            }
            acc
        })
    }

    fn merge(self, other: CellCounts) -> CellCounts {
        CellCounts {
            closed: self.closed + other.closed,
            open: self.open + other.open,
            water: self.water + other.water,
        }
    }
}

/// Count each cell type over the whole lattice.
pub fn count_cells(lattice: &Lattice) -> CellCounts {
    let cells = lattice.cells();
    if cells.len() < PARALLEL_COUNT_THRESHOLD {
        return CellCounts::of_slice(cells);
    }
    cells
        .par_chunks(COUNT_CHUNK)
        .map(CellCounts::of_slice)
        .reduce(CellCounts::default, CellCounts::merge)
}

/// Water cells on the bottom face.
pub fn count_percolated(lattice: &Lattice) -> u64 {
    let mut count = 0;
    for z in 0..lattice.depth() {
        for x in 0..lattice.width() {
            let idx = lattice.index_of(Coord::new(x, 0, z));
            if lattice.cells()[idx] == CellType::Water {
                count += 1;
            }
        }
    }
    count
}

/// Build a snapshot from a lattice and the current step index.
pub fn snapshot_of(lattice: &Lattice, current_step: i64) -> StatSnapshot {
    let counts = count_cells(lattice);
    let dims = lattice.dimensions();
    StatSnapshot {
        total: lattice.len() as u64,
        closed: counts.closed,
        open: counts.open,
        water: counts.water,
        percolated: count_percolated(lattice),
        footprint: dims.footprint() as u64,
        current_step,
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

impl Engine {
    /// Snapshot of the current state. Requires an allocated lattice.
    pub fn snapshot(&self) -> Result<StatSnapshot> {
        let lattice = self.require_lattice("take a snapshot")?;
        Ok(snapshot_of(lattice, self.current_step()))
    }

    /// The state as it was right after seeding, derived without touching the lattice:
    /// every water cell beyond step 0 counts as open again.
    pub fn seed_snapshot(&self) -> Result<StatSnapshot> {
        let mut snap = self.snapshot()?;
        let Some(seed) = self.history.step(0) else {
            return Ok(snap);
        };

        let seed_water = seed.len() as u64;
        snap.open += snap.water - seed_water;
        snap.water = seed_water;
        snap.percolated = seed.iter().filter(|c| c.y == 0).count() as u64;
        snap.current_step = 0;
        Ok(snap)
    }

    /// Look ahead: run propagation to completion, snapshot, then step back to where the
    /// engine was. Cells, history and the finished flag are restored exactly.
    pub fn projected_final_snapshot(&mut self) -> Result<StatSnapshot> {
        if self.history.is_empty() {
            return self.snapshot();
        }

        let start = self.current_step();
        let was_finished = self.finished;

        self.finish()?;
        let projected = self.snapshot()?;
        self.rewind_to(start)?;
        self.finished = was_finished;

        Ok(projected)
    }

    /// Index of the last step propagation will reach from the current state.
    pub fn total_steps(&mut self) -> Result<i64> {
        Ok(self.projected_final_snapshot()?.current_step)
    }

    pub fn report(&mut self) -> Result<StatReport> {
        Ok(StatReport {
            seeded: self.seed_snapshot()?,
            current: self.snapshot()?,
            projected: self.projected_final_snapshot()?,
        })
    }
}
