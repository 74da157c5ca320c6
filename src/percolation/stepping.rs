//! Level-synchronous breadth-first propagation with reversible steps.
//!
//! Each BFS frontier is kept as a history step instead of being discarded,
//! so stepping back is "revert the last frontier to `Open` and drop it".

use tracing::{debug, info, trace};

use super::cell::{CellType, Coord};
use crate::error::{PercolationError, Result};
use crate::state::Engine;

impl Engine {
    /// Expand the water front by one layer.
    ///
    /// A neighbor of a frontier cell joins the next step iff it is `Open` and lies on the
    /// same layer or below (`neighbor.y <= frontier.y`); water never flows up. Candidates
    /// reachable from several frontier cells are added once.
    ///
    /// Returns the number of cells added. Returns 0 and marks the engine finished when the
    /// front cannot grow; further calls keep returning 0 until the water is stepped back,
    /// cleared or the layout re-rolled.
    ///
    /// Fails with `InvalidState` when no lattice exists or nothing has been seeded.
    pub fn step_forward(&mut self) -> Result<usize> {
        let phase = self.phase();
        let Some(lattice) = self.lattice.as_mut() else {
            return Err(PercolationError::InvalidState {
                operation: "step forward",
                phase,
            });
        };
        let Some(frontier) = self.history.last() else {
            return Err(PercolationError::InvalidState {
                operation: "step forward",
                phase,
            });
        };
        if self.finished {
            return Ok(0);
        }

        let mut candidates: Vec<Coord> = Vec::with_capacity(frontier.len() * 2);
        for &from in frontier {
            for n in lattice.neighbors6(from) {
                if n.y <= from.y && lattice.cells()[lattice.index_of(n)] == CellType::Open {
                    candidates.push(n);
                }
            }
        }

        // Flooding in discovery order drops duplicates: a repeated candidate is already water.
        let mut added = Vec::with_capacity(candidates.len());
        for c in candidates {
            let idx = lattice.index_of(c);
            if lattice.cells()[idx] == CellType::Open {
                lattice.cells_mut()[idx] = CellType::Water;
                added.push(c);
            }
        }

        if added.is_empty() {
            self.finished = true;
            info!("Propagation finished at step {}", self.history.current_step());
            return Ok(0);
        }

        self.history.push_step(&added);
        trace!(
            "Step {}: {} cells added",
            self.history.current_step(),
            added.len()
        );
        Ok(added.len())
    }

    /// Undo the most recent step, reverting its cells to `Open`.
    ///
    /// Returns the number of cells reverted; 0 when there is no step left. Step 0 (the seed)
    /// can be removed too, which leaves the engine with no water.
    pub fn step_back(&mut self) -> Result<usize> {
        let phase = self.phase();
        let Some(lattice) = self.lattice.as_mut() else {
            return Err(PercolationError::InvalidState {
                operation: "step back",
                phase,
            });
        };
        let Some(step) = self.history.pop_step() else {
            return Ok(0);
        };

        for &c in &step {
            let idx = lattice.index_of(c);
            lattice.cells_mut()[idx] = CellType::Open;
        }
        self.finished = false;
        debug!(
            "Stepped back to {}: {} cells removed",
            self.history.current_step(),
            step.len()
        );
        Ok(step.len())
    }

    /// Step forward until the front stops growing. Returns the total number of cells added.
    pub fn finish(&mut self) -> Result<usize> {
        let mut total = 0;
        loop {
            let added = self.step_forward()?;
            if added == 0 {
                return Ok(total);
            }
            total += added;
        }
    }

    /// Clear all water and seed the top row again. Returns the number of seeded cells.
    pub fn restart(&mut self) -> Result<usize> {
        self.clear_water()?;
        self.seed_top_row()
    }

    /// Step back until `current_step() <= target`. Returns the number of cells reverted.
    pub fn rewind_to(&mut self, target: i64) -> Result<usize> {
        let mut total = 0;
        while self.current_step() > target {
            total += self.step_back()?;
        }
        Ok(total)
    }
}
