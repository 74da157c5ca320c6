//! Allocation, layout rolling, seeding and clearing.

use rand::Rng;
use tracing::{debug, info};

use super::cell::{CellType, Coord};
use super::grid::Lattice;
use crate::config::{validate_probability, Dimensions};
use crate::error::{PercolationError, Result};
use crate::state::Engine;

impl Engine {
    /// Allocate an all-`Closed` lattice of the configured size.
    ///
    /// Fails with `InvalidState` if a lattice is already allocated; call `deallocate` first.
    pub fn initialize(&mut self) -> Result<()> {
        if self.lattice.is_some() {
            return Err(self.invalid_state("initialize"));
        }

        let lattice = Lattice::allocate(self.config.dimensions)?;
        info!(
            "Allocated {}x{}x{} lattice ({} cells)",
            lattice.width(),
            lattice.height(),
            lattice.depth(),
            lattice.len()
        );

        self.lattice = Some(lattice);
        self.history.clear();
        self.layout_set = false;
        self.finished = false;
        Ok(())
    }

    /// Drop the lattice and history together. The configuration is kept.
    pub fn deallocate(&mut self) -> Result<()> {
        if self.lattice.is_none() {
            return Err(self.invalid_state("deallocate"));
        }

        self.lattice = None;
        self.history.clear();
        self.layout_set = false;
        self.finished = false;
        info!("Lattice deallocated");
        Ok(())
    }

    /// Change the configured dimensions. Only legal while no lattice is allocated.
    pub fn resize(&mut self, dims: Dimensions) -> Result<()> {
        if self.lattice.is_some() {
            return Err(self.invalid_state("resize"));
        }
        dims.validate()?;
        self.config.dimensions = dims;
        debug!("Resized to {}x{}x{}", dims.width, dims.height, dims.depth);
        Ok(())
    }

    /// Full rebuild at new dimensions: deallocate, resize, initialize, randomize, seed.
    ///
    /// Returns the number of seeded cells.
    pub fn rebuild<R: Rng + ?Sized>(&mut self, dims: Dimensions, rng: &mut R) -> Result<usize> {
        dims.validate()?;
        validate_probability(self.config.probability)?;
        if self.lattice.is_some() {
            self.deallocate()?;
        }
        self.resize(dims)?;
        self.initialize()?;
        self.randomize(rng)?;
        self.seed_top_row()
    }

    pub fn set_probability(&mut self, p: f64) -> Result<()> {
        validate_probability(p)?;
        self.config.probability = p;
        Ok(())
    }

    /// Independently roll every cell: `Open` if a uniform `[0, 1)` draw is below the
    /// configured probability, else `Closed`. Clears all water and history.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let p = self.config.probability;
        validate_probability(p)?;

        let lattice = self.require_lattice_mut("randomize")?;
        for cell in lattice.cells_mut() {
            *cell = if rng.gen::<f64>() < p {
                CellType::Open
            } else {
                CellType::Closed
            };
        }

        self.history.clear();
        self.layout_set = true;
        self.finished = false;
        debug!("Randomized lattice with p = {}", p);
        Ok(())
    }

    /// Set the probability, then randomize.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, p: f64, rng: &mut R) -> Result<()> {
        self.set_probability(p)?;
        self.randomize(rng)
    }

    /// Convert every `Open` cell on the top face (`y = H - 1`) to water and record it as step 0.
    ///
    /// The face is scanned x-major, z-minor. If no top cell is open, nothing is recorded.
    /// Returns the number of seeded cells.
    pub fn seed_top_row(&mut self) -> Result<usize> {
        if !self.history.is_empty() {
            return Err(self.invalid_state("seed the top row"));
        }
        let phase = self.phase();
        let Some(lattice) = self.lattice.as_mut() else {
            return Err(PercolationError::InvalidState {
                operation: "seed the top row",
                phase,
            });
        };

        let top = lattice.height() - 1;
        let mut seeds = Vec::new();
        for x in 0..lattice.width() {
            for z in 0..lattice.depth() {
                let c = Coord::new(x, top, z);
                let idx = lattice.index_of(c);
                if lattice.cells()[idx] == CellType::Open {
                    lattice.cells_mut()[idx] = CellType::Water;
                    seeds.push(c);
                }
            }
        }

        self.history.push_step(&seeds);
        self.finished = false;
        debug!("Seeded {} top cells", seeds.len());
        Ok(seeds.len())
    }

    /// Revert every water cell to `Open` and drop the whole history in one pass.
    ///
    /// Returns the number of cells reverted.
    pub fn clear_water(&mut self) -> Result<usize> {
        let lattice = self.require_lattice_mut("clear water")?;

        let mut reverted = 0;
        for cell in lattice.cells_mut() {
            if *cell == CellType::Water {
                *cell = CellType::Open;
                reverted += 1;
            }
        }

        self.history.clear();
        self.finished = false;
        debug!("Cleared {} water cells", reverted);
        Ok(reverted)
    }

    /// Hand-edit the layout. Only `Open`/`Closed` may be written, and only while no water exists.
    pub fn set_cell(&mut self, c: Coord, cell: CellType) -> Result<()> {
        if cell == CellType::Water {
            return Err(PercolationError::InvalidArgument(
                "water cells are only produced by propagation".into(),
            ));
        }
        if !self.history.is_empty() {
            return Err(self.invalid_state("edit cells"));
        }
        self.require_lattice_mut("edit cells")?.set(c, cell)?;
        self.layout_set = true;
        Ok(())
    }

    /// Set every cell to `cell` (`Open` or `Closed`). Same rules as `set_cell`.
    pub fn fill(&mut self, cell: CellType) -> Result<()> {
        if cell == CellType::Water {
            return Err(PercolationError::InvalidArgument(
                "water cells are only produced by propagation".into(),
            ));
        }
        if !self.history.is_empty() {
            return Err(self.invalid_state("edit cells"));
        }
        self.require_lattice_mut("edit cells")?.fill(cell);
        self.layout_set = true;
        Ok(())
    }
}
