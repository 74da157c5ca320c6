//! Core engine structure and lifecycle queries.

use crate::config::{Config, Dimensions};
use crate::error::{PercolationError, Result};
use crate::percolation::cell::{CellType, Coord};
use crate::percolation::grid::Lattice;
use crate::percolation::history::History;

/// Lifecycle of an engine, derived from what it currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Only a configuration exists.
    Uninitialized,
    /// Lattice allocated and still all `Closed`, no water.
    Allocated,
    /// Open/closed layout rolled or written by hand, no water.
    Randomized,
    /// Step 0 exists.
    Seeded,
    /// At least one forward step beyond the seed.
    Stepping,
    /// A forward expansion found nothing new.
    Finished,
}

/// A percolation engine. Exclusively owns its lattice and propagation history.
#[derive(Clone, Debug)]
pub struct Engine {
    pub(crate) config: Config,
    pub(crate) lattice: Option<Lattice>,
    pub(crate) history: History,
    pub(crate) layout_set: bool,
    pub(crate) finished: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Config::default())
    }
}

impl Engine {
    /// Create an engine holding `config`. No lattice is allocated until `initialize`.
    pub fn new(config: Config) -> Self {
        Engine {
            config,
            lattice: None,
            history: History::new(),
            layout_set: false,
            finished: false,
        }
    }

    /// Create and allocate in one call.
    pub fn with_lattice(config: Config) -> Result<Self> {
        let mut engine = Engine::new(config);
        engine.initialize()?;
        Ok(engine)
    }

    pub fn phase(&self) -> Phase {
        if self.lattice.is_none() {
            return Phase::Uninitialized;
        }
        if self.finished {
            return Phase::Finished;
        }
        match self.history.len() {
            0 if self.layout_set => Phase::Randomized,
            0 => Phase::Allocated,
            1 => Phase::Seeded,
            _ => Phase::Stepping,
        }
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.lattice.is_some()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    pub fn probability(&self) -> f64 {
        self.config.probability
    }

    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the most recent step, or -1 before seeding.
    pub fn current_step(&self) -> i64 {
        self.history.current_step()
    }

    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Coordinates that became water during step `i`.
    pub fn step_cells(&self, i: usize) -> Option<&[Coord]> {
        self.history.step(i)
    }

    pub fn cell(&self, c: Coord) -> Result<CellType> {
        self.require_lattice("read a cell")?.get(c)
    }

    pub(crate) fn invalid_state(&self, operation: &'static str) -> PercolationError {
        PercolationError::InvalidState {
            operation,
            phase: self.phase(),
        }
    }

    pub(crate) fn require_lattice(&self, operation: &'static str) -> Result<&Lattice> {
        self.lattice
            .as_ref()
            .ok_or_else(|| self.invalid_state(operation))
    }

    pub(crate) fn require_lattice_mut(&mut self, operation: &'static str) -> Result<&mut Lattice> {
        let phase = self.phase();
        self.lattice
            .as_mut()
            .ok_or(PercolationError::InvalidState { operation, phase })
    }
}
