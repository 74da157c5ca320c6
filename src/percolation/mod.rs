//! Core percolation logic: lattice storage, propagation and statistics.
//!
//! `Engine` (in `state.rs`) owns the lattice and history; the operations on it
//! live in `lifecycle`, `stepping`, `region` and `stats`. The FFI layer in
//! `ffi/` calls these.

pub mod cell;
pub mod grid;
pub mod history;
pub mod lifecycle;
pub mod region;
pub mod stats;
pub mod stepping;

pub use cell::{CellType, Coord};
pub use grid::{Lattice, NEIGHBOR_OFFSETS};
pub use history::History;
pub use region::{extract_region, import_region};
pub use stats::{
    count_cells, count_percolated, round_to, snapshot_of, CellCounts, StatReport, StatSnapshot,
};
