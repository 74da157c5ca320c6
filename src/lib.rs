//! Percolation Lattice - 3D site percolation engine
//!
//! Cells of a fixed-size lattice are rolled open or closed with probability `p`;
//! water is seeded on the top face and spreads down and sideways through open
//! cells one breadth-first layer at a time. Every layer is kept, so the
//! propagation can be stepped forward and back for playback.
//!
//! The Rust API lives on [`Engine`]; a C ABI for host UIs is in [`ffi`].

pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod percolation;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::{Config, Dimensions};
pub use error::{PercolationError, Result};
pub use percolation::{CellType, Coord, History, Lattice, StatReport, StatSnapshot};
pub use state::{Engine, Phase};
