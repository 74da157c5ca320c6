//! Error types for lattice and engine operations.

use thiserror::Error;

use crate::state::Phase;

#[derive(Debug, Error)]
pub enum PercolationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: cannot {operation} while {phase:?}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },

    #[error("Coordinate ({x}, {y}, {z}) outside lattice {width}x{height}x{depth}")]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
    },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PercolationError {
    /// Status code reported across the C ABI. 0 is success, 1 is reserved for null handles.
    pub fn code(&self) -> i32 {
        match self {
            PercolationError::InvalidArgument(_) => 2,
            PercolationError::InvalidState { .. } => 3,
            PercolationError::OutOfBounds { .. } => 4,
            PercolationError::Config(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, PercolationError>;
