//! Lattice dimensions and open-probability.
//!
//! A `Config` is validated on construction and treated as immutable by the
//! engine: dimensions only change through an explicit deallocate/resize cycle.

use serde::{Deserialize, Serialize};

use crate::error::{PercolationError, Result};

/// Number of cells along each axis. Y is the vertical axis; water enters at `y = height - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32, depth: i32) -> Result<Self> {
        let dims = Dimensions {
            width,
            height,
            depth,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Cubic lattice with `n` cells per side.
    pub fn cube(n: i32) -> Result<Self> {
        Self::new(n, n, n)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 || self.depth <= 0 {
            return Err(PercolationError::InvalidArgument(format!(
                "dimensions must be positive, got {}x{}x{}",
                self.width, self.height, self.depth
            )));
        }
        self.checked_volume().map(|_| ())
    }

    /// Total number of cells, `W·H·D`.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Horizontal cross-section, `W·D`.
    pub fn footprint(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    fn checked_volume(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(self.depth as usize))
            .ok_or_else(|| {
                PercolationError::InvalidArgument(format!(
                    "lattice {}x{}x{} is too large",
                    self.width, self.height, self.depth
                ))
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub dimensions: Dimensions,
    /// Probability that a cell is rolled `Open`.
    pub probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dimensions: Dimensions {
                width: 9,
                height: 9,
                depth: 9,
            },
            probability: 0.4,
        }
    }
}

impl Config {
    pub fn new(dimensions: Dimensions, probability: f64) -> Result<Self> {
        let config = Config {
            dimensions,
            probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document such as
    /// `{"dimensions": {"width": 9, "height": 9, "depth": 9}, "probability": 0.4}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate()?;
        validate_probability(self.probability)
    }
}

/// Probabilities must be finite and within `[0, 1]`.
pub fn validate_probability(p: f64) -> Result<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(PercolationError::InvalidArgument(format!(
            "probability must be within [0, 1], got {p}"
        )))
    }
}
