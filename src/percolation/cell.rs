//! Cell states and lattice coordinates.

use serde::{Deserialize, Serialize};

/// State of a single lattice cell.
///
/// The byte values are the codes used by region buffers and the C ABI.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Closed = 0,
    Open = 1,
    /// Only reachable through propagation.
    Water = 2,
}

impl CellType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<CellType> {
        match code {
            0 => Some(CellType::Closed),
            1 => Some(CellType::Open),
            2 => Some(CellType::Water),
            _ => None,
        }
    }
}

/// Integer lattice coordinate. Signed so callers can express (and be refused) negative positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Coord { x, y, z }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Coord {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Coord { x, y, z }
    }
}
