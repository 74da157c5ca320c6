//! Bulk export of cell codes and bulk import of open/closed layouts.

use super::cell::{CellType, Coord};
use super::grid::Lattice;
use crate::error::Result;
use crate::state::Engine;

/// Half-open box `[min, max)` clamped to the lattice. `None` if it is empty.
fn clamp_box(lattice: &Lattice, min: Coord, max: Coord) -> Option<(Coord, Coord)> {
    let min = Coord::new(
        min.x.clamp(0, lattice.width()),
        min.y.clamp(0, lattice.height()),
        min.z.clamp(0, lattice.depth()),
    );
    let max = Coord::new(
        max.x.clamp(0, lattice.width()),
        max.y.clamp(0, lattice.height()),
        max.z.clamp(0, lattice.depth()),
    );

    if min.x >= max.x || min.y >= max.y || min.z >= max.z {
        None
    } else {
        Some((min, max))
    }
}

fn box_volume(min: Coord, max: Coord) -> usize {
    (max.x - min.x) as usize * (max.y - min.y) as usize * (max.z - min.z) as usize
}

/// Copy cell codes from `[min, max)` into `out_buf`.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest), one
/// `CellType::code()` byte per cell.
///
/// # Returns
/// Number of bytes written, or 0 if the clamped region is empty or the buffer too small.
pub fn extract_region(lattice: &Lattice, out_buf: &mut [u8], min: Coord, max: Coord) -> usize {
    let Some((min, max)) = clamp_box(lattice, min, max) else {
        return 0;
    };
    if out_buf.len() < box_volume(min, max) {
        return 0;
    }

    let mut offset = 0;
    for z in min.z..max.z {
        for y in min.y..max.y {
            for x in min.x..max.x {
                let idx = lattice.index_of(Coord::new(x, y, z));
                out_buf[offset] = lattice.cells()[idx].code();
                offset += 1;
            }
        }
    }

    offset
}

/// Load an open/closed layout into `[min, max)` from a z,y,x ordered buffer.
/// Zero means closed, anything else open.
///
/// # Returns
/// Number of bytes read, or 0 if the clamped region is empty or the buffer too short.
pub fn import_region(lattice: &mut Lattice, in_buf: &[u8], min: Coord, max: Coord) -> usize {
    let Some((min, max)) = clamp_box(lattice, min, max) else {
        return 0;
    };
    if in_buf.len() < box_volume(min, max) {
        return 0;
    }

    let mut offset = 0;
    for z in min.z..max.z {
        for y in min.y..max.y {
            for x in min.x..max.x {
                let cell = if in_buf[offset] == 0 {
                    CellType::Closed
                } else {
                    CellType::Open
                };
                let idx = lattice.index_of(Coord::new(x, y, z));
                lattice.cells_mut()[idx] = cell;
                offset += 1;
            }
        }
    }

    offset
}

impl Engine {
    pub fn extract_region(&self, out_buf: &mut [u8], min: Coord, max: Coord) -> Result<usize> {
        let lattice = self.require_lattice("extract a region")?;
        Ok(extract_region(lattice, out_buf, min, max))
    }

    /// Import a layout. Same rules as `set_cell`: only while no water exists.
    pub fn import_region(&mut self, in_buf: &[u8], min: Coord, max: Coord) -> Result<usize> {
        if !self.history.is_empty() {
            return Err(self.invalid_state("import a region"));
        }
        let lattice = self.require_lattice_mut("import a region")?;
        let read = import_region(lattice, in_buf, min, max);
        if read > 0 {
            self.layout_set = true;
        }
        Ok(read)
    }
}
