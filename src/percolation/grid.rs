//! Lattice allocation, bounds-checked cell access, and neighbor enumeration.

use super::cell::{CellType, Coord};
use crate::config::Dimensions;
use crate::error::{PercolationError, Result};

/// Axis-aligned neighbor offsets: +y, +x, -y, -x, +z, -z.
/// The order fixes traversal order within a propagation step.
pub const NEIGHBOR_OFFSETS: [(i32, i32, i32); 6] = [
    (0, 1, 0),
    (1, 0, 0),
    (0, -1, 0),
    (-1, 0, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Dense 3D array of cells, stored flat with x varying fastest, then y, then z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    dims: Dimensions,
    cells: Vec<CellType>,
}

impl Lattice {
    /// Allocate a lattice with every cell `Closed`.
    pub fn allocate(dims: Dimensions) -> Result<Self> {
        dims.validate()?;
        Ok(Lattice {
            dims,
            cells: vec![CellType::Closed; dims.volume()],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.dims.height
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.dims.depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in storage order.
    #[inline]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0
            && c.x < self.dims.width
            && c.y >= 0
            && c.y < self.dims.height
            && c.z >= 0
            && c.z < self.dims.depth
    }

    /// Linear index of an in-bounds coordinate: `x + y·W + z·W·H`.
    #[inline]
    pub fn index_of(&self, c: Coord) -> usize {
        c.z as usize * self.dims.height as usize * self.dims.width as usize
            + c.y as usize * self.dims.width as usize
            + c.x as usize
    }

    /// Inverse of `index_of`.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.dims.width as usize;
        let h = self.dims.height as usize;
        Coord::new(
            (index % w) as i32,
            ((index / w) % h) as i32,
            (index / (w * h)) as i32,
        )
    }

    fn checked_index(&self, c: Coord) -> Result<usize> {
        if self.in_bounds(c) {
            Ok(self.index_of(c))
        } else {
            Err(PercolationError::OutOfBounds {
                x: c.x,
                y: c.y,
                z: c.z,
                width: self.dims.width,
                height: self.dims.height,
                depth: self.dims.depth,
            })
        }
    }

    pub fn get(&self, c: Coord) -> Result<CellType> {
        let idx = self.checked_index(c)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, c: Coord, cell: CellType) -> Result<()> {
        let idx = self.checked_index(c)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: CellType) {
        self.cells.fill(cell);
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellType] {
        &mut self.cells
    }

    /// The up-to-six in-bounds axis neighbors of `c`, in `NEIGHBOR_OFFSETS` order.
    pub fn neighbors6(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy, dz)| c.offset(dx, dy, dz))
            .filter(move |&n| self.in_bounds(n))
    }
}
