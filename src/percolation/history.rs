//! Propagation history: every step's coordinates in one flat arena.
//!
//! Step `i` occupies `cells[starts[i]..starts[i + 1]]` (the last step runs to the end).
//! Removing the last step is a truncation.

use super::cell::Coord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    cells: Vec<Coord>,
    starts: Vec<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// `len - 1`, or -1 when nothing has been seeded.
    #[inline]
    pub fn current_step(&self) -> i64 {
        self.starts.len() as i64 - 1
    }

    /// Total coordinates across all steps.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn step(&self, i: usize) -> Option<&[Coord]> {
        let start = *self.starts.get(i)?;
        let end = self.starts.get(i + 1).copied().unwrap_or(self.cells.len());
        Some(&self.cells[start..end])
    }

    pub fn last(&self) -> Option<&[Coord]> {
        self.len().checked_sub(1).and_then(|i| self.step(i))
    }

    /// Append a step. Empty steps are never recorded.
    pub fn push_step(&mut self, step: &[Coord]) {
        if step.is_empty() {
            return;
        }
        self.starts.push(self.cells.len());
        self.cells.extend_from_slice(step);
    }

    /// Remove the last step and return its coordinates.
    pub fn pop_step(&mut self) -> Option<Vec<Coord>> {
        let start = self.starts.pop()?;
        Some(self.cells.split_off(start))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.starts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Coord]> + '_ {
        (0..self.len()).filter_map(move |i| self.step(i))
    }
}
