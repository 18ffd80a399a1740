use super::Grid;
use crate::config::TRAIL_DECAY;

/// Per-cell afterglow in `[0, 1]`, parallel to the grid.
///
/// Rendering-only: nothing in the automaton reads it back.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    cols: usize,
    rows: usize,
    values: Vec<f32>,
}

impl Trail {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            values: vec![0.0; cols * rows],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        (col < self.cols && row < self.rows).then(|| self.values[row * self.cols + col])
    }

    /// Live cells glow at full strength, everything else fades by `TRAIL_DECAY`.
    ///
    /// `grid` must have the same dimensions as the trail.
    pub fn absorb(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.dimensions(), self.dimensions());

        self.values
            .iter_mut()
            .zip(grid.iter_cells())
            .for_each(|(value, (_, _, cell))| {
                *value = if cell.is_alive() { 1.0 } else { *value * TRAIL_DECAY };
            });
    }

    /// Iterate over all values with their (col, row) positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (idx % self.cols, idx / self.cols, value))
    }
}
