use super::Cell;
use rayon::prelude::*;

/// Toroidal 2D grid of cells indexed `(column, row)`.
///
/// Evolution is functional: `evolve` reads `self` and returns a fresh grid,
/// so a step never observes its own partial output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid. Dimensions are clamped to at least 1x1.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    const fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Cell at (col, row), `None` when out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        (col < self.cols && row < self.rows).then(|| self.cells[self.index(col, row)])
    }

    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.get(col, row).is_some_and(Cell::is_alive)
    }

    /// Set a cell; out-of-bounds writes are dropped. Returns whether it landed.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> bool {
        if col < self.cols && row < self.rows {
            let idx = self.index(col, row);
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Count live neighbors with toroidal wrapping: the leftmost column
    /// neighbors the rightmost, the top row neighbors the bottom.
    pub fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        let (cols, rows) = (self.cols, self.rows);

        (0..3usize)
            .flat_map(|dy| (0..3usize).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 1 || dy != 1)
            .map(|(dx, dy)| {
                // dx, dy in {0,1,2} stand for offsets {-1,0,+1}
                let c = (col + dx + cols - 1) % cols;
                let r = (row + dy + rows - 1) % rows;
                self.cells[self.index(c, r)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).map(move |col| {
            let current = self.cells[self.index(col, row)];
            current.evolve(self.count_live_neighbors(col, row))
        })
    }

    /// Next generation, computed serially into a new buffer
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows).flat_map(|row| self.next_row(row)).collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Next generation with rows computed in parallel.
    /// Produces exactly the same grid as `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.cols * self.rows];
        cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                out.iter_mut()
                    .zip(self.next_row(row))
                    .for_each(|(slot, next)| *slot = next);
            });

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Iterate over all cells with their (col, row) positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.cols, idx / self.cols, cell))
    }

    /// Positions of live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(col, row, _)| (col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(cols, rows);
        for &(c, r) in alive {
            grid.set(c, r, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_clamps_to_one_cell() {
        assert_eq!(Grid::new(0, 0).dimensions(), (1, 1));
        assert_eq!(Grid::new(0, 7).dimensions(), (1, 7));
    }

    #[test]
    fn test_out_of_bounds_set_is_dropped() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.set(4, 0, Cell::Alive));
        assert!(!grid.set(0, 4, Cell::Alive));
        assert!(grid.is_extinct());
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_corner_wraps_to_opposite_corner() {
        let grid = grid_with(10, 8, &[(0, 0), (9, 7)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(9, 7), 1);
    }

    #[test]
    fn test_edges_wrap() {
        let grid = grid_with(6, 6, &[(5, 2), (2, 5)]);
        assert_eq!(grid.count_live_neighbors(0, 2), 1);
        assert_eq!(grid.count_live_neighbors(2, 0), 1);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::new(16, 9);
        assert!(grid.evolve().is_extinct());
    }

    #[test]
    fn test_isolated_cell_dies() {
        for (cols, rows) in [(3, 3), (5, 4), (40, 25)] {
            let grid = grid_with(cols, rows, &[(1, 1)]);
            assert!(grid.evolve().is_extinct(), "{cols}x{rows}");
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut grid = grid_with(10, 10, &block);
        for _ in 0..10 {
            grid = grid.evolve();
        }
        let mut alive: Vec<_> = grid.live_cells().collect();
        alive.sort();
        let mut expected = block.to_vec();
        expected.sort();
        assert_eq!(alive, expected);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = grid_with(3, 2, &[(2, 1)]);
        let positions: Vec<_> = grid.iter_cells().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(positions[0], (0, 0));
        assert_eq!(positions[3], (0, 1));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..24, 1usize..24).prop_flat_map(|(cols, rows)| {
            prop::collection::vec(any::<bool>(), cols * rows).prop_map(move |bits| {
                let mut grid = Grid::new(cols, rows);
                for (idx, alive) in bits.into_iter().enumerate() {
                    grid.set(idx % cols, idx / cols, Cell::from(alive));
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn step_follows_b3_s23(grid in arb_grid()) {
            let next = grid.evolve();
            for (col, row, cell) in grid.iter_cells() {
                let n = grid.count_live_neighbors(col, row);
                let expected = match (cell, n) {
                    (Cell::Dead, 3) => Cell::Alive,
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
                prop_assert_eq!(next.get(col, row), Some(expected));
            }
        }

        #[test]
        fn parallel_step_matches_serial(grid in arb_grid()) {
            prop_assert_eq!(grid.evolve_parallel(), grid.evolve());
        }

        #[test]
        fn neighbor_count_never_exceeds_eight(grid in arb_grid()) {
            for (col, row, _) in grid.iter_cells() {
                prop_assert!(grid.count_live_neighbors(col, row) <= 8);
            }
        }
    }
}
