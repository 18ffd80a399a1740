use super::{Cell, Grid};

/// A fixed pattern stamped into the grid at an anchor.
///
/// `cells` lists the live cells as `(row, col)` offsets from the top-left of
/// the stencil's `height x width` bounding box.
#[derive(Clone, Copy, Debug)]
pub struct Stencil {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: &'static [(usize, usize)],
}

impl Stencil {
    pub fn is_live(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Write the whole bounding box into `grid` with its top-left at
    /// `(anchor_col, anchor_row)`: live offsets become alive, the rest dead.
    ///
    /// Cells that fall outside the grid are dropped without error. Returns the
    /// `(col, row)` positions that were actually written.
    pub fn stamp(&self, grid: &mut Grid, anchor_col: usize, anchor_row: usize) -> Vec<(usize, usize)> {
        let mut footprint = Vec::with_capacity(self.width * self.height);

        for row in 0..self.height {
            for col in 0..self.width {
                let (Some(c), Some(r)) = (anchor_col.checked_add(col), anchor_row.checked_add(row))
                else {
                    continue;
                };
                if grid.set(c, r, Cell::from(self.is_live(row, col))) {
                    footprint.push((c, r));
                }
            }
        }

        footprint
    }
}

/// Stencil table
pub mod stencils {
    use super::Stencil;

    /// Gosper glider gun, period 30
    pub const GLIDER_GUN: Stencil = Stencil {
        name: "Gosper Glider Gun",
        description: "Emits a glider every 30 generations",
        width: 36,
        height: 9,
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    };

    /// Pulsar, period 3
    pub const PULSAR: Stencil = Stencil {
        name: "Pulsar",
        description: "Oscillator (period 3)",
        width: 13,
        height: 13,
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    };

    /// Horizontal triple, period 2
    pub const BLINKER: Stencil = Stencil {
        name: "Blinker",
        description: "Oscillator (period 2)",
        width: 3,
        height: 1,
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    /// 2x2 still life
    pub const BLOCK: Stencil = Stencil {
        name: "Block",
        description: "Still life",
        width: 2,
        height: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    };

    /// Moves one cell diagonally every 4 generations
    pub const GLIDER: Stencil = Stencil {
        name: "Glider",
        description: "Spaceship (period 4)",
        width: 3,
        height: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    };

    pub const ALL: &[Stencil] = &[GLIDER_GUN, PULSAR, BLINKER, BLOCK, GLIDER];
}

#[cfg(test)]
mod tests {
    use super::stencils::*;
    use super::*;

    #[test]
    fn test_offsets_inside_bounding_box() {
        for stencil in ALL {
            assert!(
                stencil.cells.iter().all(|&(r, c)| r < stencil.height && c < stencil.width),
                "{}",
                stencil.name
            );
        }
    }

    #[test]
    fn test_cell_counts() {
        assert_eq!(GLIDER_GUN.cells.len(), 36);
        assert_eq!(PULSAR.cells.len(), 48);
    }

    #[test]
    fn test_stamp_reproduces_pattern() {
        let mut grid = Grid::new(60, 40);
        let footprint = GLIDER_GUN.stamp(&mut grid, 5, 5);
        assert_eq!(footprint.len(), 36 * 9);

        let mut alive: Vec<_> = grid.live_cells().collect();
        alive.sort();
        let mut expected: Vec<_> = GLIDER_GUN.cells.iter().map(|&(r, c)| (c + 5, r + 5)).collect();
        expected.sort();
        assert_eq!(alive, expected);
    }

    #[test]
    fn test_stamp_clips_silently() {
        let mut grid = Grid::new(10, 10);
        let footprint = PULSAR.stamp(&mut grid, 7, 7);
        assert_eq!(footprint.len(), 3 * 3);
        // only rows 0..3, cols 0..3 of the pulsar land: (0,2) and (2,0)
        let alive: Vec<_> = grid.live_cells().collect();
        assert_eq!(alive, vec![(9, 7), (7, 9)]);
    }

    #[test]
    fn test_stamp_far_outside_writes_nothing() {
        let mut grid = Grid::new(4, 4);
        assert!(BLOCK.stamp(&mut grid, usize::MAX, 0).is_empty());
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_stamp_clears_dead_cells_in_box() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 1, Cell::Alive);
        GLIDER.stamp(&mut grid, 0, 0);
        // (row 1, col 1) is dead in the glider
        assert!(!grid.is_alive(1, 1));
    }
}
