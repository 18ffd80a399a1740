//! Initial population: the glider gun and pulsar stencils plus sparse noise.

use rand::Rng;

use super::{Cell, Grid, stencils};
use crate::config::{GLIDER_GUN_ANCHOR, PULSAR_ANCHOR_FRACTION, SEED_DENSITY};

/// Anchor (col, row) of the pulsar for a grid of the given size
pub fn pulsar_anchor(cols: usize, rows: usize) -> (usize, usize) {
    let (fx, fy) = PULSAR_ANCHOR_FRACTION;
    (
        (cols as f32 * fx).floor() as usize,
        (rows as f32 * fy).floor() as usize,
    )
}

/// Stamp both stencils onto an empty `cols x rows` grid.
///
/// Returns the grid and a row-major mask of the cells the stencils touched.
pub fn stamp_stencils(cols: usize, rows: usize) -> (Grid, Vec<bool>) {
    let mut grid = Grid::new(cols, rows);
    let (cols, rows) = grid.dimensions();
    let mut touched = vec![false; cols * rows];

    let (gun_col, gun_row) = GLIDER_GUN_ANCHOR;
    let (pulsar_col, pulsar_row) = pulsar_anchor(cols, rows);

    let footprint = stencils::GLIDER_GUN
        .stamp(&mut grid, gun_col, gun_row)
        .into_iter()
        .chain(stencils::PULSAR.stamp(&mut grid, pulsar_col, pulsar_row));
    for (col, row) in footprint {
        touched[row * cols + col] = true;
    }

    (grid, touched)
}

/// Build the starting grid. Every cell no stencil touched comes alive
/// independently with probability `SEED_DENSITY`.
pub fn seed_grid<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> Grid {
    let (mut grid, touched) = stamp_stencils(cols, rows);
    let (cols, _) = grid.dimensions();

    for (idx, _) in touched.iter().enumerate().filter(|&(_, t)| !t) {
        if rng.random_bool(SEED_DENSITY) {
            grid.set(idx % cols, idx / cols, Cell::Alive);
        }
    }

    grid
}
