use rand::Rng;

use crate::config::TICK_INTERVAL;
use crate::domain::{Grid, StepMode, Trail, seed};

/// Automaton state: grid, trail and the tick accumulator.
///
/// Grid dimensions are fixed for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Automaton {
    grid: Grid,
    trail: Trail,
    mode: StepMode,
    accumulator: f32,
    generation: u64,
}

impl Automaton {
    /// Seeded starting population for a `cols x rows` grid
    pub fn seeded<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> Self {
        Self::from_grid(seed::seed_grid(cols, rows, rng))
    }

    /// Start from an explicit grid. The trail begins at zero everywhere.
    pub fn from_grid(grid: Grid) -> Self {
        let (cols, rows) = grid.dimensions();
        Self {
            grid,
            trail: Trail::new(cols, rows),
            mode: StepMode::default(),
            accumulator: 0.0,
            generation: 0,
        }
    }

    pub fn with_mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Feed elapsed frame time. Steps once when at least `TICK_INTERVAL` has
    /// accumulated, then resets the accumulator to zero. Returns whether a
    /// step happened.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.accumulator += delta_time;
        }
        if self.accumulator < TICK_INTERVAL {
            return false;
        }
        self.accumulator = 0.0;
        self.step();
        true
    }

    /// One generation: compute the whole next grid, commit it, then fold the
    /// new state into the trail.
    pub fn step(&mut self) {
        self.grid = self.mode.evolve(&self.grid);
        self.trail.absorb(&self.grid);
        self.generation += 1;

        tracing::trace!(
            generation = self.generation,
            population = self.grid.population(),
            "automaton step"
        );
    }
}
