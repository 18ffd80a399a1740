//! How the next generation is computed.
//!
//! Both modes produce identical grids; they only differ in cost.

use super::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon pool, for very large viewports
    Parallel,
}

impl StepMode {
    pub fn all() -> Vec<StepMode> {
        vec![StepMode::Serial, StepMode::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Serial => "Serial",
            StepMode::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepMode::Serial => "1 byte/cell, single thread",
            StepMode::Parallel => "1 byte/cell, rows across rayon pool",
        }
    }

    pub fn evolve(&self, grid: &Grid) -> Grid {
        match self {
            StepMode::Serial => grid.evolve(),
            StepMode::Parallel => grid.evolve_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(StepMode::default(), StepMode::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = StepMode::all().iter().map(|m| m.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
