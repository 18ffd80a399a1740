mod cell;
mod grid;
mod patterns;
mod step_mode;
mod trail;
pub mod seed;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Stencil, stencils};
pub use step_mode::StepMode;
pub use trail::Trail;
