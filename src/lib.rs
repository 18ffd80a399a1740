// Domain layer - automaton state and rules
pub mod domain;

// Application layer - tick scheduling and renderer lifecycle
pub mod application;

// Infrastructure layer - software painting and texture upload
pub mod rendering;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use application::{Automaton, Backdrop, FrameOutcome, Viewport};
pub use domain::{Cell, Grid, StepMode, Stencil, Trail, stencils};
pub use error::SurfaceError;
pub use rendering::{BackdropTexture, PixelBuffer};
