mod automaton;
mod backdrop;
mod viewport;

pub use automaton::Automaton;
pub use backdrop::{Backdrop, FrameOutcome};
pub use viewport::Viewport;
