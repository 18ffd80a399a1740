use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Automaton, Viewport};
use crate::rendering::{PixelBuffer, paint};

/// What a single frame callback did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not enough time accumulated for a step
    Idle,
    /// Stepped and repainted; the surface needs re-upload
    Painted,
    /// No drawing surface; nothing happens, ever
    NoSurface,
}

/// The running automaton background.
///
/// Constructing one initializes and paints the first frame; from then on
/// every `frame` call may step and repaint. Dropping it (or `dispose`)
/// releases the offscreen surface. A different viewport needs a new
/// instance.
pub struct Backdrop {
    viewport: Viewport,
    automaton: Automaton,
    surface: Option<PixelBuffer>,
}

impl Backdrop {
    /// Seed from OS entropy
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, &mut rand::rng())
    }

    /// Reproducible starting population
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let (cols, rows) = viewport.grid_dimensions();
        Self::from_automaton(viewport, Automaton::seeded(cols, rows, rng))
    }

    /// Wrap an existing automaton. Its grid should cover `viewport`.
    pub fn from_automaton(viewport: Viewport, automaton: Automaton) -> Self {
        let surface = PixelBuffer::try_new(viewport.width, viewport.height).ok();

        let (cols, rows) = automaton.dimensions();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            cols,
            rows,
            population = automaton.grid().population(),
            "backdrop created"
        );

        let mut backdrop = Self {
            viewport,
            automaton,
            surface,
        };
        backdrop.repaint();
        backdrop
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&PixelBuffer> {
        self.surface.as_ref()
    }

    /// Mutable access for hosts that consume the dirty flag
    pub fn surface_mut(&mut self) -> Option<&mut PixelBuffer> {
        self.surface.as_mut()
    }

    /// One frame callback: accumulate `delta_time`, step when due, repaint.
    pub fn frame(&mut self, delta_time: f32) -> FrameOutcome {
        if self.surface.is_none() {
            return FrameOutcome::NoSurface;
        }
        if !self.automaton.advance(delta_time) {
            return FrameOutcome::Idle;
        }
        self.repaint()
    }

    fn repaint(&mut self) -> FrameOutcome {
        match self.surface.as_mut() {
            Some(surface) => {
                paint(surface, self.automaton.trail());
                FrameOutcome::Painted
            }
            None => FrameOutcome::NoSurface,
        }
    }

    /// Tear down now rather than at end of scope
    pub fn dispose(self) {}
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.surface = None;
        tracing::debug!(generation = self.automaton.generation(), "backdrop disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_painted_on_creation() {
        let backdrop = Backdrop::with_seed(Viewport::new(120, 72), 1);
        assert!(backdrop.surface().is_some_and(PixelBuffer::is_dirty));
        assert_eq!(backdrop.automaton().dimensions(), (10, 6));
    }

    #[test]
    fn test_frame_gates_on_tick_interval() {
        let mut backdrop = Backdrop::with_seed(Viewport::new(120, 72), 1);
        assert_eq!(backdrop.frame(0.016), FrameOutcome::Idle);
        assert_eq!(backdrop.frame(0.1), FrameOutcome::Painted);
        assert_eq!(backdrop.automaton().generation(), 1);
    }

    #[test]
    fn test_empty_viewport_is_a_no_op() {
        let mut backdrop = Backdrop::with_seed(Viewport::new(0, 0), 1);
        assert!(!backdrop.has_surface());
        assert_eq!(backdrop.automaton().dimensions(), (1, 1));
        assert_eq!(backdrop.frame(1.0), FrameOutcome::NoSurface);
        assert_eq!(backdrop.automaton().generation(), 0);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = Backdrop::with_seed(Viewport::new(640, 480), 99);
        let b = Backdrop::with_seed(Viewport::new(640, 480), 99);
        assert_eq!(a.automaton().grid(), b.automaton().grid());
        assert_eq!(
            a.surface().map(PixelBuffer::as_bytes),
            b.surface().map(PixelBuffer::as_bytes)
        );
    }

    #[test]
    fn test_dispose_consumes() {
        let backdrop = Backdrop::new(Viewport::new(48, 48));
        backdrop.dispose();
    }
}
