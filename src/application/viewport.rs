use crate::config::CELL_SIZE;

/// Pixel size of the host surface, read once when a backdrop is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Host sizes arrive as floats (macroquad's `screen_width`)
    pub fn from_screen(width: f32, height: f32) -> Self {
        Self::new(width.max(0.0) as u32, height.max(0.0) as u32)
    }

    /// (cols, rows) covering the viewport: ceil(px / CELL_SIZE), at least 1 each
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cols = self.width.div_ceil(CELL_SIZE).max(1);
        let rows = self.height.div_ceil(CELL_SIZE).max(1);
        (cols as usize, rows as usize)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_round_up() {
        assert_eq!(Viewport::new(1280, 720).grid_dimensions(), (107, 60));
        assert_eq!(Viewport::new(12, 13).grid_dimensions(), (1, 2));
    }

    #[test]
    fn test_empty_viewport_clamps() {
        assert_eq!(Viewport::new(0, 0).grid_dimensions(), (1, 1));
        assert!(Viewport::new(0, 100).is_empty());
    }

    #[test]
    fn test_from_screen_truncates_negative() {
        assert_eq!(Viewport::from_screen(-5.0, 99.9), Viewport::new(0, 99));
    }
}
