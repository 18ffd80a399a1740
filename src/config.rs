//! Compiled-in tuning constants for the backdrop.
//!
//! None of these are runtime-configurable; a different look means a rebuild.

/// Edge length of one automaton cell, in pixels
pub const CELL_SIZE: u32 = 12;

/// Seconds of accumulated frame time between automaton steps
pub const TICK_INTERVAL: f32 = 0.1;

/// Per-tick multiplier applied to the trail of a dead cell
pub const TRAIL_DECAY: f32 = 0.9;

/// Trails at or below this value are not painted
pub const TRAIL_VISIBLE_THRESHOLD: f32 = 0.05;

/// Probability that a cell outside every stencil starts alive
pub const SEED_DENSITY: f64 = 0.02;

/// Fixed (column, row) anchor of the glider gun
pub const GLIDER_GUN_ANCHOR: (usize, usize) = (5, 5);

/// Pulsar anchor as fractions of (cols, rows)
pub const PULSAR_ANCHOR_FRACTION: (f32, f32) = (0.7, 0.4);

/// Scan lines start every `SCANLINE_PERIOD` pixel rows
pub const SCANLINE_PERIOD: u32 = 4;
pub const SCANLINE_THICKNESS: u32 = 2;
/// Roughly 30% black
pub const SCANLINE_ALPHA: u8 = 77;

/// Opaque RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminal/HUD palette
pub mod palette {
    use super::Rgb;

    /// #022c22
    pub const GRADIENT_CENTER: Rgb = Rgb::new(0x02, 0x2c, 0x22);
    /// #000000
    pub const GRADIENT_EDGE: Rgb = Rgb::new(0x00, 0x00, 0x00);
    /// #064e3b
    pub const GRID_LINE: Rgb = Rgb::new(0x06, 0x4e, 0x3b);
    /// #22c55e
    pub const ACCENT: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
    pub const SCANLINE: Rgb = Rgb::new(0x00, 0x00, 0x00);
}
