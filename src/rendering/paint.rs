//! Software painter for the automaton backdrop.
//!
//! Layers, bottom to top: radial gradient, cell grid lines, trail cells,
//! CRT scan lines.

use super::PixelBuffer;
use crate::config::{
    CELL_SIZE, Rgb, SCANLINE_ALPHA, SCANLINE_PERIOD, SCANLINE_THICKNESS, TRAIL_VISIBLE_THRESHOLD,
    palette,
};
use crate::domain::Trail;

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Byte alpha for a trail value: floor(trail * 255), clamped
pub fn trail_alpha(trail: f32) -> u8 {
    (trail * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Dark green at the centre fading to black. The gradient radius is the
/// surface width, so corners of wide surfaces stay faintly lit.
pub fn draw_background(surface: &mut PixelBuffer) {
    let (w, h) = (surface.width(), surface.height());
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let radius = w as f32;

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
            surface.put(x, y, lerp(palette::GRADIENT_CENTER, palette::GRADIENT_EDGE, t));
        }
    }
}

/// One-pixel lines on every cell boundary
pub fn draw_grid_lines(surface: &mut PixelBuffer) {
    let (w, h) = (surface.width(), surface.height());

    for x in (0..w).step_by(CELL_SIZE as usize) {
        for y in 0..h {
            surface.put(x, y, palette::GRID_LINE);
        }
    }
    for y in (0..h).step_by(CELL_SIZE as usize) {
        for x in 0..w {
            surface.put(x, y, palette::GRID_LINE);
        }
    }
}

/// Fill each glowing cell, inset 1px per side, with the accent colour at an
/// alpha proportional to its trail
pub fn draw_trails(surface: &mut PixelBuffer, trail: &Trail) {
    let inner = CELL_SIZE - 2;

    for (col, row, value) in trail.iter() {
        if value <= TRAIL_VISIBLE_THRESHOLD {
            continue;
        }
        let (Ok(col), Ok(row)) = (u32::try_from(col), u32::try_from(row)) else {
            continue;
        };
        let x = col.saturating_mul(CELL_SIZE).saturating_add(1);
        let y = row.saturating_mul(CELL_SIZE).saturating_add(1);
        surface.blend_rect(x, y, inner, inner, palette::ACCENT, trail_alpha(value));
    }
}

/// Low-alpha black bands, `SCANLINE_THICKNESS` rows every `SCANLINE_PERIOD`
pub fn draw_scanlines(surface: &mut PixelBuffer) {
    let w = surface.width();

    for y in (0..surface.height()).step_by(SCANLINE_PERIOD as usize) {
        surface.blend_rect(0, y, w, SCANLINE_THICKNESS, palette::SCANLINE, SCANLINE_ALPHA);
    }
}

/// Repaint the whole surface from the trail and flag it for upload
pub fn paint(surface: &mut PixelBuffer, trail: &Trail) {
    draw_background(surface);
    draw_grid_lines(surface);
    draw_trails(surface, trail);
    draw_scanlines(surface);
    surface.mark_dirty();
}
