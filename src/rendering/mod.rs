mod paint;
mod pixel_buffer;
mod present;

pub use paint::{draw_background, draw_grid_lines, draw_scanlines, draw_trails, paint, trail_alpha};
pub use pixel_buffer::PixelBuffer;
pub use present::BackdropTexture;
