use crate::config::Rgb;
use crate::error::SurfaceError;

/// Source-over blend of one channel, rounded to nearest
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8
}

/// Offscreen RGBA8 surface the backdrop paints into.
///
/// Row-major, 4 bytes per pixel in R, G, B, A order, which is what
/// `Texture2D::from_rgba8` expects. The dirty flag tells the host to
/// re-upload.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    dirty: bool,
}

impl PixelBuffer {
    /// Allocate a black, opaque surface
    pub fn try_new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptyViewport { width, height });
        }

        let too_large = SurfaceError::TooLarge { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large)?;
        pixels.extend((0..len).map(|i| if i % 4 == 3 { 255 } else { 0 }));

        Ok(Self {
            width,
            height,
            pixels,
            dirty: false,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// RGBA at (x, y), `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Overwrite with an opaque colour; out-of-bounds writes are ignored
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    /// Blend `color` at `alpha` over whatever is there. The surface stays opaque.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        let px = &mut self.pixels[i..i + 4];
        px[0] = blend_channel(color.r, px[0], alpha);
        px[1] = blend_channel(color.g, px[1], alpha);
        px[2] = blend_channel(color.b, px[2], alpha);
        px[3] = 255;
    }

    /// Blend a rectangle, clipped to the surface
    pub fn blend_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb, alpha: u8) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            for px in x.min(x_end)..x_end {
                self.blend(px, py, color, alpha);
            }
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning its previous value
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
