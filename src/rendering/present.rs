use macroquad::prelude::*;

use super::PixelBuffer;

/// GPU copy of the backdrop surface, drawn full-bleed behind everything else.
///
/// Dropping it releases the texture.
pub struct BackdropTexture {
    texture: Texture2D,
    width: u32,
    height: u32,
}

impl BackdropTexture {
    /// Upload `surface` as a new texture. `None` if it exceeds the texture
    /// size limit, in which case the backdrop stays invisible.
    pub fn upload(surface: &PixelBuffer) -> Option<Self> {
        let width = u16::try_from(surface.width()).ok()?;
        let height = u16::try_from(surface.height()).ok()?;

        let texture = Texture2D::from_rgba8(width, height, surface.as_bytes());
        texture.set_filter(FilterMode::Nearest);

        Some(Self {
            texture,
            width: surface.width(),
            height: surface.height(),
        })
    }

    /// Re-upload if the surface was repainted since the last sync
    pub fn sync(&mut self, surface: &mut PixelBuffer) -> bool {
        if !surface.take_dirty() {
            return false;
        }
        if (surface.width(), surface.height()) != (self.width, self.height) {
            if let Some(fresh) = Self::upload(surface) {
                *self = fresh;
            }
            return true;
        }
        self.texture
            .update_from_bytes(self.width, self.height, surface.as_bytes());
        true
    }

    /// Stretch over the whole screen
    pub fn draw(&self) {
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}
