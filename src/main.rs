use macroquad::prelude::*;
use life_backdrop::{Backdrop, BackdropTexture, FrameOutcome, Viewport};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "life-backdrop".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. a host that already installed one) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn current_viewport() -> Viewport {
    Viewport::from_screen(screen_width(), screen_height())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    // None until the first frame reports a viewport
    let mut backdrop: Option<Backdrop> = None;
    let mut texture: Option<BackdropTexture> = None;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // A resize never regrids: tear down and start a fresh instance
        let viewport = current_viewport();
        if backdrop.as_ref().is_none_or(|b| b.viewport() != viewport) {
            texture = None;
            backdrop = Some(Backdrop::new(viewport));
        }

        if let Some(backdrop) = backdrop.as_mut() {
            let outcome = backdrop.frame(get_frame_time());

            if outcome != FrameOutcome::NoSurface {
                if let Some(surface) = backdrop.surface_mut() {
                    if let Some(tex) = texture.as_mut() {
                        tex.sync(surface);
                    } else {
                        texture = BackdropTexture::upload(surface);
                        surface.take_dirty();
                    }
                }
            }
        }

        clear_background(BLACK);
        if let Some(tex) = &texture {
            tex.draw();
        }

        next_frame().await;
    }

    // Release the texture before the surface it mirrors
    drop(texture);
    if let Some(backdrop) = backdrop {
        backdrop.dispose();
    }
}
