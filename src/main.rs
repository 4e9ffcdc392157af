//! softraster viewer
//!
//! Renders a scene with the software rasterizer every frame and shows the
//! resulting buffer in a window.
//!
//! Usage: `softraster [scene.ron]` (falls back to the built-in demo scene)
//!
//! Keys: L = next line algorithm, T = next triangle algorithm,
//! R = reload scene file, P = save screenshot.png, Escape = quit

use log::{error, info, warn};
use macroquad::prelude::*;
use softraster::rasterizer::{Framebuffer, Rasterizer, HEIGHT, WIDTH};
use softraster::scene::{load_scene, Scene};
use softraster::VERSION;
use std::path::{Path, PathBuf};

const SCREENSHOT_PATH: &str = "screenshot.png";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("softraster v{}", VERSION),
        window_width: WIDTH as i32 * 3,
        window_height: HEIGHT as i32 * 3,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn load_or_demo(path: Option<&Path>) -> Scene {
    let Some(path) = path else {
        info!("No scene given, using built-in demo");
        return Scene::demo();
    };
    match load_scene(path) {
        Ok(scene) => {
            info!("Loaded scene '{}' ({} primitives)", scene.name, scene.primitives.len());
            scene
        }
        Err(e) => {
            error!("Failed to load {}: {}, using built-in demo", path.display(), e);
            Scene::demo()
        }
    }
}

/// Draw the framebuffer scaled to fit the window, keeping its aspect ratio
fn present(fb: &Framebuffer) {
    let (Ok(w), Ok(h)) = (u16::try_from(fb.width()), u16::try_from(fb.height())) else {
        return;
    };
    if w == 0 || h == 0 {
        return;
    }

    let screen_w = screen_width();
    let screen_h = screen_height();
    let fb_aspect = w as f32 / h as f32;
    let screen_aspect = screen_w / screen_h;
    let (draw_w, draw_h, draw_x, draw_y) = if fb_aspect > screen_aspect {
        let h = screen_w / fb_aspect;
        (screen_w, h, 0.0, (screen_h - h) * 0.5)
    } else {
        let w = screen_h * fb_aspect;
        (w, screen_h, (screen_w - w) * 0.5, 0.0)
    };

    let texture = Texture2D::from_rgba8(w, h, &fb.to_rgba8());
    texture.set_filter(FilterMode::Nearest);

    draw_texture_ex(
        &texture,
        draw_x,
        draw_y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(draw_w, draw_h)),
            ..Default::default()
        },
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene_path = std::env::args().nth(1).map(PathBuf::from);
    let mut scene = load_or_demo(scene_path.as_deref());
    let mut raster = Rasterizer::default();

    info!("=== softraster v{} ===", VERSION);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if is_key_pressed(KeyCode::L) {
            scene.settings.line = scene.settings.line.next();
            info!("Line algorithm: {}", scene.settings.line.label());
        }

        if is_key_pressed(KeyCode::T) {
            scene.settings.triangle = scene.settings.triangle.next();
            info!("Triangle algorithm: {}", scene.settings.triangle.label());
        }

        if is_key_pressed(KeyCode::R) {
            match &scene_path {
                Some(path) => match load_scene(path) {
                    Ok(mut reloaded) => {
                        // Keep the algorithms picked interactively
                        reloaded.settings = scene.settings;
                        scene = reloaded;
                        info!("Reloaded {}", path.display());
                    }
                    Err(e) => error!("Failed to reload {}: {}", path.display(), e),
                },
                None => warn!("Built-in demo scene has no file to reload"),
            }
        }

        scene.render(&mut raster);

        if is_key_pressed(KeyCode::P) {
            match raster.framebuffer().save_png(SCREENSHOT_PATH) {
                Ok(()) => info!("Saved {}", SCREENSHOT_PATH),
                Err(e) => error!("Failed to save {}: {}", SCREENSHOT_PATH, e),
            }
        }

        clear_background(Color::from_rgba(30, 30, 35, 255));
        present(raster.framebuffer());

        let status = format!(
            "[L] line: {}   [T] triangle: {}",
            scene.settings.line.label(),
            scene.settings.triangle.label()
        );
        draw_text(&status, 10.0, 24.0, 24.0, WHITE);

        next_frame().await;
    }
}
