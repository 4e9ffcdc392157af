//! Scenes: lists of 2D primitives submitted to the rasterizer
//!
//! Coordinates are already in buffer pixel space; nothing is transformed.

mod file;

pub use file::*;

use serde::{Serialize, Deserialize};
use crate::rasterizer::{Color, RasterSettings, Rasterizer, Vec2, HEIGHT, WIDTH};

/// A primitive to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        start: Vec2,
        end: Vec2,
        color: Color,
    },
    Triangle {
        p0: Vec2,
        p1: Vec2,
        p2: Vec2,
        color: Color,
    },
}

impl Primitive {
    pub fn draw(&self, raster: &mut Rasterizer) {
        match *self {
            Primitive::Line { start, end, color } => raster.draw_line(start, end, color),
            Primitive::Triangle { p0, p1, p2, color } => raster.draw_triangle(p0, p1, p2, color),
        }
    }
}

/// Buffer setup plus the primitives drawn into it, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub clear_color: Color,
    pub settings: RasterSettings,
    pub primitives: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: "untitled".to_string(),
            width: WIDTH,
            height: HEIGHT,
            clear_color: Color::BLACK,
            settings: RasterSettings::default(),
            primitives: Vec::new(),
        }
    }
}

impl Scene {
    pub fn new(name: &str, width: usize, height: usize) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn add_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.primitives.push(Primitive::Line { start, end, color });
    }

    pub fn add_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        self.primitives.push(Primitive::Triangle { p0, p1, p2, color });
    }

    /// Draw the whole scene: resize if needed, clear, then every primitive in order
    pub fn render(&self, raster: &mut Rasterizer) {
        if raster.width() != self.width || raster.height() != self.height {
            raster.resize_buffer(self.width, self.height);
        }
        raster.settings = self.settings;
        raster.clear_buffer(self.clear_color);
        for primitive in &self.primitives {
            primitive.draw(raster);
        }
    }

    /// Built-in scene: a line fan covering all octants, a few triangles of
    /// different shapes (flat top, flat bottom, partly off-screen, degenerate)
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo", WIDTH, HEIGHT);
        scene.clear_color = Color::new(0.08, 0.08, 0.1);

        // Triangles first so the line fan stays visible on top
        scene.add_triangle(
            Vec2::new(20.0, 20.0),
            Vec2::new(110.0, 20.0),
            Vec2::new(65.0, 100.0),
            Color::new(0.8, 0.3, 0.2),
        );
        scene.add_triangle(
            Vec2::new(65.0, 130.0),
            Vec2::new(20.0, 220.0),
            Vec2::new(110.0, 220.0),
            Color::new(0.2, 0.6, 0.3),
        );
        scene.add_triangle(
            Vec2::new(250.0, 10.0),
            Vec2::new(360.0, 90.0),
            Vec2::new(215.0, 120.0),
            Color::new(0.2, 0.4, 0.8),
        );
        scene.add_triangle(
            Vec2::new(230.5, 150.25),
            Vec2::new(305.75, 175.5),
            Vec2::new(250.0, 260.0),
            Color::new(0.7, 0.6, 0.2),
        );
        scene.add_triangle(
            Vec2::new(140.0, 225.0),
            Vec2::new(170.0, 225.0),
            Vec2::new(200.0, 225.0),
            Color::WHITE,
        );

        let center = Vec2::new(160.0, 120.0);
        let spokes = 24;
        for i in 0..spokes {
            let angle = i as f32 / spokes as f32 * std::f32::consts::TAU;
            let end = center + Vec2::new(angle.cos(), angle.sin()) * 70.0;
            let shade = 0.4 + 0.6 * (i as f32 / spokes as f32);
            scene.add_line(center, end, Color::new(shade, shade, 1.0));
        }
        scene.add_line(Vec2::new(-40.0, 235.0), Vec2::new(400.0, 200.0), Color::GREEN);
        scene.add_line(Vec2::new(300.0, 20.0), Vec2::new(300.0, 20.0), Color::RED);

        scene
    }
}
