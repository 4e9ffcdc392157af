//! 2D software rasterizer
//!
//! Converts line segments and triangles in buffer pixel space into writes on an
//! in-memory color buffer. Several algorithms are kept for each primitive so
//! they can be compared:
//! - Lines: DDA, Bresenham (float error term), Bresenham (integer error term)
//! - Triangles: scanline, edge function, edge function with precomputed edges
//!
//! `Framebuffer::set_pixel` drops out-of-bounds writes, so no algorithm has to
//! clip its input. Triangle search regions and Bresenham walks are still cut to
//! the buffer so most off-screen work is skipped.

mod framebuffer;
mod line;
mod math;
mod triangle;
mod types;

pub use framebuffer::*;
pub use line::*;
pub use math::*;
pub use triangle::*;
pub use types::*;

use log::trace;

/// Default buffer dimensions
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;

/// A framebuffer plus the algorithms selected for drawing into it
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    fb: Framebuffer,
    pub settings: RasterSettings,
}

impl Rasterizer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_settings(width, height, RasterSettings::default())
    }

    pub fn with_settings(width: usize, height: usize, settings: RasterSettings) -> Self {
        Self {
            fb: Framebuffer::new(width, height),
            settings,
        }
    }

    /// Reallocate the buffer. Contents are discarded.
    pub fn resize_buffer(&mut self, width: usize, height: usize) {
        self.fb.resize(width, height);
    }

    pub fn clear_buffer(&mut self, color: Color) {
        self.fb.clear(color);
    }

    pub fn width(&self) -> usize {
        self.fb.width()
    }

    pub fn height(&self) -> usize {
        self.fb.height()
    }

    /// Row-major pixels, origin top-left
    pub fn buffer(&self) -> &[Color] {
        self.fb.pixels()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.fb.set_pixel(x, y, color);
    }

    /// Draw a segment with the selected line algorithm
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        trace!("{} line {:?} -> {:?}", self.settings.line.label(), start, end);
        self.settings.line.draw(&mut self.fb, start, end, color);
    }

    /// Fill a triangle with the selected triangle algorithm
    pub fn draw_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        trace!("{} triangle {:?} {:?} {:?}", self.settings.triangle.label(), p0, p1, p2);
        self.settings.triangle.draw(&mut self.fb, p0, p1, p2, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake() {
        let mut r = Rasterizer::new(16, 8);
        assert_eq!((r.width(), r.height()), (16, 8));
        r.clear_buffer(Color::BLUE);
        assert_eq!(r.buffer().len(), 128);
        assert!(r.buffer().iter().all(|&c| c == Color::BLUE));
    }

    #[test]
    fn test_draws_use_selected_algorithms() {
        for line in LineAlgorithm::ALL {
            for triangle in TriangleAlgorithm::ALL {
                let mut r = Rasterizer::with_settings(32, 32, RasterSettings::new(line, triangle));
                r.clear_buffer(Color::BLACK);
                r.draw_line(Vec2::new(0.0, 0.0), Vec2::new(31.0, 0.0), Color::RED);
                r.draw_triangle(Vec2::new(4.0, 4.0), Vec2::new(28.0, 4.0), Vec2::new(4.0, 28.0), Color::GREEN);

                assert!((0..32).all(|x| r.framebuffer().get_pixel(x, 0) == Some(Color::RED)));
                assert_eq!(r.framebuffer().get_pixel(6, 6), Some(Color::GREEN));
                assert_eq!(r.framebuffer().get_pixel(27, 27), Some(Color::BLACK));
            }
        }
    }

    #[test]
    fn test_resize_to_zero_then_draw() {
        let mut r = Rasterizer::new(10, 10);
        r.resize_buffer(0, 0);
        for line in LineAlgorithm::ALL {
            r.settings.line = line;
            r.draw_line(Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0), Color::WHITE);
        }
        for triangle in TriangleAlgorithm::ALL {
            r.settings.triangle = triangle;
            r.draw_triangle(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(0.0, 5.0), Color::WHITE);
        }
        r.clear_buffer(Color::WHITE);
        assert!(r.buffer().is_empty());
    }

    #[test]
    fn test_out_of_bounds_set_pixel_is_noop() {
        let mut r = Rasterizer::new(4, 4);
        r.clear_buffer(Color::BLACK);
        r.set_pixel(-1, 0, Color::WHITE);
        r.set_pixel(4, 0, Color::WHITE);
        r.set_pixel(0, -1, Color::WHITE);
        r.set_pixel(0, 4, Color::WHITE);
        assert!(r.buffer().iter().all(|&c| c == Color::BLACK));
    }
}
