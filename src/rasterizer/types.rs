//! Core types for the rasterizer

use serde::{Serialize, Deserialize};
use super::line::LineAlgorithm;
use super::triangle::TriangleAlgorithm;

/// RGB color, usually 0.0-1.0 per channel. Values are passed through unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to [u8; 4] RGBA for presentation (channels clamped, opaque alpha)
    pub fn to_bytes(self) -> [u8; 4] {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [c(self.r), c(self.g), c(self.b), 255]
    }
}

/// Rasterizer settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    /// Algorithm used by `Rasterizer::draw_line`
    pub line: LineAlgorithm,
    /// Algorithm used by `Rasterizer::draw_triangle`
    pub triangle: TriangleAlgorithm,
}

impl RasterSettings {
    pub fn new(line: LineAlgorithm, triangle: TriangleAlgorithm) -> Self {
        Self { line, triangle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_bytes_clamps() {
        assert_eq!(Color::WHITE.to_bytes(), [255, 255, 255, 255]);
        assert_eq!(Color::new(-1.0, 0.5, 3.0).to_bytes(), [0, 128, 255, 255]);
    }

    #[test]
    fn test_default_settings() {
        let s = RasterSettings::default();
        assert_eq!(s.line, LineAlgorithm::BresenhamInt);
        assert_eq!(s.triangle, TriangleAlgorithm::Scanline);
    }
}
