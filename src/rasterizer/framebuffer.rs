//! Color buffer that every rasterization algorithm writes through

use std::path::Path;
use log::debug;
use super::types::Color;

/// Error type for exporting the framebuffer
#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    ImageError(image::ImageError),
    TooLarge { width: usize, height: usize },
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::IoError(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::ImageError(e)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::ImageError(e) => write!(f, "Image error: {}", e),
            ExportError::TooLarge { width, height } => {
                write!(f, "Framebuffer {}x{} is too large to export", width, height)
            }
        }
    }
}

impl std::error::Error for ExportError {}

/// Row-major color buffer, origin top-left.
/// `pixels.len() == width * height` holds after every operation.
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Color::default(); width * height],
            width,
            height,
        }
    }

    /// Reallocate to `width * height` default pixels. Previous contents are discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!("Resizing framebuffer {}x{} -> {}x{}", self.width, self.height, width, height);
        self.pixels.clear();
        self.pixels.resize(width * height, Color::default());
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Write a pixel. Out-of-bounds writes are silently dropped, so callers
    /// never need to clip against the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[x + y * self.width] = color;
        }
    }

    /// Read a pixel, or None if out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(self.pixels[x + y * self.width])
        } else {
            None
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whole buffer for presentation
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Interleaved RGBA8 copy of the buffer (4 bytes per pixel)
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_bytes());
        }
        bytes
    }

    /// Save the buffer as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        let too_large = || ExportError::TooLarge { width: self.width, height: self.height };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        let img = image::RgbaImage::from_raw(width, height, self.to_rgba8())
            .ok_or_else(too_large)?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        debug!("Saved {}x{} framebuffer to {}", width, height, path.display());
        Ok(())
    }
}
