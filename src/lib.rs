//! softraster: a 2D software rasterizer
//!
//! Draws line segments and flat-colored triangles into an in-memory RGB
//! buffer, with several interchangeable algorithms per primitive:
//! - Lines: DDA, Bresenham (float), Bresenham (int)
//! - Triangles: scanline, edge function, edge function (incremental)
//!
//! Scenes (RON files) describe what to draw; the `softraster` binary shows
//! them in a window and `raster-compare` benchmarks the algorithms.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod rasterizer;
pub mod scene;
