//! Line rasterization
//!
//! Three interchangeable algorithms, kept side by side for comparison:
//! - DDA: floating-point position accumulation
//! - Bresenham with a floating-point error term
//! - Bresenham with an integer error term (the default)
//!
//! All of them snap the endpoints to the nearest pixel, write both endpoints,
//! and write exactly one pixel per step along the major axis.

use std::mem::swap;
use serde::{Serialize, Deserialize};
use super::framebuffer::Framebuffer;
use super::math::Vec2;
use super::types::Color;

/// Line drawing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAlgorithm {
    Dda,
    BresenhamFloat,
    #[default]
    BresenhamInt,
}

impl LineAlgorithm {
    pub const ALL: [LineAlgorithm; 3] = [
        LineAlgorithm::Dda,
        LineAlgorithm::BresenhamFloat,
        LineAlgorithm::BresenhamInt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LineAlgorithm::Dda => "DDA",
            LineAlgorithm::BresenhamFloat => "Bresenham (float)",
            LineAlgorithm::BresenhamInt => "Bresenham (int)",
        }
    }

    /// Next algorithm in `ALL`, wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn draw(self, fb: &mut Framebuffer, start: Vec2, end: Vec2, color: Color) {
        match self {
            LineAlgorithm::Dda => draw_line_dda(fb, start, end, color),
            LineAlgorithm::BresenhamFloat => draw_line_bresenham_float(fb, start, end, color),
            LineAlgorithm::BresenhamInt => draw_line_bresenham_int(fb, start, end, color),
        }
    }
}

/// Snap both endpoints to pixels. Non-finite input draws nothing.
fn snap_endpoints(start: Vec2, end: Vec2) -> Option<((i32, i32), (i32, i32))> {
    let finite = |p: Vec2| p.x.is_finite() && p.y.is_finite();
    if !finite(start) || !finite(end) {
        return None;
    }
    Some((start.snap(), end.snap()))
}

/// DDA: step `max(|dx|, |dy|)` times, accumulating per-step increments in floating point
pub fn draw_line_dda(fb: &mut Framebuffer, start: Vec2, end: Vec2, color: Color) {
    let Some(((x0, y0), (x1, y1))) = snap_endpoints(start, end) else {
        return;
    };

    let dx = x1 as i64 - x0 as i64;
    let dy = y1 as i64 - y0 as i64;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        fb.set_pixel(x0, y0, color);
        return;
    }

    let x_inc = dx as f32 / steps as f32;
    let y_inc = dy as f32 / steps as f32;
    let mut x = x0 as f32;
    let mut y = y0 as f32;

    for _ in 0..=steps {
        fb.set_pixel(x.round() as i32, y.round() as i32, color);
        x += x_inc;
        y += y_inc;
    }
}

/// Bresenham with a floating-point error term
pub fn draw_line_bresenham_float(fb: &mut Framebuffer, start: Vec2, end: Vec2, color: Color) {
    let Some(((x0, y0), (x1, y1))) = snap_endpoints(start, end) else {
        return;
    };

    if (x1 as i64 - x0 as i64).abs() >= (y1 as i64 - y0 as i64).abs() {
        let limit = major_limit(fb.width());
        walk_float(x0, y0, x1, y1, limit, |x, y| fb.set_pixel(x, y, color));
    } else {
        let limit = major_limit(fb.height());
        walk_float(y0, x0, y1, x1, limit, |y, x| fb.set_pixel(x, y, color));
    }
}

/// Bresenham with an integer error term
pub fn draw_line_bresenham_int(fb: &mut Framebuffer, start: Vec2, end: Vec2, color: Color) {
    let Some(((x0, y0), (x1, y1))) = snap_endpoints(start, end) else {
        return;
    };

    if (x1 as i64 - x0 as i64).abs() >= (y1 as i64 - y0 as i64).abs() {
        let limit = major_limit(fb.width());
        walk_int(x0, y0, x1, y1, limit, |x, y| fb.set_pixel(x, y, color));
    } else {
        let limit = major_limit(fb.height());
        walk_int(y0, x0, y1, x1, limit, |y, x| fb.set_pixel(x, y, color));
    }
}

/// Last major-axis coordinate that can land inside a buffer of this extent
fn major_limit(extent: usize) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX).saturating_sub(1)
}

/// Walk along the major axis `a`, advancing the minor axis `b` whenever the
/// accumulated slope passes the midpoint. Requires |a1 - a0| >= |b1 - b0|.
///
/// The walk always runs towards increasing `a`, so it stops once `a` passes
/// `limit`; everything after that is outside the buffer. Segments starting far
/// before the buffer still cost one step per pixel up to it.
///
/// The error term is kept scaled by `run` (slope `rise`, midpoint `run / 2`) so
/// every value is a whole or half integer, exact in f32 while `run * rise` stays
/// below 2^24.
fn walk_float(
    mut a0: i32,
    mut b0: i32,
    mut a1: i32,
    mut b1: i32,
    limit: i32,
    mut plot: impl FnMut(i32, i32),
) {
    if a0 > a1 {
        swap(&mut a0, &mut a1);
        swap(&mut b0, &mut b1);
    }

    let run = (a1 as i64 - a0 as i64) as f32;
    let rise = (b1 as i64 - b0 as i64).abs() as f32;
    let b_step = if b1 >= b0 { 1 } else { -1 };
    let end = a1.min(limit);

    let (mut a, mut b) = (a0, b0);
    let mut delta = 0.0f32;
    let mut middle = 0.5 * run;
    plot(a, b);

    while a < end {
        a += 1;
        delta += rise;
        if delta > middle {
            middle += run;
            b += b_step;
        }
        plot(a, b);
    }
}

/// `walk_float` scaled by a further 2: the slope becomes `2 * rise` and the
/// midpoint `run`, so everything is an integer.
fn walk_int(
    mut a0: i32,
    mut b0: i32,
    mut a1: i32,
    mut b1: i32,
    limit: i32,
    mut plot: impl FnMut(i32, i32),
) {
    if a0 > a1 {
        swap(&mut a0, &mut a1);
        swap(&mut b0, &mut b1);
    }

    let run = a1 as i64 - a0 as i64;
    let rise = (b1 as i64 - b0 as i64).abs();
    let b_step = if b1 >= b0 { 1 } else { -1 };
    let scale = 2 * run;
    let k = 2 * rise;
    let end = a1.min(limit);

    let (mut a, mut b) = (a0, b0);
    let mut delta = 0i64;
    let middle = run;
    plot(a, b);

    while a < end {
        a += 1;
        delta += k;
        // Same test as raising the threshold by `scale`
        if delta > middle {
            delta -= scale;
            b += b_step;
        }
        plot(a, b);
    }
}
