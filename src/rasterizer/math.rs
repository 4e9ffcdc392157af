//! 2D math for buffer-space rasterization

use std::ops::{Add, Sub, Mul};
use serde::{Serialize, Deserialize};

/// 2D point in buffer pixel space (origin top-left, y down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Z component of the 3D cross product of the two vectors
    pub fn perp_dot(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Snap to the nearest pixel. NaN snaps to 0, infinities saturate.
    pub fn snap(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// Edge function: (b - a) x (c - a).
/// Zero when c lies on the line through a and b, positive on one side.
pub fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Linear edge coefficients so that `i * x + j * y + f == edge(a, b, (x, y))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEquation {
    pub i: f32,
    pub j: f32,
    pub f: f32,
}

impl EdgeEquation {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            i: a.y - b.y,
            j: b.x - a.x,
            f: a.x * b.y - a.y * b.x,
        }
    }

    #[inline]
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.i * x + self.j * y + self.f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_dot() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert!((a.perp_dot(b) - 1.0).abs() < 0.001);
        assert!((b.perp_dot(a) + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_edge_sign() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(edge(a, b, Vec2::new(5.0, 3.0)) > 0.0);
        assert!(edge(a, b, Vec2::new(5.0, -3.0)) < 0.0);
        assert_eq!(edge(a, b, Vec2::new(7.0, 0.0)), 0.0);
    }

    #[test]
    fn test_edge_equation_matches_edge() {
        let a = Vec2::new(2.0, 7.0);
        let b = Vec2::new(-3.0, 4.0);
        let eq = EdgeEquation::new(a, b);
        for y in -5..5 {
            for x in -5..5 {
                let p = Vec2::new(x as f32, y as f32);
                assert_eq!(eq.eval(p.x, p.y), edge(a, b, p));
            }
        }
    }

    #[test]
    fn test_snap() {
        assert_eq!(Vec2::new(1.4, 2.6).snap(), (1, 3));
        assert_eq!(Vec2::new(-0.4, -1.6).snap(), (0, -2));
        assert_eq!(Vec2::new(f32::NAN, 3.0).snap(), (0, 3));
    }
}
