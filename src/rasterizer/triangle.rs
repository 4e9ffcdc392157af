//! Triangle rasterization
//!
//! Three interchangeable fill algorithms:
//! - Scanline: sort by y, interpolate the span of each row
//! - Edge function, brute force: cross product per pixel over the bounding box
//! - Edge function, incremental: same test with per-triangle edge coefficients
//!
//! Pixel (x, y) is sampled at the point (x, y). The edge-function variants fill
//! every sample with all three edge values >= 0, boundary included, so pixels on
//! an edge shared by two triangles are written by both. The scanline variant
//! fills each row as the half-open span [left, right).

use serde::{Serialize, Deserialize};
use super::framebuffer::Framebuffer;
use super::math::{edge, EdgeEquation, Vec2};
use super::types::Color;

/// Triangle fill strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleAlgorithm {
    #[default]
    Scanline,
    EdgeBruteForce,
    EdgeIncremental,
}

impl TriangleAlgorithm {
    pub const ALL: [TriangleAlgorithm; 3] = [
        TriangleAlgorithm::Scanline,
        TriangleAlgorithm::EdgeBruteForce,
        TriangleAlgorithm::EdgeIncremental,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TriangleAlgorithm::Scanline => "Scanline",
            TriangleAlgorithm::EdgeBruteForce => "Edge function",
            TriangleAlgorithm::EdgeIncremental => "Edge function (incremental)",
        }
    }

    /// Next algorithm in `ALL`, wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn draw(self, fb: &mut Framebuffer, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        match self {
            TriangleAlgorithm::Scanline => draw_triangle_scanline(fb, p0, p1, p2, color),
            TriangleAlgorithm::EdgeBruteForce => draw_triangle_edge(fb, p0, p1, p2, color),
            TriangleAlgorithm::EdgeIncremental => draw_triangle_edge_incremental(fb, p0, p1, p2, color),
        }
    }
}

fn is_finite(points: &[Vec2]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// X coordinate of edge a-b at height y. A horizontal edge yields `a.x`.
fn edge_x(a: Vec2, b: Vec2, y: f32) -> f32 {
    if b.y == a.y {
        return a.x;
    }
    a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y)
}

/// Scanline fill: rows from the top vertex to the bottom vertex, each bounded by
/// the long edge (top-bottom) and one of the two short edges.
pub fn draw_triangle_scanline(fb: &mut Framebuffer, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    let mut pts = [p0, p1, p2];
    if !is_finite(&pts) {
        return;
    }
    pts.sort_by(|a, b| a.y.total_cmp(&b.y));
    let [top, mid, bottom] = pts;

    let y_start = top.y.ceil().max(0.0);
    let y_end = bottom.y.floor().min(fb.height() as f32 - 1.0);
    if y_start > y_end {
        return;
    }
    let x_limit = fb.width() as f32;

    for y in (y_start as i32)..=(y_end as i32) {
        let yf = y as f32;
        let long = edge_x(top, bottom, yf);
        // Upper half uses top-mid, lower half (and the middle row) uses mid-bottom
        let short = if yf < mid.y {
            edge_x(top, mid, yf)
        } else {
            edge_x(mid, bottom, yf)
        };
        let (left, right) = if long <= short { (long, short) } else { (short, long) };

        let right = right.min(x_limit);
        let mut x = left.ceil().max(0.0);
        while x < right {
            fb.set_pixel(x as i32, y, color);
            x += 1.0;
        }
    }
}

/// Integer pixel range to test, clipped to the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl Bounds {
    fn of_triangle(fb: &Framebuffer, pts: &[Vec2; 3]) -> Option<Self> {
        let min_x = pts[0].x.min(pts[1].x).min(pts[2].x).floor().max(0.0);
        let max_x = pts[0].x.max(pts[1].x).max(pts[2].x).floor().min(fb.width() as f32 - 1.0);
        let min_y = pts[0].y.min(pts[1].y).min(pts[2].y).floor().max(0.0);
        let max_y = pts[0].y.max(pts[1].y).max(pts[2].y).floor().min(fb.height() as f32 - 1.0);

        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self {
            min_x: min_x as i32,
            max_x: max_x as i32,
            min_y: min_y as i32,
            max_y: max_y as i32,
        })
    }
}

/// Vertices with counter-clockwise winding (positive signed area), plus bounds
fn edge_setup(fb: &Framebuffer, p0: Vec2, p1: Vec2, p2: Vec2) -> Option<([Vec2; 3], Bounds)> {
    let mut pts = [p0, p1, p2];
    if !is_finite(&pts) {
        return None;
    }
    if edge(pts[0], pts[1], pts[2]) < 0.0 {
        pts.swap(1, 2);
    }
    let bounds = Bounds::of_triangle(fb, &pts)?;
    Some((pts, bounds))
}

/// Edge-function fill, evaluating the three cross products at every pixel
pub fn draw_triangle_edge(fb: &mut Framebuffer, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    let Some((pts, bounds)) = edge_setup(fb, p0, p1, p2) else {
        return;
    };

    for y in bounds.min_y..=bounds.max_y {
        for x in bounds.min_x..=bounds.max_x {
            let p = Vec2::new(x as f32, y as f32);
            let e1 = edge(pts[0], pts[1], p);
            let e2 = edge(pts[1], pts[2], p);
            let e3 = edge(pts[2], pts[0], p);

            if e1 >= 0.0 && e2 >= 0.0 && e3 >= 0.0 {
                fb.set_pixel(x, y, color);
            }
        }
    }
}

/// Edge-function fill with the edge equations computed once per triangle
pub fn draw_triangle_edge_incremental(fb: &mut Framebuffer, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    let Some((pts, bounds)) = edge_setup(fb, p0, p1, p2) else {
        return;
    };

    let e1 = EdgeEquation::new(pts[0], pts[1]);
    let e2 = EdgeEquation::new(pts[1], pts[2]);
    let e3 = EdgeEquation::new(pts[2], pts[0]);

    for y in bounds.min_y..=bounds.max_y {
        let yf = y as f32;
        for x in bounds.min_x..=bounds.max_x {
            let xf = x as f32;
            if e1.eval(xf, yf) >= 0.0 && e2.eval(xf, yf) >= 0.0 && e3.eval(xf, yf) >= 0.0 {
                fb.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SIZE: usize = 48;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn render(alg: TriangleAlgorithm, tri: [Vec2; 3]) -> HashSet<(i32, i32)> {
        let mut fb = Framebuffer::new(SIZE, SIZE);
        fb.clear(Color::BLACK);
        alg.draw(&mut fb, tri[0], tri[1], tri[2], Color::WHITE);

        let mut lit = HashSet::new();
        for y in 0..SIZE as i32 {
            for x in 0..SIZE as i32 {
                if fb.get_pixel(x, y) == Some(Color::WHITE) {
                    lit.insert((x, y));
                }
            }
        }
        lit
    }

    fn on_boundary(tri: [Vec2; 3], (x, y): (i32, i32)) -> bool {
        let p = v(x as f32, y as f32);
        edge(tri[0], tri[1], p) == 0.0 || edge(tri[1], tri[2], p) == 0.0 || edge(tri[2], tri[0], p) == 0.0
    }

    fn test_triangles() -> Vec<[Vec2; 3]> {
        vec![
            [v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)],
            [v(0.0, 0.0), v(0.0, 10.0), v(10.0, 0.0)],
            [v(5.0, 2.0), v(40.0, 17.0), v(12.0, 44.0)],
            [v(30.0, 3.0), v(3.0, 30.0), v(44.0, 40.0)],
            [v(2.0, 20.0), v(46.0, 20.0), v(24.0, 45.0)],
            [v(24.0, 1.0), v(2.0, 25.0), v(46.0, 25.0)],
            [v(-20.0, -5.0), v(30.0, 10.0), v(10.0, 70.0)],
            [v(7.0, 9.0), v(33.0, 13.0), v(19.0, 11.0)],
        ]
    }

    #[test]
    fn test_right_triangle_fill() {
        let tri = [v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)];
        for alg in TriangleAlgorithm::ALL {
            let lit = render(alg, tri);
            assert!(lit.contains(&(1, 1)), "{} misses (1, 1)", alg.label());
            assert!(!lit.contains(&(9, 9)), "{} fills (9, 9)", alg.label());
        }

        // Closed triangle: all x, y >= 0 with x + y <= 10
        assert_eq!(render(TriangleAlgorithm::EdgeBruteForce, tri).len(), 66);
        // Half-open spans leave out the hypotenuse
        assert_eq!(render(TriangleAlgorithm::Scanline, tri).len(), 55);
    }

    #[test]
    fn test_edge_variants_identical() {
        let mut tris = test_triangles();
        tris.push([v(2.5, 3.5), v(20.5, 7.0), v(9.0, 30.5)]);
        tris.push([v(40.5, 40.5), v(3.5, 12.0), v(1.0, 44.5)]);
        for tri in tris {
            assert_eq!(
                render(TriangleAlgorithm::EdgeBruteForce, tri),
                render(TriangleAlgorithm::EdgeIncremental, tri),
                "{:?}",
                tri
            );
        }
    }

    #[test]
    fn test_scanline_matches_edge_up_to_boundary() {
        for tri in test_triangles() {
            let scan = render(TriangleAlgorithm::Scanline, tri);
            let edge_set = render(TriangleAlgorithm::EdgeBruteForce, tri);
            assert!(scan.is_subset(&edge_set), "{:?}", tri);
            for p in edge_set.difference(&scan) {
                assert!(on_boundary(tri, *p), "{:?} missing interior {:?}", tri, p);
            }
        }
    }

    #[test]
    fn test_winding_does_not_matter() {
        let cw = [v(5.0, 2.0), v(40.0, 17.0), v(12.0, 44.0)];
        let ccw = [cw[0], cw[2], cw[1]];
        for alg in TriangleAlgorithm::ALL {
            assert_eq!(render(alg, cw), render(alg, ccw), "{}", alg.label());
        }
    }

    #[test]
    fn test_flat_top_and_flat_bottom() {
        let flat_top = [v(4.0, 4.0), v(20.0, 4.0), v(12.0, 20.0)];
        let flat_bottom = [v(12.0, 4.0), v(4.0, 20.0), v(20.0, 20.0)];
        for alg in TriangleAlgorithm::ALL {
            let top = render(alg, flat_top);
            assert!(top.contains(&(4, 4)) && top.contains(&(19, 4)), "{}", alg.label());
            assert!(top.contains(&(12, 19)));

            let bottom = render(alg, flat_bottom);
            assert!(bottom.contains(&(4, 20)) && bottom.contains(&(19, 20)), "{}", alg.label());
            assert!(bottom.contains(&(12, 4)) || alg == TriangleAlgorithm::Scanline);
        }
    }

    #[test]
    fn test_degenerate_triangles() {
        let point = [v(5.0, 5.0), v(5.0, 5.0), v(5.0, 5.0)];
        let line = [v(2.0, 7.0), v(9.0, 7.0), v(15.0, 7.0)];
        for alg in TriangleAlgorithm::ALL {
            let lit = render(alg, point);
            assert!(lit.len() <= 1);
            let lit = render(alg, line);
            assert!(lit.iter().all(|&(_, y)| y == 7));
        }
        assert_eq!(render(TriangleAlgorithm::EdgeIncremental, point).len(), 1);
        assert_eq!(render(TriangleAlgorithm::EdgeBruteForce, line).len(), 14);
    }

    #[test]
    fn test_offscreen_and_invalid_input() {
        let outside = [v(-30.0, -30.0), v(-5.0, -30.0), v(-5.0, -2.0)];
        let huge = [v(-1.0e6, -1.0e6), v(1.0e6, -1.0e6), v(0.0, 1.0e6)];
        let nan = [v(f32::NAN, 0.0), v(10.0, 0.0), v(0.0, 10.0)];
        for alg in TriangleAlgorithm::ALL {
            assert!(render(alg, outside).is_empty());
            assert!(render(alg, nan).is_empty());
            assert_eq!(render(alg, huge).len(), SIZE * SIZE, "{}", alg.label());
        }
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut fb = Framebuffer::new(0, 0);
        for alg in TriangleAlgorithm::ALL {
            alg.draw(&mut fb, v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0), Color::WHITE);
        }
        assert!(fb.pixels().is_empty());
    }
}
