//! Geometric primitives for raster algorithms.
//!
//! Provides the integer-grid types shared by every rasterizer: points,
//! clip windows, polygons, and filled spans.

use crate::error::{Error, Result};

/// A 2D point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate (pixel column).
    pub x: i32,
    /// Y coordinate (pixel row).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to another point.
    ///
    /// This is the step count every bounded line rasterizer works in:
    /// a segment covers `chebyshev_distance + 1` pixels.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangular clip window.
///
/// Always holds `min.x <= max.x` and `min.y <= max.y`; construction
/// normalizes corner order. A zero-width or zero-height window is
/// representable but rejected by the clipper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// Bottom-left corner (minimum x and y).
    pub min: Point,
    /// Top-right corner (maximum x and y).
    pub max: Point,
}

impl Window {
    /// Create a window from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Width of the window (zero for a degenerate window).
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the window (zero for a degenerate window).
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Check that the window has positive extent on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateWindow`] when either extent is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(Error::DegenerateWindow {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Check if a point lies inside the window (boundary inclusive).
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// An ordered vertex list, implicitly closed (last connects back to first).
///
/// Self-intersecting and non-convex polygons are valid input; the scanline
/// filler handles them through the parity rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    /// Vertices in drawing order.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the closed edge list, including the wrap-around edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Check that the polygon has enough vertices to enclose area.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientVertices`] for fewer than 3 vertices.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(Error::InsufficientVertices {
                count: self.vertices.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<(i32, i32)>> for Polygon {
    fn from(vertices: Vec<(i32, i32)>) -> Self {
        Self::new(vertices.into_iter().map(Point::from).collect())
    }
}

/// An inclusive horizontal run of pixels on one scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Scanline row.
    pub y: i32,
    /// Leftmost pixel column (inclusive).
    pub x_start: i32,
    /// Rightmost pixel column (inclusive).
    pub x_end: i32,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(y: i32, x_start: i32, x_end: i32) -> Self {
        Self { y, x_start, x_end }
    }

    /// Number of pixels covered by the span.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x_end - self.x_start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let p = Point::new(0, 0);
        assert_eq!(p.chebyshev_distance(Point::new(5, 2)), 5);
        assert_eq!(p.chebyshev_distance(Point::new(-2, -7)), 7);
        assert_eq!(p.chebyshev_distance(p), 0);
    }

    #[test]
    fn test_window_normalizes_corners() {
        let w = Window::from_corners(Point::new(8, 0), Point::new(0, 8));
        assert_eq!(w.min, Point::new(0, 0));
        assert_eq!(w.max, Point::new(8, 8));
        assert_eq!(w.width(), 8);
        assert_eq!(w.height(), 8);
    }

    #[test]
    fn test_window_contains_boundary() {
        let w = Window::from_corners(Point::new(0, 0), Point::new(8, 8));
        assert!(w.contains(Point::new(0, 8)));
        assert!(w.contains(Point::new(4, 4)));
        assert!(!w.contains(Point::new(9, 4)));
    }

    #[test]
    fn test_degenerate_window_rejected() {
        let w = Window::from_corners(Point::new(3, 0), Point::new(3, 8));
        assert!(matches!(
            w.validate(),
            Err(Error::DegenerateWindow {
                width: 0,
                height: 8
            })
        ));
    }

    #[test]
    fn test_polygon_edges_close_the_loop() {
        let poly = Polygon::from(vec![(0, 0), (4, 0), (4, 4)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(4, 4), Point::new(0, 0)));
    }

    #[test]
    fn test_polygon_vertex_count_validation() {
        let poly = Polygon::from(vec![(0, 0), (4, 0)]);
        assert!(matches!(
            poly.validate(),
            Err(Error::InsufficientVertices { count: 2 })
        ));
        assert!(Polygon::from(vec![(0, 0), (4, 0), (2, 3)])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_span_width() {
        assert_eq!(Span::new(2, 0, 4).width(), 5);
        assert_eq!(Span::new(2, 3, 3).width(), 1);
    }
}
