//! Scanline polygon fill.
//!
//! Sweeps the polygon's vertical extent row by row, intersecting each
//! scanline with the non-horizontal edges, and pairs the sorted
//! intersections into filled spans.

use crate::error::Result;
use crate::geometry::{Polygon, Span};
use crate::trace::{Trace, TraceStep};

/// Fill a polygon, producing ordered horizontal spans.
///
/// Edge inclusion uses the half-open parity rule `ymin <= y < ymax`, so a
/// vertex shared by two edges is counted exactly once per scanline. Spans
/// round inward (`ceil` of the left intersection, `floor` of the right)
/// onto integer pixel columns. An odd intersection count (possible for
/// self-intersecting input) drops the final unpaired intersection rather
/// than guessing a span for it.
///
/// # Errors
///
/// [`Error::InsufficientVertices`](crate::Error::InsufficientVertices) for
/// fewer than 3 vertices.
pub fn fill_polygon(polygon: &Polygon) -> Result<Vec<Span>> {
    let mut trace = Trace::disabled();
    scanline_fill(polygon, &mut trace)
}

/// Fill a polygon and capture the per-scanline derivation trace.
///
/// # Errors
///
/// Same as [`fill_polygon`].
pub fn fill_polygon_traced(polygon: &Polygon) -> Result<(Vec<Span>, Trace)> {
    let mut trace = Trace::new();
    let spans = scanline_fill(polygon, &mut trace)?;
    Ok((spans, trace))
}

fn scanline_fill(polygon: &Polygon, trace: &mut Trace) -> Result<Vec<Span>> {
    polygon.validate()?;

    let min_y = polygon.vertices.iter().map(|v| v.y).min().unwrap_or(0);
    let max_y = polygon.vertices.iter().map(|v| v.y).max().unwrap_or(0);
    trace.push(
        TraceStep::new("vertical extent")
            .value("ymin", min_y)
            .value("ymax", max_y),
    );

    let mut spans = Vec::new();

    for y in min_y..=max_y {
        let mut xs = scanline_intersections(polygon, y);
        xs.sort_by(|a, b| a.total_cmp(b));

        let mut step = TraceStep::new("scanline").value("y", y);
        for &x in &xs {
            step = step.value("x", x);
        }
        trace.push(step);

        // Pair left-to-right; an odd trailing intersection stays unfilled.
        for pair in xs.chunks_exact(2) {
            let x_start = pair[0].ceil() as i32;
            let x_end = pair[1].floor() as i32;
            if x_start <= x_end {
                spans.push(Span::new(y, x_start, x_end));
                trace.push(
                    TraceStep::new("span")
                        .value("y", y)
                        .value("x_start", x_start)
                        .value("x_end", x_end),
                );
            }
        }
    }

    Ok(spans)
}

/// X coordinates where the polygon's edges cross scanline `y`.
///
/// Horizontal edges never intersect; every other edge contributes iff
/// `y` lies in the half-open interval `[min(a.y, b.y), max(a.y, b.y))`.
fn scanline_intersections(polygon: &Polygon, y: i32) -> Vec<f64> {
    let mut xs = Vec::new();

    for (a, b) in polygon.edges() {
        if a.y == b.y {
            continue;
        }

        let ymin = a.y.min(b.y);
        let ymax = a.y.max(b.y);
        if y < ymin || y >= ymax {
            continue;
        }

        let t = f64::from(y - a.y) / f64::from(b.y - a.y);
        xs.push(f64::from(a.x) + t * f64::from(b.x - a.x));
    }

    xs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_square_fills_every_row_edge_to_edge() {
        // The half-open edge rule excludes y == ymax, so the top row of
        // the square has no intersections: rows 0..=3 are filled.
        let square = Polygon::from(vec![(0, 0), (4, 0), (4, 4), (0, 4)]);
        let spans = fill_polygon(&square).expect("valid polygon");
        assert_eq!(spans.len(), 4);
        for (i, span) in spans.iter().enumerate() {
            assert_eq!(*span, Span::new(i as i32, 0, 4));
        }
    }

    #[test]
    fn test_triangle_spans_narrow_toward_apex() {
        let triangle = Polygon::from(vec![(0, 0), (8, 0), (4, 4)]);
        let spans = fill_polygon(&triangle).expect("valid polygon");
        assert_eq!(spans[0], Span::new(0, 0, 8));
        let last = spans.last().expect("non-empty fill");
        assert!(last.width() < spans[0].width());
        // Rows are emitted bottom-up in order.
        for pair in spans.windows(2) {
            assert!(pair[0].y <= pair[1].y);
        }
    }

    #[test]
    fn test_shared_vertex_counted_once() {
        // Diamond: the left/right corners sit on a scanline where two
        // edges meet; the half-open rule keeps the intersection count even.
        let diamond = Polygon::from(vec![(4, 0), (8, 4), (4, 8), (0, 4)]);
        let spans = fill_polygon(&diamond).expect("valid polygon");
        assert!(spans.iter().any(|s| s.y == 4 && s.x_start == 0 && s.x_end == 8));
        // One span per covered scanline for a convex polygon.
        for y in 0..8 {
            assert_eq!(spans.iter().filter(|s| s.y == y).count(), 1, "row {y}");
        }
    }

    #[test]
    fn test_non_convex_polygon_splits_spans() {
        // U shape: rows inside the notch get two spans.
        let u = Polygon::from(vec![
            (0, 0),
            (10, 0),
            (10, 6),
            (7, 6),
            (7, 2),
            (3, 2),
            (3, 6),
            (0, 6),
        ]);
        let spans = fill_polygon(&u).expect("valid polygon");
        let row4: Vec<_> = spans.iter().filter(|s| s.y == 4).collect();
        assert_eq!(row4.len(), 2);
        assert!(row4[0].x_end < row4[1].x_start);
    }

    #[test]
    fn test_self_intersecting_parity() {
        // Bowtie crossing at (4,2): the parity rule fills the two lobes.
        let bowtie = Polygon::from(vec![(0, 0), (8, 4), (8, 0), (0, 4)]);
        let spans = fill_polygon(&bowtie).expect("valid polygon");
        let row1: Vec<_> = spans.iter().filter(|s| s.y == 1).collect();
        assert_eq!(row1.len(), 2, "two lobes on row 1: {row1:?}");
    }

    #[test]
    fn test_too_few_vertices_refused() {
        let degenerate = Polygon::from(vec![(0, 0), (5, 5)]);
        assert_eq!(
            fill_polygon(&degenerate).unwrap_err(),
            Error::InsufficientVertices { count: 2 }
        );
    }

    #[test]
    fn test_trace_records_scanlines_and_spans() {
        let square = Polygon::from(vec![(0, 0), (2, 0), (2, 2), (0, 2)]);
        let (spans, trace) = fill_polygon_traced(&square).expect("valid polygon");
        assert_eq!(spans.len(), 2);
        assert!(trace.steps().iter().any(|s| s.label == "scanline"));
        assert!(trace.steps().iter().any(|s| s.label == "span"));
    }
}
