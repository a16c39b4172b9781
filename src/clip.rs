//! Line clipping against an axis-aligned window.
//!
//! Two algorithms over the same contract: Cohen–Sutherland (region
//! outcodes, iterative boundary re-intersection) and Liang–Barsky
//! (parametric interval, each boundary visited exactly once). Both return
//! their step-by-step derivation trace unconditionally; the trace is part
//! of the clipping contract, not optional instrumentation.

use crate::error::Result;
use crate::geometry::{Point, Window};
use crate::pixels::PixelSet;
use crate::raster::{rasterize_line, LineVariant};
use crate::trace::{Trace, TraceStep};

/// Tolerance below which a direction component counts as parallel to a
/// boundary (the denominator guard shares it).
const PARALLEL_EPS: f64 = 1e-4;

/// Cohen–Sutherland safety valve: corner-grazing float cases could
/// otherwise re-intersect forever.
const MAX_ITERATIONS: u32 = 16;

/// Clipping algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipVariant {
    /// Outcode-driven iterative clipping.
    #[default]
    CohenSutherland,
    /// Parametric clipping; each boundary tested once.
    LiangBarsky,
}

/// Why a segment was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The segment lies entirely outside the window. A normal outcome.
    Outside,
    /// The Cohen–Sutherland iteration cap fired on a near-degenerate
    /// numerical case. Reported distinctly so callers can detect it.
    IterationCap,
}

/// Verdict of a clipping call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipOutcome {
    /// The (possibly shortened) segment intersects the window.
    Accepted {
        /// Clipped start point.
        p0: (f64, f64),
        /// Clipped end point.
        p1: (f64, f64),
    },
    /// No part of the segment is kept.
    Rejected(RejectReason),
}

impl ClipOutcome {
    /// Whether any part of the segment survived.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Result of a clipping call: verdict plus mandatory derivation trace.
#[derive(Debug, Clone)]
pub struct ClipResult {
    /// Accept/reject verdict with clipped endpoints on accept.
    pub outcome: ClipOutcome,
    /// Step-by-step derivation log.
    pub trace: Trace,
}

/// Clip a segment against a window with the chosen algorithm.
///
/// # Errors
///
/// [`Error::DegenerateWindow`](crate::Error::DegenerateWindow) when the
/// window has zero width or height. A segment entirely outside the window
/// is *not* an error; it reports as
/// [`ClipOutcome::Rejected`]`(`[`RejectReason::Outside`]`)`.
pub fn clip_line(p0: Point, p1: Point, window: &Window, variant: ClipVariant) -> Result<ClipResult> {
    window.validate()?;

    let mut trace = Trace::new();
    trace.push(
        TraceStep::new("window")
            .value("xmin", window.min.x)
            .value("xmax", window.max.x)
            .value("ymin", window.min.y)
            .value("ymax", window.max.y),
    );
    trace.push(
        TraceStep::new("segment")
            .value("x0", p0.x)
            .value("y0", p0.y)
            .value("x1", p1.x)
            .value("y1", p1.y),
    );

    let outcome = match variant {
        ClipVariant::CohenSutherland => cohen_sutherland(p0, p1, window, &mut trace),
        ClipVariant::LiangBarsky => liang_barsky(p0, p1, window, &mut trace),
    };

    Ok(ClipResult { outcome, trace })
}

/// Clip a segment, then rasterize the accepted portion.
///
/// Clipping composes upstream of line rasterization: the clipped endpoints
/// are rounded to the pixel grid and scan-converted with `line_variant`.
/// A rejected segment yields an empty pixel set.
///
/// # Errors
///
/// Degenerate windows as in [`clip_line`], plus any error from the chosen
/// line variant on the rounded endpoints.
pub fn clip_and_rasterize(
    p0: Point,
    p1: Point,
    window: &Window,
    clip_variant: ClipVariant,
    line_variant: LineVariant,
) -> Result<ClippedRaster> {
    let ClipResult { outcome, trace } = clip_line(p0, p1, window, clip_variant)?;

    let pixels = match outcome {
        ClipOutcome::Accepted { p0: (x0, y0), p1: (x1, y1) } => rasterize_line(
            Point::new(x0.round() as i32, y0.round() as i32),
            Point::new(x1.round() as i32, y1.round() as i32),
            line_variant,
        )?,
        ClipOutcome::Rejected(_) => PixelSet::new(),
    };

    Ok(ClippedRaster {
        outcome,
        trace,
        pixels,
    })
}

/// Result of [`clip_and_rasterize`]: the clip verdict and trace plus the
/// pixels of the accepted portion (empty on reject).
#[derive(Debug, Clone)]
pub struct ClippedRaster {
    /// Clipping verdict.
    pub outcome: ClipOutcome,
    /// Clipping derivation log.
    pub trace: Trace,
    /// Scan-converted pixels of the clipped segment.
    pub pixels: PixelSet,
}

/// Rasterize the window border as one deduplicated pixel sequence.
///
/// The four edges are scan-converted with DDA; corner pixels are shared
/// between adjacent edges and emitted once.
///
/// # Errors
///
/// [`Error::DegenerateWindow`](crate::Error::DegenerateWindow) for a
/// zero-extent window.
pub fn window_border_pixels(window: &Window) -> Result<PixelSet> {
    window.validate()?;

    let bl = window.min;
    let br = Point::new(window.max.x, window.min.y);
    let tr = window.max;
    let tl = Point::new(window.min.x, window.max.y);

    let mut border = PixelSet::new();
    for (a, b) in [(bl, br), (br, tr), (tr, tl), (tl, bl)] {
        let edge = rasterize_line(a, b, LineVariant::Dda)?;
        border.extend_from(&edge);
    }
    Ok(border)
}

// ============================================================================
// Cohen–Sutherland
// ============================================================================

const OUT_LEFT: u8 = 1;
const OUT_RIGHT: u8 = 2;
const OUT_BOTTOM: u8 = 4;
const OUT_TOP: u8 = 8;

/// 4-bit region code: one bit per violated window boundary, computed from
/// strict inequalities against the window extents.
fn outcode(x: f64, y: f64, window: &Window) -> u8 {
    let mut code = 0;

    if x < f64::from(window.min.x) {
        code |= OUT_LEFT;
    } else if x > f64::from(window.max.x) {
        code |= OUT_RIGHT;
    }

    if y < f64::from(window.min.y) {
        code |= OUT_BOTTOM;
    } else if y > f64::from(window.max.y) {
        code |= OUT_TOP;
    }

    code
}

/// Keep a denominator away from zero without losing its sign.
fn guarded(d: f64) -> f64 {
    if d.abs() < PARALLEL_EPS {
        PARALLEL_EPS.copysign(d)
    } else {
        d
    }
}

fn cohen_sutherland(p0: Point, p1: Point, window: &Window, trace: &mut Trace) -> ClipOutcome {
    let (mut x0, mut y0) = (f64::from(p0.x), f64::from(p0.y));
    let (mut x1, mut y1) = (f64::from(p1.x), f64::from(p1.y));

    let (xmin, xmax) = (f64::from(window.min.x), f64::from(window.max.x));
    let (ymin, ymax) = (f64::from(window.min.y), f64::from(window.max.y));

    let mut out0 = outcode(x0, y0, window);
    let mut out1 = outcode(x1, y1, window);

    for iter in 1..=MAX_ITERATIONS {
        trace.push(
            TraceStep::new("iteration")
                .value("iter", iter)
                .value("out0", out0)
                .value("out1", out1),
        );

        if (out0 | out1) == 0 {
            trace.push(TraceStep::new("trivial accept (out0 | out1 == 0)"));
            return ClipOutcome::Accepted {
                p0: (x0, y0),
                p1: (x1, y1),
            };
        }

        if (out0 & out1) != 0 {
            trace.push(TraceStep::new("trivial reject (out0 & out1 != 0)"));
            return ClipOutcome::Rejected(RejectReason::Outside);
        }

        // One endpoint is outside; intersect it with a single violated
        // boundary and recompute its outcode.
        let out = if out0 != 0 { out0 } else { out1 };
        let dx = x1 - x0;
        let dy = y1 - y0;

        let (x, y) = if out & OUT_TOP != 0 {
            let x = x0 + dx * (ymax - y0) / guarded(dy);
            trace.push(TraceStep::new("clip to TOP").value("x", x).value("y", ymax));
            (x, ymax)
        } else if out & OUT_BOTTOM != 0 {
            let x = x0 + dx * (ymin - y0) / guarded(dy);
            trace.push(TraceStep::new("clip to BOTTOM").value("x", x).value("y", ymin));
            (x, ymin)
        } else if out & OUT_RIGHT != 0 {
            let y = y0 + dy * (xmax - x0) / guarded(dx);
            trace.push(TraceStep::new("clip to RIGHT").value("x", xmax).value("y", y));
            (xmax, y)
        } else {
            let y = y0 + dy * (xmin - x0) / guarded(dx);
            trace.push(TraceStep::new("clip to LEFT").value("x", xmin).value("y", y));
            (xmin, y)
        };

        if out == out0 {
            x0 = x;
            y0 = y;
            out0 = outcode(x0, y0, window);
            trace.push(TraceStep::new("update P0").value("x0", x0).value("y0", y0));
        } else {
            x1 = x;
            y1 = y;
            out1 = outcode(x1, y1, window);
            trace.push(TraceStep::new("update P1").value("x1", x1).value("y1", y1));
        }
    }

    trace.push(TraceStep::new("stopped (safety iteration cap)").value("cap", MAX_ITERATIONS));
    ClipOutcome::Rejected(RejectReason::IterationCap)
}

// ============================================================================
// Liang–Barsky
// ============================================================================

fn liang_barsky(p0: Point, p1: Point, window: &Window, trace: &mut Trace) -> ClipOutcome {
    let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));

    let dx = x1 - x0;
    let dy = y1 - y0;

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    trace.push(TraceStep::new("P(t) = P0 + t*(P1 - P0), t in [0, 1]").value("dx", dx).value("dy", dy));

    // Each boundary is a half-plane p*t <= q; visited exactly once.
    let boundaries: [(&'static str, f64, f64); 4] = [
        ("left", -dx, x0 - f64::from(window.min.x)),
        ("right", dx, f64::from(window.max.x) - x0),
        ("bottom", -dy, y0 - f64::from(window.min.y)),
        ("top", dy, f64::from(window.max.y) - y0),
    ];

    for (name, p, q) in boundaries {
        if p.abs() < PARALLEL_EPS {
            if q < 0.0 {
                trace.push(TraceStep::new("parallel and outside, reject").value("q", q));
                return ClipOutcome::Rejected(RejectReason::Outside);
            }
            trace.push(TraceStep::new("parallel and inside, keep").value("q", q));
            continue;
        }

        let r = q / p;
        trace.push(
            TraceStep::new(name)
                .value("p", p)
                .value("q", q)
                .value("r", r),
        );

        if p < 0.0 {
            if r > t_exit {
                trace.push(TraceStep::new("r > t_exit, reject"));
                return ClipOutcome::Rejected(RejectReason::Outside);
            }
            if r > t_enter {
                t_enter = r;
                trace.push(TraceStep::new("narrow entry").value("t_enter", t_enter));
            }
        } else {
            if r < t_enter {
                trace.push(TraceStep::new("r < t_enter, reject"));
                return ClipOutcome::Rejected(RejectReason::Outside);
            }
            if r < t_exit {
                t_exit = r;
                trace.push(TraceStep::new("narrow exit").value("t_exit", t_exit));
            }
        }
    }

    if t_enter > t_exit {
        trace.push(TraceStep::new("t_enter > t_exit, reject"));
        return ClipOutcome::Rejected(RejectReason::Outside);
    }

    let clipped0 = (x0 + t_enter * dx, y0 + t_enter * dy);
    let clipped1 = (x0 + t_exit * dx, y0 + t_exit * dy);
    trace.push(
        TraceStep::new("accept")
            .value("t_enter", t_enter)
            .value("t_exit", t_exit),
    );

    ClipOutcome::Accepted {
        p0: clipped0,
        p1: clipped1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn window() -> Window {
        Window::from_corners(Point::new(0, 0), Point::new(8, 8))
    }

    fn accepted(result: &ClipResult) -> ((f64, f64), (f64, f64)) {
        match result.outcome {
            ClipOutcome::Accepted { p0, p1 } => (p0, p1),
            ClipOutcome::Rejected(reason) => panic!("unexpected reject: {reason:?}"),
        }
    }

    #[test]
    fn test_outcode_regions() {
        let w = window();
        assert_eq!(outcode(4.0, 4.0, &w), 0);
        assert_eq!(outcode(-1.0, 4.0, &w), OUT_LEFT);
        assert_eq!(outcode(9.0, 9.0, &w), OUT_RIGHT | OUT_TOP);
        assert_eq!(outcode(4.0, -1.0, &w), OUT_BOTTOM);
        // Boundary points are inside (strict inequalities).
        assert_eq!(outcode(0.0, 8.0, &w), 0);
    }

    #[test]
    fn test_both_variants_clip_horizontal_crossing() {
        for variant in [ClipVariant::CohenSutherland, ClipVariant::LiangBarsky] {
            let result = clip_line(Point::new(-2, 5), Point::new(10, 5), &window(), variant)
                .expect("valid window");
            let ((x0, y0), (x1, y1)) = accepted(&result);
            assert_relative_eq!(x0, 0.0, epsilon = 1e-9);
            assert_relative_eq!(y0, 5.0, epsilon = 1e-9);
            assert_relative_eq!(x1, 8.0, epsilon = 1e-9);
            assert_relative_eq!(y1, 5.0, epsilon = 1e-9);
            assert!(!result.trace.is_empty());
        }
    }

    #[test]
    fn test_both_variants_reject_outside_segment() {
        for variant in [ClipVariant::CohenSutherland, ClipVariant::LiangBarsky] {
            let result = clip_line(Point::new(20, 20), Point::new(30, 30), &window(), variant)
                .expect("valid window");
            assert_eq!(
                result.outcome,
                ClipOutcome::Rejected(RejectReason::Outside)
            );
        }
    }

    #[test]
    fn test_fully_inside_is_trivial_accept() {
        let result = clip_line(
            Point::new(1, 1),
            Point::new(7, 6),
            &window(),
            ClipVariant::CohenSutherland,
        )
        .expect("valid window");
        let ((x0, y0), (x1, y1)) = accepted(&result);
        assert_eq!((x0, y0, x1, y1), (1.0, 1.0, 7.0, 6.0));
        assert!(result
            .trace
            .steps()
            .iter()
            .any(|s| s.label.contains("trivial accept")));
    }

    #[test]
    fn test_diagonal_through_window_agreement() {
        let cs = clip_line(
            Point::new(-4, -2),
            Point::new(12, 10),
            &window(),
            ClipVariant::CohenSutherland,
        )
        .expect("valid window");
        let lb = clip_line(
            Point::new(-4, -2),
            Point::new(12, 10),
            &window(),
            ClipVariant::LiangBarsky,
        )
        .expect("valid window");
        let (cs0, cs1) = accepted(&cs);
        let (lb0, lb1) = accepted(&lb);
        assert_relative_eq!(cs0.0, lb0.0, epsilon = 1e-6);
        assert_relative_eq!(cs0.1, lb0.1, epsilon = 1e-6);
        assert_relative_eq!(cs1.0, lb1.0, epsilon = 1e-6);
        assert_relative_eq!(cs1.1, lb1.1, epsilon = 1e-6);
    }

    #[test]
    fn test_liang_barsky_parallel_outside_rejects() {
        // Horizontal segment below the window: parallel to top/bottom,
        // outside the bottom half-plane.
        let result = clip_line(
            Point::new(1, -3),
            Point::new(7, -3),
            &window(),
            ClipVariant::LiangBarsky,
        )
        .expect("valid window");
        assert_eq!(result.outcome, ClipOutcome::Rejected(RejectReason::Outside));
    }

    #[test]
    fn test_degenerate_window_refused() {
        let w = Window::from_corners(Point::new(0, 3), Point::new(8, 3));
        let err = clip_line(Point::new(1, 1), Point::new(5, 5), &w, ClipVariant::LiangBarsky)
            .unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateWindow {
                width: 8,
                height: 0
            }
        );
    }

    #[test]
    fn test_clip_and_rasterize_accepted_segment() {
        let result = clip_and_rasterize(
            Point::new(-2, 5),
            Point::new(10, 5),
            &window(),
            ClipVariant::CohenSutherland,
            LineVariant::Dda,
        )
        .expect("valid window");
        assert!(result.outcome.is_accepted());
        assert_eq!(result.pixels.first(), Some(Point::new(0, 5)));
        assert_eq!(result.pixels.last(), Some(Point::new(8, 5)));
        assert_eq!(result.pixels.len(), 9);
    }

    #[test]
    fn test_clip_and_rasterize_rejected_segment_is_empty() {
        let result = clip_and_rasterize(
            Point::new(20, 20),
            Point::new(30, 30),
            &window(),
            ClipVariant::LiangBarsky,
            LineVariant::BresenhamAllSlopes,
        )
        .expect("valid window");
        assert!(!result.outcome.is_accepted());
        assert!(result.pixels.is_empty());
    }

    #[test]
    fn test_window_border_corners_emitted_once() {
        let border = window_border_pixels(&window()).expect("valid window");
        // 4 edges of 9 pixels share 4 corners: 4*9 - 4 = 32 unique.
        assert_eq!(border.len(), 32);
        assert!(border.contains(Point::new(0, 0)));
        assert!(border.contains(Point::new(8, 8)));
    }
}
