//! Scan conversion of lines and circles into pixel sequences.
//!
//! One entry point per shape dispatches over a closed set of algorithm
//! variants. Each call is a pure function of its inputs; the `_traced`
//! forms additionally return the algorithm's derivation log.

mod circle;
mod line;

use crate::error::Result;
use crate::geometry::Point;
use crate::pixels::PixelSet;
use crate::trace::Trace;

/// Line rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineVariant {
    /// Digital Differential Analyzer: real-valued stepping, any slope.
    Dda,
    /// Integer Bresenham restricted to shallow, rightward, non-negative
    /// slopes; refuses other input.
    BresenhamOctant1,
    /// Integer Bresenham generalized to all slopes and directions.
    #[default]
    BresenhamAllSlopes,
}

/// Rasterize a line segment with the chosen variant.
///
/// The output is non-empty, ordered, and deduplicated; the first pixel is
/// the (possibly endpoint-normalized) start and the last is the end.
///
/// # Errors
///
/// [`Error::UnsupportedSlope`](crate::Error::UnsupportedSlope) when
/// [`LineVariant::BresenhamOctant1`] is asked for a slope outside its
/// octant.
pub fn rasterize_line(p0: Point, p1: Point, variant: LineVariant) -> Result<PixelSet> {
    let mut trace = Trace::disabled();
    dispatch_line(p0, p1, variant, &mut trace)
}

/// Rasterize a line segment and capture the derivation trace.
///
/// # Errors
///
/// Same as [`rasterize_line`].
pub fn rasterize_line_traced(
    p0: Point,
    p1: Point,
    variant: LineVariant,
) -> Result<(PixelSet, Trace)> {
    let mut trace = Trace::new();
    let pixels = dispatch_line(p0, p1, variant, &mut trace)?;
    Ok((pixels, trace))
}

fn dispatch_line(p0: Point, p1: Point, variant: LineVariant, trace: &mut Trace) -> Result<PixelSet> {
    match variant {
        LineVariant::Dda => Ok(line::dda(p0, p1, trace)),
        LineVariant::BresenhamOctant1 => line::bresenham_octant1(p0, p1, trace),
        LineVariant::BresenhamAllSlopes => Ok(line::bresenham_all_slopes(p0, p1, trace)),
    }
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Radius 0 emits the center pixel only.
///
/// # Errors
///
/// [`Error::NegativeRadius`](crate::Error::NegativeRadius) when
/// `radius < 0`.
pub fn rasterize_circle(center: Point, radius: i32) -> Result<PixelSet> {
    let mut trace = Trace::disabled();
    circle::midpoint_circle(center, radius, &mut trace)
}

/// Rasterize a circle outline and capture the derivation trace.
///
/// # Errors
///
/// Same as [`rasterize_circle`].
pub fn rasterize_circle_traced(center: Point, radius: i32) -> Result<(PixelSet, Trace)> {
    let mut trace = Trace::new();
    let pixels = circle::midpoint_circle(center, radius, &mut trace)?;
    Ok((pixels, trace))
}
