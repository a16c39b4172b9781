//! Midpoint circle scan conversion with 8-way symmetry.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::pixels::PixelSet;
use crate::trace::{Trace, TraceStep};

/// Midpoint circle algorithm.
///
/// Walks the second octant from (0, r) toward the diagonal, choosing east
/// or south-east moves from an integer decision parameter, and mirrors
/// every computed point into all eight octants. Points on the symmetry
/// axes and the diagonal collapse, so the deduplicating [`PixelSet`] is
/// part of the contract, not an optimization.
pub(crate) fn midpoint_circle(center: Point, radius: i32, trace: &mut Trace) -> Result<PixelSet> {
    if radius < 0 {
        return Err(Error::NegativeRadius { radius });
    }

    let mut pixels = PixelSet::new();

    if radius == 0 {
        trace.push(TraceStep::new("zero radius, emit center only"));
        pixels.push(center);
        return Ok(pixels);
    }

    let mut x = 0;
    let mut y = radius;
    let mut p = 1 - radius;
    trace.push(
        TraceStep::new("start at (0, r), p0 = 1 - r")
            .value("r", radius)
            .value("p0", p),
    );

    emit_octants(&mut pixels, center, x, y);

    while x < y {
        x += 1;
        if p < 0 {
            // East move: midpoint inside the circle.
            p += 2 * x + 1;
            trace.push(
                TraceStep::new("p < 0: move east")
                    .value("x", x)
                    .value("y", y)
                    .value("p", p),
            );
        } else {
            // South-east move: midpoint outside, drop a row.
            y -= 1;
            p += 2 * x + 1 - 2 * y;
            trace.push(
                TraceStep::new("p >= 0: move south-east")
                    .value("x", x)
                    .value("y", y)
                    .value("p", p),
            );
        }

        emit_octants(&mut pixels, center, x, y);
    }

    trace.push(TraceStep::new("unique pixels after 8-way symmetry").value("count", pixels.len() as i32));

    Ok(pixels)
}

/// Mirror one second-octant sample into all eight octants around the
/// center. Emission order is fixed so the output is deterministic.
fn emit_octants(pixels: &mut PixelSet, center: Point, x: i32, y: i32) {
    let (cx, cy) = (center.x, center.y);
    let reflections = [
        (cx + x, cy + y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx - x, cy + y),
        (cx - x, cy - y),
        (cx - y, cy - x),
        (cx + y, cy - x),
        (cx + x, cy - y),
    ];
    for (px, py) in reflections {
        pixels.push(Point::new(px, py));
    }
}
