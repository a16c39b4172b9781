//! Line scan conversion: DDA and Bresenham variants.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::pixels::PixelSet;
use crate::trace::{Trace, TraceStep};

/// Digital Differential Analyzer.
///
/// Steps `max(|dx|, |dy|)` times with real-valued increments, rounding to
/// the nearest pixel before each emission. The rounding error accumulates
/// over long segments; that is the classical algorithm's behavior and is
/// kept as-is.
pub(crate) fn dda(p0: Point, p1: Point, trace: &mut Trace) -> PixelSet {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let steps = dx.abs().max(dy.abs());

    trace.push(
        TraceStep::new("deltas")
            .value("dx", dx)
            .value("dy", dy)
            .value("steps", steps),
    );

    let mut pixels = PixelSet::with_capacity(steps as usize + 1);

    if steps == 0 {
        trace.push(TraceStep::new("zero-length segment, emit start only"));
        pixels.push(p0);
        return pixels;
    }

    let x_inc = f64::from(dx) / f64::from(steps);
    let y_inc = f64::from(dy) / f64::from(steps);
    trace.push(
        TraceStep::new("increments")
            .value("x_inc", x_inc)
            .value("y_inc", y_inc),
    );

    let mut x = f64::from(p0.x);
    let mut y = f64::from(p0.y);
    for _ in 0..=steps {
        pixels.push(Point::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    pixels
}

/// Bresenham restricted to the first octant: left-to-right, shallow,
/// non-negative slope.
///
/// Endpoints are normalized so x increases; outside the octant the
/// algorithm refuses rather than guessing, and the caller picks another
/// variant.
pub(crate) fn bresenham_octant1(p0: Point, p1: Point, trace: &mut Trace) -> Result<PixelSet> {
    let (a, b) = if p0.x > p1.x {
        trace.push(TraceStep::new("endpoints swapped (left-to-right)"));
        (p1, p0)
    } else {
        (p0, p1)
    };

    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if dx <= 0 || dy < 0 || dy > dx {
        return Err(Error::UnsupportedSlope { dx, dy });
    }

    let mut p = 2 * dy - dx;
    trace.push(
        TraceStep::new("initial decision p0 = 2*dy - dx")
            .value("dx", dx)
            .value("dy", dy)
            .value("p0", p),
    );

    let mut pixels = PixelSet::with_capacity(dx as usize + 1);
    let mut y = a.y;

    for x in a.x..=b.x {
        pixels.push(Point::new(x, y));
        if p > 0 {
            y += 1;
            p -= 2 * dx;
            trace.push(
                TraceStep::new("p > 0: raise y, p -= 2*dx")
                    .value("x", x)
                    .value("y", y),
            );
        }
        p += 2 * dy;
        trace.push(TraceStep::new("p += 2*dy").value("p", p));
    }

    Ok(pixels)
}

/// General-purpose integer Bresenham for any slope and direction.
///
/// Classifies the segment as low (`|dy| < |dx|`, stepped in x) or high
/// (stepped in y), normalizes so the driving axis increases, and carries a
/// direction sign for the other axis. Emits exactly
/// `max(|dx|, |dy|) + 1` pixels.
pub(crate) fn bresenham_all_slopes(p0: Point, p1: Point, trace: &mut Trace) -> PixelSet {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let mut pixels = PixelSet::with_capacity(dx.abs().max(dy.abs()) as usize + 1);

    if dy.abs() < dx.abs() {
        trace.push(
            TraceStep::new("low slope: |dy| < |dx|, step in x")
                .value("dx", dx)
                .value("dy", dy),
        );
        if p0.x > p1.x {
            trace.push(TraceStep::new("endpoints swapped (x must increase)"));
            low_octants(p1, p0, &mut pixels, trace);
        } else {
            low_octants(p0, p1, &mut pixels, trace);
        }
    } else {
        trace.push(
            TraceStep::new("high slope: |dy| >= |dx|, step in y")
                .value("dx", dx)
                .value("dy", dy),
        );
        if p0.y > p1.y {
            trace.push(TraceStep::new("endpoints swapped (y must increase)"));
            high_octants(p1, p0, &mut pixels, trace);
        } else {
            high_octants(p0, p1, &mut pixels, trace);
        }
    }

    pixels
}

/// Shallow-slope branch: unit steps in x, signed steps in y.
fn low_octants(p0: Point, p1: Point, pixels: &mut PixelSet, trace: &mut Trace) {
    let dx = p1.x - p0.x;
    let mut dy = p1.y - p0.y;
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut d = 2 * dy - dx;
    trace.push(
        TraceStep::new("initial decision D0 = 2*|dy| - dx")
            .value("yi", yi)
            .value("d0", d),
    );

    let mut y = p0.y;
    for x in p0.x..=p1.x {
        pixels.push(Point::new(x, y));
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
            trace.push(
                TraceStep::new("D > 0: step y by yi")
                    .value("x", x)
                    .value("y", y)
                    .value("d", d),
            );
        } else {
            d += 2 * dy;
            trace.push(TraceStep::new("D <= 0: D += 2*|dy|").value("d", d));
        }
    }
}

/// Steep-slope branch: unit steps in y, signed steps in x.
fn high_octants(p0: Point, p1: Point, pixels: &mut PixelSet, trace: &mut Trace) {
    let mut dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut d = 2 * dx - dy;
    trace.push(
        TraceStep::new("initial decision D0 = 2*|dx| - dy")
            .value("xi", xi)
            .value("d0", d),
    );

    let mut x = p0.x;
    for y in p0.y..=p1.y {
        pixels.push(Point::new(x, y));
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
            trace.push(
                TraceStep::new("D > 0: step x by xi")
                    .value("x", x)
                    .value("y", y)
                    .value("d", d),
            );
        } else {
            d += 2 * dx;
            trace.push(TraceStep::new("D <= 0: D += 2*|dx|").value("d", d));
        }
    }
}
