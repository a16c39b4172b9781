//! # Rasterix
//!
//! Canonical 2D raster-graphics algorithms: scan conversion of line
//! segments and circles, line clipping against a rectangular window, and
//! scanline polygon fill.
//!
//! Every operation is a pure function from integer geometry to an ordered,
//! deduplicated pixel sequence (or horizontal spans for fill). Each
//! algorithm can additionally narrate its intermediate decisions as a
//! structured [`Trace`](trace::Trace), so a presentation layer can replay
//! the derivation step by step. The crate performs no I/O and keeps no
//! state between calls; rendering, input, and pacing belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterix::prelude::*;
//!
//! // Scan-convert a segment with the general Bresenham variant.
//! let pixels = rasterize_line(
//!     Point::new(0, 0),
//!     Point::new(5, 2),
//!     LineVariant::BresenhamAllSlopes,
//! )?;
//! assert_eq!(pixels.len(), 6);
//!
//! // Clip before rasterizing when a window applies.
//! let window = Window::from_corners(Point::new(0, 0), Point::new(8, 8));
//! let clipped = clip_line(
//!     Point::new(-2, 5),
//!     Point::new(10, 5),
//!     &window,
//!     ClipVariant::LiangBarsky,
//! )?;
//! assert!(clipped.outcome.is_accepted());
//! # Ok::<(), rasterix::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization for the public data model (points, windows,
//!   spans, trace records)
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal.
//! - Cohen & Sutherland (1967). Outcode line clipping, via Newman &
//!   Sproull, *Principles of Interactive Computer Graphics*.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for
//!   Line Clipping." ACM TOG.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, windows, polygons, spans).
pub mod geometry;

/// Ordered, deduplicated pixel sequences.
pub mod pixels;

/// Structured derivation traces.
pub mod trace;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Line and circle scan conversion.
pub mod raster;

/// Line clipping against a rectangular window.
pub mod clip;

/// Scanline polygon fill.
pub mod fill;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterix operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use rasterix::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{
        clip_and_rasterize, clip_line, window_border_pixels, ClipOutcome, ClipResult, ClipVariant,
        ClippedRaster, RejectReason,
    };
    pub use crate::error::{Error, Result};
    pub use crate::fill::{fill_polygon, fill_polygon_traced};
    pub use crate::geometry::{Point, Polygon, Span, Window};
    pub use crate::pixels::PixelSet;
    pub use crate::raster::{
        rasterize_circle, rasterize_circle_traced, rasterize_line, rasterize_line_traced,
        LineVariant,
    };
    pub use crate::trace::{Trace, TraceStep};
}
