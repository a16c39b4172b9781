//! Error types for rasterix operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterix operations.
///
/// Every variant is recoverable at the call site; a geometric reject from
/// the clipper is *not* an error and is reported through
/// [`ClipOutcome`](crate::clip::ClipOutcome) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Single-octant Bresenham invoked outside its slope/direction domain.
    ///
    /// The deltas are reported after left-to-right endpoint normalization.
    /// Callers wanting full coverage should fall back to
    /// [`LineVariant::BresenhamAllSlopes`](crate::raster::LineVariant) or DDA.
    #[error("unsupported slope for octant-1 Bresenham: dx={dx}, dy={dy} (requires 0 <= dy <= dx, dx > 0)")]
    UnsupportedSlope {
        /// Normalized x delta.
        dx: i32,
        /// Normalized y delta.
        dy: i32,
    },

    /// Clip window with zero width or height.
    #[error("degenerate clip window: {width}x{height}")]
    DegenerateWindow {
        /// Window width.
        width: i32,
        /// Window height.
        height: i32,
    },

    /// Circle requested with a negative radius.
    #[error("negative circle radius: {radius}")]
    NegativeRadius {
        /// Requested radius.
        radius: i32,
    },

    /// Polygon fill requested with fewer than 3 vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    InsufficientVertices {
        /// Number of vertices supplied.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DegenerateWindow {
            width: 0,
            height: 8,
        };
        assert!(err.to_string().contains("degenerate clip window"));
        assert!(err.to_string().contains("0x8"));
    }

    #[test]
    fn test_unsupported_slope_reports_deltas() {
        let err = Error::UnsupportedSlope { dx: 2, dy: 5 };
        assert!(err.to_string().contains("dx=2"));
        assert!(err.to_string().contains("dy=5"));
    }

    #[test]
    fn test_insufficient_vertices() {
        let err = Error::InsufficientVertices { count: 2 };
        assert!(err.to_string().contains("at least 3"));
        assert!(err.to_string().contains('2'));
    }
}
