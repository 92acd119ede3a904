//! `glyph-arc-core` provides the curve primitives for the `glyph-arc` crate.
//!
//! The central type is [VectorGraphic], a curve addressed by the fraction of
//! its arc length rather than by its native shape parameter. Segments are
//! built from [Line] and [QuadraticCurve] and chained with
//! [VectorGraphic::concat] (or `&a + &b`), which splits the combined domain
//! in proportion to each operand's approximate length.
//!
//! ```
//! use glyph_arc_core::{Line, QuadraticCurve};
//!
//! let line = Line::new((0.0, 0.0), (1.0, 0.0)).to_graphic(10);
//! let curve = QuadraticCurve::new((1.0, 0.0), (1.5, 0.5), (1.0, 1.0)).to_graphic(10);
//! let outline = (&line + &curve).unwrap();
//!
//! let points = outline.sample(16, true);
//! assert_eq!(points.len(), 16);
//! ```

mod error;
mod graphic;
mod point;
mod primitives;
mod shape;

pub use error::CurveError;
pub use graphic::{Composite, DEFAULT_SAMPLE_COUNT, VectorGraphic, VectorGraphicBuilder};
pub use point::Point;
pub use primitives::{Line, QuadraticCurve};
pub use shape::{ArcSearch, MAX_SEARCH_DEPTH, Shape, TOLERANCE_DECIMALS};

/// Re-exported so callers can name positions without depending on `glam`.
pub use glam::DVec2;

/// Something that can be traced into a single [VectorGraphic].
///
/// Implementors decide how their own representation (a contour, a whole
/// glyph) decomposes into segments; `sample_count` is the per-segment
/// resolution used for arc-length inversion and length estimation.
pub trait Outline {
    /// Error produced when the representation cannot be traced.
    type Error;

    /// Trace this outline into one arc-length parameterized curve.
    fn to_vector_graphic(&self, sample_count: usize) -> Result<VectorGraphic, Self::Error>;
}
