//! `glyph-arc-quadratic` is a backend for the `glyph-arc` crate that traces
//! TrueType-style quadratic contours.
//!
//! A contour arrives as a cyclic list of on-curve and off-curve [Point]s.
//! [Contour::new] brings it into canonical form (closed, with an implied
//! on-curve point between every pair of consecutive off-curve points), and
//! [segments] walks that form, emitting one line or quadratic Bézier per
//! step. Segments of a contour, and contours of a glyph, are chained in order.
//!
//! ```
//! use glyph_arc_core::{Outline, Point};
//! use glyph_arc_quadratic::Contour;
//!
//! let contour = Contour::new(vec![
//!     Point::on(0.0, 0.0),
//!     Point::off(0.0, 10.0),
//!     Point::on(10.0, 10.0),
//! ])
//! .unwrap();
//!
//! let graphic = contour.to_vector_graphic(10).unwrap();
//! assert_eq!(graphic.segment_count(), 2);
//! ```

mod contour;
mod error;
mod outline;
mod segments;

pub use contour::{Contour, decompress, is_canonical};
pub use error::{ContourError, OutlineError};
pub use outline::GlyphOutline;
pub use segments::segments;

pub use glyph_arc_core::Point;
