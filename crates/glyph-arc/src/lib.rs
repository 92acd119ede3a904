//! `glyph-arc` is a library for turning font glyph outlines into point
//! sequences spaced uniformly by arc length.
//!
//! This can be used to feed glyph shapes into anything that wants a fixed
//! number of points per glyph: plotters, shape-matching models, morphing
//! animations, and so on.
//!
//! Decoding the binary font file is left to a font parser. This crate takes
//! over from the point where each glyph is a list of contours, and each
//! contour a list of on-curve/off-curve points:
//! - contours are traced into lines and quadratic curves via [glyph_arc_quadratic]
//! - curves are reparameterized by arc length and chained via [glyph_arc_core]
//! - glyphs are collected into a [Font] and exported with [export]
//!
//! This library provides the [trace_glyph] function for a single glyph, e.g.:
//!
//! ```
//! use glyph_arc::{Point, SamplingConfig, trace_glyph};
//!
//! let triangle = vec![vec![
//!     Point::on(0.0, 0.0),
//!     Point::on(100.0, 0.0),
//!     Point::on(50.0, 80.0),
//! ]];
//! let glyph = trace_glyph("A", triangle, &SamplingConfig::default()).unwrap();
//!
//! assert_eq!(glyph.sample(false).len(), 128);
//! ```

mod config;
mod error;
pub mod export;
mod font;
mod glyph;
mod reader;

pub use config::SamplingConfig;
pub use error::FontError;
pub use font::Font;
pub use glyph::Glyph;
pub use reader::{FontReader, RawFont, RawGlyph};

pub use glyph_arc_core::{CurveError, DVec2, Line, Outline, Point, QuadraticCurve, VectorGraphic};
pub use glyph_arc_quadratic::{Contour, ContourError, GlyphOutline, OutlineError};

/// Trace one glyph from its raw contours using the given sampling settings.
///
/// The glyph's default resolution is `config.glyph_sample_count`.
pub fn trace_glyph<C>(
    name: impl Into<String>,
    contours: impl IntoIterator<Item = C>,
    config: &SamplingConfig,
) -> Result<Glyph, FontError>
where
    C: Into<Vec<Point>>,
{
    let name = name.into();
    let outline = GlyphOutline::from_raw(contours)
        .map_err(|source| FontError::glyph(&name, source))?
        .with_contour_sample_count(config.contour_sample_count);

    if outline.contours().is_empty() {
        return Err(FontError::EmptyGlyph(name));
    }

    let graphic = outline
        .to_vector_graphic(config.segment_sample_count)
        .map_err(|source| FontError::glyph(&name, source))?;

    log::debug!(
        "traced glyph `{name}`: {} contour(s), {} segment(s)",
        outline.contours().len(),
        graphic.segment_count()
    );
    Ok(Glyph::new(name, graphic.with_sample_count(config.glyph_sample_count)))
}
