//! Errors raised while reading and assembling fonts.

use glyph_arc_core::CurveError;
use glyph_arc_quadratic::OutlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    /// A glyph's outline could not be traced.
    #[error("glyph `{glyph}`: {source}")]
    Glyph {
        glyph: String,
        #[source]
        source: OutlineError,
    },

    #[error("glyph `{0}` has no contours")]
    EmptyGlyph(String),

    #[error("no glyph named `{0}`")]
    UnknownGlyph(String),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("invalid font description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid sampling config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FontError {
    pub(crate) fn glyph(name: &str, source: OutlineError) -> Self {
        FontError::Glyph {
            glyph: name.to_owned(),
            source,
        }
    }
}
