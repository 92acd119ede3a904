use glyph_arc_core::CurveError;
use thiserror::Error;

/// Errors raised while tracing a single contour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    /// The point list is too short or breaks the on/off-curve encoding rules.
    #[error("malformed contour: {reason}")]
    MalformedContour { reason: String },

    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl ContourError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ContourError::MalformedContour {
            reason: reason.into(),
        }
    }
}

/// Errors raised while tracing a multi-contour glyph outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    #[error("contour {index}: {source}")]
    Contour {
        index: usize,
        #[source]
        source: ContourError,
    },

    #[error("outline has no contours")]
    Empty,

    /// Contours traced fine but could not be chained together.
    #[error("cannot combine contours: {0}")]
    Combine(#[source] CurveError),
}
