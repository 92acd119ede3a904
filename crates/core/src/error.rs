use thiserror::Error;

/// Errors raised while building or combining curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs exactly one of a shape function or an arc-fraction function.
    #[error("invalid curve construction: {0}")]
    InvalidConstruction(&'static str),

    /// Both operands of a concatenation have zero approximate length, so the
    /// combined domain cannot be split between them.
    #[error("cannot combine curves of length {left} and {right}: combined length is zero")]
    DegenerateCombination { left: f64, right: f64 },

    /// The pieces of an arc-fraction chain add up to no length at all.
    #[error("cannot chain {pieces} curve(s) with total length {total}")]
    DegenerateChain { pieces: usize, total: f64 },
}
