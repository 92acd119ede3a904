use glyph_arc_core::{Outline, Point, VectorGraphic};

use crate::error::ContourError;
use crate::segments::segments;

/// One closed outline loop, kept both as received and in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    raw: Vec<Point>,
    points: Vec<Point>,
}

impl Contour {
    /// Decompress `raw` into canonical form. See [decompress].
    pub fn new(raw: impl Into<Vec<Point>>) -> Result<Self, ContourError> {
        let raw = raw.into();
        let points = decompress(&raw)?;
        Ok(Self { raw, points })
    }

    /// Points exactly as received.
    pub fn raw_points(&self) -> &[Point] {
        &self.raw
    }

    /// The canonical point sequence: closed, with no two consecutive off-curve points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines and quadratic curves making up this contour, in order.
    pub fn segments(&self, sample_count: usize) -> Result<Vec<VectorGraphic>, ContourError> {
        segments(&self.points, sample_count)
    }
}

impl Outline for Contour {
    type Error = ContourError;

    fn to_vector_graphic(&self, sample_count: usize) -> Result<VectorGraphic, ContourError> {
        let segments = self.segments(sample_count)?;
        VectorGraphic::try_sum(&segments)?
            .ok_or_else(|| ContourError::malformed("contour produced no segments"))
    }
}

/// Bring a raw contour into canonical form.
///
/// The loop is first closed through its endpoints: a leading off-curve point
/// is preceded by the last point (when on-curve) or by the midpoint of the
/// first and last points (when both are off-curve), and the first point is
/// repeated at the end if the two ends still differ. Then an on-curve midpoint
/// is inserted between every two consecutive off-curve points.
///
/// A sequence that is already canonical comes back unchanged.
pub fn decompress(raw: &[Point]) -> Result<Vec<Point>, ContourError> {
    if raw.len() < 2 {
        return Err(ContourError::malformed(format!(
            "contour has {} point(s), at least 2 are required",
            raw.len()
        )));
    }

    let closed = close_loop(raw);
    let points = insert_implied_on_curve_points(&closed);

    if !is_canonical(&points) {
        return Err(ContourError::malformed(
            "contour did not reach canonical form",
        ));
    }
    Ok(points)
}

/// Is `points` closed, starting on the curve, with no two consecutive off-curve points?
pub fn is_canonical(points: &[Point]) -> bool {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return false;
    };
    first == last
        && first.is_on_curve()
        && !points
            .windows(2)
            .any(|w| w[0].is_off_curve() && w[1].is_off_curve())
}

fn close_loop(raw: &[Point]) -> Vec<Point> {
    let (first, last) = (raw[0], raw[raw.len() - 1]);
    let mut points = Vec::with_capacity(raw.len() + 2);

    match (first.is_on_curve(), last.is_on_curve()) {
        (false, true) => {
            points.push(last);
            points.extend_from_slice(raw);
        }
        (false, false) => {
            let mid = first.midpoint(&last);
            points.push(mid);
            points.extend_from_slice(raw);
            points.push(mid);
        }
        // on-curve start: a trailing off-curve point is closed below
        _ => points.extend_from_slice(raw),
    }

    if points.first() != points.last() {
        points.push(points[0]);
    }
    points
}

fn insert_implied_on_curve_points(points: &[Point]) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len() * 3 / 2);
    for &point in points {
        if let Some(prev) = result.last() {
            if prev.is_off_curve() && point.is_off_curve() {
                result.push(prev.midpoint(&point));
            }
        }
        result.push(point);
    }
    result
}
