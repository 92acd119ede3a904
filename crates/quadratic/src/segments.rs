use glyph_arc_core::{Line, Point, QuadraticCurve, VectorGraphic};

use crate::error::ContourError;

/// Points read but not yet consumed by a segment.
#[derive(Debug, Clone, Copy)]
struct Pending {
    last: Point,
    before: Option<Point>,
}

/// Walk a canonical point sequence and emit its segments in order.
///
/// Two consecutive on-curve points make a line. An off-curve point between
/// two on-curve points makes a quadratic curve using it as control point.
/// Any other arrangement means the sequence was not canonical.
pub fn segments(
    points: &[Point],
    sample_count: usize,
) -> Result<Vec<VectorGraphic>, ContourError> {
    let mut result = Vec::with_capacity(points.len());
    let mut points = points.iter().copied().enumerate();
    let mut pending: Option<Pending> = None;

    while let Some((index, incoming)) = points.next() {
        let Some(Pending { last, before }) = pending else {
            pending = Some(Pending {
                last: incoming,
                before: None,
            });
            continue;
        };

        pending = Some(match (last.is_on_curve(), incoming.is_on_curve()) {
            (true, true) => {
                result.push(
                    Line::new(last.position(), incoming.position()).to_graphic(sample_count),
                );
                Pending {
                    last: incoming,
                    before: Some(last),
                }
            }
            (false, true) => {
                let start = before.filter(Point::is_on_curve).ok_or_else(|| {
                    ContourError::malformed(format!(
                        "off-curve point before index {index} is not preceded by an on-curve point"
                    ))
                })?;
                result.push(
                    QuadraticCurve::new(start.position(), last.position(), incoming.position())
                        .to_graphic(sample_count),
                );
                Pending {
                    last: incoming,
                    before: Some(last),
                }
            }
            (true, false) => {
                let end = match points.next() {
                    Some((_, end)) if end.is_on_curve() => end,
                    Some((next, _)) => {
                        return Err(ContourError::malformed(format!(
                            "consecutive off-curve points at indices {index} and {next}"
                        )));
                    }
                    None => {
                        return Err(ContourError::malformed(format!(
                            "contour ends on off-curve point {index}"
                        )));
                    }
                };
                result.push(
                    QuadraticCurve::new(last.position(), incoming.position(), end.position())
                        .to_graphic(sample_count),
                );
                Pending {
                    last: end,
                    before: Some(incoming),
                }
            }
            (false, false) => {
                return Err(ContourError::malformed(format!(
                    "consecutive off-curve points ending at index {index}"
                )));
            }
        });
    }

    log::trace!("reconstructed {} segment(s)", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress;
    use approx::assert_abs_diff_eq;
    use glyph_arc_core::DVec2;

    #[test]
    fn lines_between_on_curve_points() {
        let square = [
            Point::on(0.0, 0.0),
            Point::on(1.0, 0.0),
            Point::on(1.0, 1.0),
            Point::on(0.0, 1.0),
            Point::on(0.0, 0.0),
        ];
        let segments = segments(&square, 10).expect("canonical");

        assert_eq!(segments.len(), 4);
        for (segment, pair) in segments.iter().zip(square.windows(2)) {
            assert_eq!(segment.start_point(), pair[0].position());
            assert_eq!(segment.end_point(), pair[1].position());
            assert_abs_diff_eq!(segment.approximate_length(), 1.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn off_curve_point_becomes_control_point() {
        let points = decompress(&[
            Point::on(0.0, 0.0),
            Point::off(0.0, 10.0),
            Point::off(10.0, 10.0),
            Point::on(10.0, 0.0),
        ])
        .expect("valid contour");
        let segments = segments(&points, 10).expect("canonical");

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].start_point(), DVec2::new(0.0, 0.0));
        assert_eq!(segments[0].end_point(), DVec2::new(5.0, 10.0));
        assert_eq!(segments[1].start_point(), DVec2::new(5.0, 10.0));
        assert_eq!(segments[1].end_point(), DVec2::new(10.0, 0.0));
        assert_eq!(segments[2].end_point(), DVec2::new(0.0, 0.0));
    }

    #[test]
    fn leading_off_curve_point_is_rejected() {
        let err = segments(&[Point::off(0.0, 0.0), Point::on(1.0, 0.0)], 10).unwrap_err();
        assert!(matches!(err, ContourError::MalformedContour { .. }));
    }

    #[test]
    fn surviving_off_off_pair_is_rejected() {
        let points = [
            Point::on(0.0, 0.0),
            Point::off(1.0, 1.0),
            Point::off(2.0, 1.0),
            Point::on(3.0, 0.0),
        ];
        let err = segments(&points, 10).unwrap_err();
        assert!(matches!(err, ContourError::MalformedContour { .. }));
    }

    #[test]
    fn dangling_off_curve_point_is_rejected() {
        let err = segments(&[Point::on(0.0, 0.0), Point::off(1.0, 1.0)], 10).unwrap_err();
        assert!(matches!(err, ContourError::MalformedContour { .. }));
    }
}
