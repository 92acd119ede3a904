use glam::DVec2;

use crate::graphic::VectorGraphic;
use crate::shape::Shape;

/// A straight segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub start: DVec2,
    pub end: DVec2,
}

impl Line {
    pub fn new(start: impl Into<DVec2>, end: impl Into<DVec2>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::Line {
            start: self.start,
            end: self.end,
        }
    }

    /// Wrap this segment into an arc-length parameterized graphic.
    pub fn to_graphic(&self, sample_count: usize) -> VectorGraphic {
        VectorGraphic::from_shape(self.shape(), sample_count)
    }
}

/// A quadratic Bézier segment from `start` to `end`, pulled towards `control`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticCurve {
    pub start: DVec2,
    pub control: DVec2,
    pub end: DVec2,
}

impl QuadraticCurve {
    pub fn new(
        start: impl Into<DVec2>,
        control: impl Into<DVec2>,
        end: impl Into<DVec2>,
    ) -> Self {
        Self {
            start: start.into(),
            control: control.into(),
            end: end.into(),
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::Quadratic {
            start: self.start,
            control: self.control,
            end: self.end,
        }
    }

    /// Wrap this segment into an arc-length parameterized graphic.
    pub fn to_graphic(&self, sample_count: usize) -> VectorGraphic {
        VectorGraphic::from_shape(self.shape(), sample_count)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        line.shape()
    }
}

impl From<QuadraticCurve> for Shape {
    fn from(curve: QuadraticCurve) -> Self {
        curve.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic_samples_are_evenly_spaced_by_arc_length() {
        let curve = QuadraticCurve::new((0.0, 0.0), (0.0, 10.0), (10.0, 10.0)).to_graphic(32);
        let points = curve.sample(9, true);

        let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        for gap in gaps {
            assert_abs_diff_eq!(gap, mean, epsilon = 0.05 * mean);
        }
    }

    #[test]
    fn shape_parameter_is_not_arc_length() {
        // the control point bunches t-samples towards the far end
        let curve = QuadraticCurve::new((0.0, 0.0), (9.0, 0.0), (10.0, 0.0));
        let by_t = curve.shape().position_at(0.5);
        let by_fraction = curve.to_graphic(64).position_at(0.5);

        assert_abs_diff_eq!(by_t.x, 7.0, epsilon = 1e-9);
        assert_abs_diff_eq!(by_fraction.x, 5.0, epsilon = 0.05);
    }
}
