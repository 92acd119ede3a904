use std::ops::Add;

use glam::DVec2;

use crate::error::CurveError;
use crate::shape::{Shape, polyline_length, sample_between};

/// Default number of samples used to approximate lengths and invert arc length.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// A curve addressed by the fraction of its arc length travelled, `s ∈ [0, 1]`.
///
/// A graphic is immutable. Its approximate length is measured once, when it
/// is built, from `sample_count` samples; changing the resolution later with
/// [VectorGraphic::with_sample_count] does not re-measure it.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorGraphic {
    start_point: DVec2,
    end_point: DVec2,
    parametrization: Parametrization,
    approx_length: f64,
    sample_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum Parametrization {
    Shape(Reparametrized),
    Composite(Composite),
}

/// A shape together with the resolution used to invert it by arc length.
#[derive(Debug, Clone, PartialEq)]
struct Reparametrized {
    shape: Shape,
    sample_count: usize,
    shape_length: f64,
}

impl Reparametrized {
    fn new(shape: Shape, sample_count: usize) -> Self {
        Self {
            shape,
            sample_count,
            shape_length: shape.approximate_length(sample_count),
        }
    }

    fn position_at(&self, fraction: f64) -> DVec2 {
        let search = self
            .shape
            .parameter_for_length(fraction * self.shape_length, self.sample_count);
        self.shape.position_at(search.parameter())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Piece {
    curve: Reparametrized,
    length: f64,
}

/// A chain of segments, each owning a share of the domain proportional to its length.
///
/// Chains are kept flat: concatenating two composites appends their pieces
/// instead of nesting them, so evaluation depth does not grow with the number
/// of folds.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pieces: Vec<Piece>,
    // Cumulative length at the end of each piece.
    breakpoints: Vec<f64>,
}

impl Composite {
    /// Chain the given graphics in order.
    pub fn from_graphics<'a>(
        graphics: impl IntoIterator<Item = &'a VectorGraphic>,
    ) -> Result<Self, CurveError> {
        let pieces = graphics.into_iter().flat_map(VectorGraphic::pieces).collect();
        Self::from_pieces(pieces)
    }

    fn from_pieces(pieces: Vec<Piece>) -> Result<Self, CurveError> {
        let mut total = 0.0;
        let breakpoints: Vec<f64> = pieces
            .iter()
            .map(|piece| {
                total += piece.length;
                total
            })
            .collect();

        if !(total > 0.0) {
            return Err(CurveError::DegenerateChain {
                pieces: pieces.len(),
                total,
            });
        }

        Ok(Self {
            pieces,
            breakpoints,
        })
    }

    /// Sum of the lengths of all pieces.
    pub fn total_length(&self) -> f64 {
        self.breakpoints.last().copied().unwrap_or(0.0)
    }

    /// Number of segments in the chain.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn position_at(&self, fraction: f64) -> DVec2 {
        let target = fraction * self.total_length();
        let index = self
            .breakpoints
            .partition_point(|&end| end < target)
            .min(self.pieces.len() - 1);

        let piece = &self.pieces[index];
        let begin = if index == 0 {
            0.0
        } else {
            self.breakpoints[index - 1]
        };
        // zero-length pieces are only ever hit at their start
        let local = if piece.length > 0.0 {
            ((target - begin) / piece.length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        piece.curve.position_at(local)
    }
}

/// Builds a [VectorGraphic] from exactly one of a shape or an arc-fraction chain.
#[derive(Debug, Clone)]
pub struct VectorGraphicBuilder {
    start_point: DVec2,
    end_point: DVec2,
    shape: Option<Shape>,
    arc_fraction: Option<Composite>,
    sample_count: usize,
    approx_length: Option<f64>,
}

impl VectorGraphicBuilder {
    /// Parameterize by shape parameter `t`; the graphic inverts it by arc length.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Parameterize directly by arc fraction.
    pub fn arc_fraction(mut self, composite: Composite) -> Self {
        self.arc_fraction = Some(composite);
        self
    }

    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Use a known length instead of measuring the curve.
    pub fn approximate_length(mut self, length: f64) -> Self {
        self.approx_length = Some(length);
        self
    }

    pub fn build(self) -> Result<VectorGraphic, CurveError> {
        let parametrization = match (self.shape, self.arc_fraction) {
            (Some(shape), None) => {
                Parametrization::Shape(Reparametrized::new(shape, self.sample_count))
            }
            (None, Some(composite)) => {
                if composite.is_empty() {
                    return Err(CurveError::InvalidConstruction("empty arc-fraction chain"));
                }
                Parametrization::Composite(composite)
            }
            (Some(_), Some(_)) => {
                return Err(CurveError::InvalidConstruction(
                    "both a shape and an arc-fraction chain were supplied",
                ));
            }
            (None, None) => {
                return Err(CurveError::InvalidConstruction(
                    "either a shape or an arc-fraction chain is required",
                ));
            }
        };

        let mut graphic = VectorGraphic {
            start_point: self.start_point,
            end_point: self.end_point,
            parametrization,
            approx_length: 0.0,
            sample_count: self.sample_count,
        };
        graphic.approx_length = match self.approx_length {
            Some(length) if length.is_finite() && length >= 0.0 => length,
            Some(_) => {
                return Err(CurveError::InvalidConstruction(
                    "approximate length must be finite and non-negative",
                ));
            }
            None => graphic.approximate_length_with(graphic.sample_count),
        };
        Ok(graphic)
    }
}

impl VectorGraphic {
    pub fn builder(
        start_point: impl Into<DVec2>,
        end_point: impl Into<DVec2>,
    ) -> VectorGraphicBuilder {
        VectorGraphicBuilder {
            start_point: start_point.into(),
            end_point: end_point.into(),
            shape: None,
            arc_fraction: None,
            sample_count: DEFAULT_SAMPLE_COUNT,
            approx_length: None,
        }
    }

    /// A graphic tracing `shape` from its start to its end.
    pub fn from_shape(shape: Shape, sample_count: usize) -> Self {
        let mut graphic = Self {
            start_point: shape.start(),
            end_point: shape.end(),
            parametrization: Parametrization::Shape(Reparametrized::new(shape, sample_count)),
            approx_length: 0.0,
            sample_count,
        };
        graphic.approx_length = graphic.approximate_length_with(sample_count);
        graphic
    }

    /// Chain the given graphics into one, in order.
    ///
    /// Returns `Ok(None)` when `graphics` is empty.
    pub fn try_sum<'a>(
        graphics: impl IntoIterator<Item = &'a VectorGraphic>,
    ) -> Result<Option<Self>, CurveError> {
        let mut graphics = graphics.into_iter();
        let Some(first) = graphics.next() else {
            return Ok(None);
        };
        let mut sum = first.clone();
        for graphic in graphics {
            sum = sum.concat(graphic)?;
        }
        Ok(Some(sum))
    }

    pub fn start_point(&self) -> DVec2 {
        self.start_point
    }

    pub fn end_point(&self) -> DVec2 {
        self.end_point
    }

    /// Default sampling resolution.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The length measured (or summed) when this graphic was built.
    pub fn approximate_length(&self) -> f64 {
        self.approx_length
    }

    /// Measure the length afresh from `sample_count` samples in arc fraction.
    pub fn approximate_length_with(&self, sample_count: usize) -> f64 {
        polyline_length(self.points_with(sample_count.max(2), true))
    }

    /// Number of segments this graphic is made of.
    pub fn segment_count(&self) -> usize {
        match &self.parametrization {
            Parametrization::Shape(_) => 1,
            Parametrization::Composite(composite) => composite.len(),
        }
    }

    /// Position after travelling `fraction` of the arc length.
    pub fn position_at(&self, fraction: f64) -> DVec2 {
        match &self.parametrization {
            Parametrization::Shape(curve) => curve.position_at(fraction),
            Parametrization::Composite(composite) => composite.position_at(fraction),
        }
    }

    /// Copy of this graphic with a different default resolution.
    ///
    /// The stored approximate length is kept as is.
    pub fn with_sample_count(&self, sample_count: usize) -> Self {
        let parametrization = match &self.parametrization {
            Parametrization::Shape(curve) => {
                Parametrization::Shape(Reparametrized::new(curve.shape, sample_count))
            }
            Parametrization::Composite(composite) => {
                Parametrization::Composite(composite.clone())
            }
        };
        Self {
            parametrization,
            sample_count,
            ..self.clone()
        }
    }

    /// `sample_count` points evenly spaced in arc fraction.
    pub fn points(&self, include_last_point: bool) -> impl Iterator<Item = DVec2> + '_ {
        self.points_with(self.sample_count, include_last_point)
    }

    /// `count` points evenly spaced in arc fraction.
    ///
    /// With `include_last_point` the final point lands on fraction `1.0`.
    pub fn points_with(
        &self,
        count: usize,
        include_last_point: bool,
    ) -> impl Iterator<Item = DVec2> + '_ {
        sample_between(
            move |fraction| self.position_at(fraction),
            1.0,
            count,
            include_last_point,
        )
    }

    /// Collect [VectorGraphic::points_with] into a vector.
    pub fn sample(&self, count: usize, include_last_point: bool) -> Vec<DVec2> {
        self.points_with(count, include_last_point).collect()
    }

    /// Append `other` after this graphic.
    ///
    /// The combined domain is split at `La / (La + Lb)`; lengths and sample
    /// counts add up.
    pub fn concat(&self, other: &VectorGraphic) -> Result<Self, CurveError> {
        let total = self.approx_length + other.approx_length;
        if !(total > 0.0) {
            return Err(CurveError::DegenerateCombination {
                left: self.approx_length,
                right: other.approx_length,
            });
        }

        let mut pieces = self.pieces();
        pieces.extend(other.pieces());

        Ok(Self {
            start_point: self.start_point,
            end_point: other.end_point,
            parametrization: Parametrization::Composite(Composite::from_pieces(pieces)?),
            approx_length: total,
            sample_count: self.sample_count + other.sample_count,
        })
    }

    /// This graphic's pieces, weighted so that they sum to its stored length.
    fn pieces(&self) -> Vec<Piece> {
        match &self.parametrization {
            Parametrization::Shape(curve) => vec![Piece {
                curve: curve.clone(),
                length: self.approx_length,
            }],
            Parametrization::Composite(composite) => {
                let total = composite.total_length();
                let scale = if total > 0.0 {
                    self.approx_length / total
                } else {
                    0.0
                };
                composite
                    .pieces
                    .iter()
                    .map(|piece| Piece {
                        curve: piece.curve.clone(),
                        length: piece.length * scale,
                    })
                    .collect()
            }
        }
    }
}

impl Add<&VectorGraphic> for &VectorGraphic {
    type Output = Result<VectorGraphic, CurveError>;

    fn add(self, other: &VectorGraphic) -> Self::Output {
        self.concat(other)
    }
}
