use glyph_arc_core::{Outline, Point, VectorGraphic};

use crate::contour::Contour;
use crate::error::OutlineError;

/// All contours of one glyph, traced and chained in order.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    contours: Vec<Contour>,
    contour_sample_count: Option<usize>,
}

impl GlyphOutline {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            contour_sample_count: None,
        }
    }

    /// Decompress each raw contour, reporting the index of the first malformed one.
    pub fn from_raw<I, C>(contours: I) -> Result<Self, OutlineError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<Point>>,
    {
        let contours = contours
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Contour::new(raw).map_err(|source| OutlineError::Contour { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(contours))
    }

    /// Resolution stamped on each contour's graphic before contours are chained.
    ///
    /// Without it a contour keeps the sum of its segments' resolutions.
    pub fn with_contour_sample_count(mut self, sample_count: usize) -> Self {
        self.contour_sample_count = Some(sample_count);
        self
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }
}

impl Outline for GlyphOutline {
    type Error = OutlineError;

    fn to_vector_graphic(&self, sample_count: usize) -> Result<VectorGraphic, OutlineError> {
        let mut graphics = Vec::with_capacity(self.contours.len());
        for (index, contour) in self.contours.iter().enumerate() {
            let graphic = contour
                .to_vector_graphic(sample_count)
                .map_err(|source| OutlineError::Contour { index, source })?;
            log::debug!(
                "contour {index}: {} segment(s), length {:.3}",
                graphic.segment_count(),
                graphic.approximate_length()
            );
            graphics.push(match self.contour_sample_count {
                Some(count) => graphic.with_sample_count(count),
                None => graphic,
            });
        }

        VectorGraphic::try_sum(&graphics)
            .map_err(OutlineError::Combine)?
            .ok_or(OutlineError::Empty)
    }
}
