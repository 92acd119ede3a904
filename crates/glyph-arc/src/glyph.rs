use glyph_arc_core::{DVec2, VectorGraphic};

use crate::error::FontError;

/// A named glyph traced into a single curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    name: String,
    graphic: VectorGraphic,
}

impl Glyph {
    pub fn new(name: impl Into<String>, graphic: VectorGraphic) -> Self {
        Self {
            name: name.into(),
            graphic,
        }
    }

    /// Chain `segments` in order into one glyph.
    pub fn from_segments<'a>(
        name: impl Into<String>,
        segments: impl IntoIterator<Item = &'a VectorGraphic>,
    ) -> Result<Self, FontError> {
        let name = name.into();
        match VectorGraphic::try_sum(segments)? {
            Some(graphic) => Ok(Self::new(name, graphic)),
            None => Err(FontError::EmptyGlyph(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graphic(&self) -> &VectorGraphic {
        &self.graphic
    }

    /// Number of points [Glyph::sample] produces.
    pub fn sample_count(&self) -> usize {
        self.graphic.sample_count()
    }

    pub fn with_sample_count(&self, sample_count: usize) -> Self {
        Self {
            name: self.name.clone(),
            graphic: self.graphic.with_sample_count(sample_count),
        }
    }

    pub fn approximate_length(&self) -> f64 {
        self.graphic.approximate_length()
    }

    pub fn position_at(&self, fraction: f64) -> DVec2 {
        self.graphic.position_at(fraction)
    }

    pub fn points(&self, include_last_point: bool) -> impl Iterator<Item = DVec2> + '_ {
        self.graphic.points(include_last_point)
    }

    pub fn sample(&self, include_last_point: bool) -> Vec<DVec2> {
        self.points(include_last_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_arc_core::Line;

    #[test]
    fn segments_fold_into_one_glyph() {
        let segments = [
            Line::new((0.0, 0.0), (1.0, 0.0)).to_graphic(10),
            Line::new((1.0, 0.0), (1.0, 1.0)).to_graphic(10),
        ];
        let glyph = Glyph::from_segments("L", &segments).unwrap();

        assert_eq!(glyph.name(), "L");
        assert_eq!(glyph.graphic().segment_count(), 2);
        assert_eq!(glyph.sample_count(), 20);
        assert_eq!(glyph.with_sample_count(7).sample(true).len(), 7);
    }

    #[test]
    fn no_segments_is_an_empty_glyph() {
        let err = Glyph::from_segments("space", []).unwrap_err();
        assert!(matches!(err, FontError::EmptyGlyph(name) if name == "space"));
    }
}
