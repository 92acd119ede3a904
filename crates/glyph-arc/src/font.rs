use indexmap::IndexMap;

use crate::error::FontError;
use crate::glyph::Glyph;

/// Glyphs of one font, looked up by name in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    name: String,
    glyphs: IndexMap<String, Glyph>,
}

impl Font {
    /// Collect `glyphs`, giving each the same sampling resolution.
    ///
    /// A later glyph with an already used name replaces the earlier one.
    pub fn new(
        name: impl Into<String>,
        glyphs: impl IntoIterator<Item = Glyph>,
        sample_count: usize,
    ) -> Self {
        let glyphs = glyphs
            .into_iter()
            .map(|glyph| {
                let glyph = glyph.with_sample_count(sample_count);
                (glyph.name().to_owned(), glyph)
            })
            .collect();
        Self {
            name: name.into(),
            glyphs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, glyph_name: &str) -> Option<&Glyph> {
        self.glyphs.get(glyph_name)
    }

    /// Like [Font::get], but a missing glyph is an error.
    pub fn glyph(&self, glyph_name: &str) -> Result<&Glyph, FontError> {
        self.get(glyph_name)
            .ok_or_else(|| FontError::UnknownGlyph(glyph_name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Font {
    type Item = &'a Glyph;
    type IntoIter = indexmap::map::Values<'a, String, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_arc_core::Line;

    fn glyph(name: &str, x: f64) -> Glyph {
        Glyph::new(name, Line::new((x, 0.0), (x, 1.0)).to_graphic(10))
    }

    #[test]
    fn keeps_insertion_order_and_resamples() {
        let font = Font::new("Test", [glyph("b", 0.0), glyph("a", 1.0)], 32);

        assert_eq!(font.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(font.len(), 2);
        assert!(font.iter().all(|g| g.sample_count() == 32));
        assert_eq!(font.glyph("a").unwrap().sample(false).len(), 32);
    }

    #[test]
    fn unknown_glyph_is_reported_by_name() {
        let font = Font::new("Test", [glyph("a", 0.0)], 8);
        assert!(font.get("z").is_none());
        assert!(matches!(font.glyph("z"), Err(FontError::UnknownGlyph(name)) if name == "z"));
    }
}
