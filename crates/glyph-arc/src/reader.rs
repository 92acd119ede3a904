//! Builds a [Font] from glyph contours decoded by an external font parser.
//!
//! The parser hands over, per glyph, a list of contours, each an ordered list
//! of `{x, y, on_curve}` records. As JSON:
//!
//! ```json
//! {
//!   "name": "Example",
//!   "glyphs": [
//!     { "name": "I", "contours": [[
//!       {"x": 0, "y": 0, "on_curve": true},
//!       {"x": 0, "y": 700, "on_curve": true}
//!     ]] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use glyph_arc_core::Point;
use serde::{Deserialize, Serialize};

use crate::config::SamplingConfig;
use crate::error::FontError;
use crate::font::Font;
use crate::glyph::Glyph;
use crate::trace_glyph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFont {
    pub name: String,
    #[serde(default)]
    pub glyphs: Vec<RawGlyph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGlyph {
    pub name: String,
    #[serde(default)]
    pub contours: Vec<Vec<Point>>,
}

/// Reads selected glyphs of a font into traced [Glyph]s.
#[derive(Debug, Clone, Default)]
pub struct FontReader {
    glyph_names: Option<HashSet<String>>,
    config: SamplingConfig,
}

impl FontReader {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            glyph_names: None,
            config,
        }
    }

    /// Only read glyphs with these names. Without a filter every glyph is read.
    pub fn with_glyph_names<S>(mut self, names: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.glyph_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Font, FontError> {
        let path = path.as_ref();
        log::info!("reading font description {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.read_str(&content)
    }

    pub fn read_str(&self, json: &str) -> Result<Font, FontError> {
        let raw: RawFont = serde_json::from_str(json)?;
        self.read_raw(raw)
    }

    pub fn read_raw(&self, raw: RawFont) -> Result<Font, FontError> {
        let mut glyphs = Vec::new();
        let mut skipped = 0;

        for raw_glyph in raw.glyphs.iter().filter(|g| self.wants(&g.name)) {
            match self.read_glyph(raw_glyph) {
                Ok(glyph) => glyphs.push(glyph),
                Err(e) if self.config.skip_malformed_glyphs => {
                    log::warn!("skipping glyph: {e}");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let font = Font::new(raw.name, glyphs, self.config.glyph_sample_count);
        log::info!(
            "font `{}`: {} glyph(s) traced, {skipped} skipped",
            font.name(),
            font.len()
        );
        Ok(font)
    }

    pub fn read_glyph(&self, raw: &RawGlyph) -> Result<Glyph, FontError> {
        trace_glyph(raw.name.as_str(), raw.contours.iter().cloned(), &self.config)
    }

    fn wants(&self, glyph_name: &str) -> bool {
        self.glyph_names
            .as_ref()
            .is_none_or(|names| names.contains(glyph_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_arc_quadratic::{ContourError, OutlineError};

    const FONT: &str = r#"{
        "name": "Blocks",
        "glyphs": [
            {"name": "I", "contours": [[
                {"x": 0, "y": 0, "on_curve": true},
                {"x": 10, "y": 0, "on_curve": true},
                {"x": 10, "y": 70, "on_curve": true},
                {"x": 0, "y": 70, "on_curve": true}
            ]]},
            {"name": "broken", "contours": [[{"x": 0, "y": 0, "on_curve": true}]]},
            {"name": "O", "contours": [[
                {"x": 0, "y": 0, "on_curve": false},
                {"x": 0, "y": 70, "on_curve": false},
                {"x": 50, "y": 70, "on_curve": false},
                {"x": 50, "y": 0, "on_curve": false}
            ]]}
        ]
    }"#;

    #[test]
    fn reads_selected_glyphs() {
        let font = FontReader::default()
            .with_glyph_names(["O", "I"])
            .read_str(FONT)
            .unwrap();

        assert_eq!(font.name(), "Blocks");
        assert_eq!(font.names().collect::<Vec<_>>(), vec!["I", "O"]);
        assert_eq!(font.glyph("O").unwrap().graphic().segment_count(), 4);
    }

    #[test]
    fn malformed_glyph_aborts_with_its_identity() {
        let err = FontReader::default().read_str(FONT).unwrap_err();
        match err {
            FontError::Glyph { glyph, source } => {
                assert_eq!(glyph, "broken");
                assert!(matches!(
                    source,
                    OutlineError::Contour {
                        index: 0,
                        source: ContourError::MalformedContour { .. }
                    }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_glyph_can_be_skipped() {
        let config = SamplingConfig {
            skip_malformed_glyphs: true,
            ..Default::default()
        };
        let font = FontReader::new(config).read_str(FONT).unwrap();
        assert_eq!(font.names().collect::<Vec<_>>(), vec!["I", "O"]);
    }

    #[test]
    fn glyph_without_contours_is_empty() {
        let raw = RawGlyph {
            name: "space".to_owned(),
            contours: Vec::new(),
        };
        let err = FontReader::default().read_glyph(&raw).unwrap_err();
        assert!(matches!(err, FontError::EmptyGlyph(_)));
    }

    #[test]
    fn bad_json_is_reported() {
        let err = FontReader::default().read_str("{\"glyphs\": 3}").unwrap_err();
        assert!(matches!(err, FontError::Json(_)));
    }
}
