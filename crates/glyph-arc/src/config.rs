//! Sampling resolutions used when tracing and exporting glyphs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FontError;

/// Points per exported glyph sequence.
pub const GLYPH_SAMPLE_COUNT: usize = 128;
/// Samples per segment while reconstructing contours.
pub const SEGMENT_SAMPLE_COUNT: usize = 2;
/// Resolution stamped on each traced contour before contours are chained.
pub const CONTOUR_SAMPLE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub glyph_sample_count: usize,
    pub segment_sample_count: usize,
    pub contour_sample_count: usize,
    /// Skip glyphs with malformed contours instead of failing the whole font.
    pub skip_malformed_glyphs: bool,
    /// End exported sequences exactly on the glyph's end point.
    pub include_last_point: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            glyph_sample_count: GLYPH_SAMPLE_COUNT,
            segment_sample_count: SEGMENT_SAMPLE_COUNT,
            contour_sample_count: CONTOUR_SAMPLE_COUNT,
            skip_malformed_glyphs: false,
            include_last_point: false,
        }
    }
}

impl SamplingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, FontError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. Falls back to defaults when the file is missing or invalid.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("sampling config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("invalid sampling config, using defaults: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no sampling config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
