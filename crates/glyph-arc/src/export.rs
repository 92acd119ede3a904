//! Export of sampled glyphs as coordinate arrays.

use glyph_arc_core::DVec2;

use crate::config::SamplingConfig;
use crate::font::Font;
use crate::glyph::Glyph;

/// One point sequence per glyph, in font order.
///
/// Each sequence has the font's sampling resolution. With `scaled`, every
/// glyph is normalized independently by [normalize_glyph].
pub fn font_to_array(font: &Font, scaled: bool, include_last_point: bool) -> Vec<Vec<DVec2>> {
    font.iter()
        .map(|glyph| glyph_to_array(glyph, scaled, include_last_point))
        .collect()
}

/// Like [font_to_array], ending each sequence on the glyph's end point when
/// `config.include_last_point` is set.
pub fn font_to_array_with(font: &Font, scaled: bool, config: &SamplingConfig) -> Vec<Vec<DVec2>> {
    font_to_array(font, scaled, config.include_last_point)
}

pub fn glyph_to_array(glyph: &Glyph, scaled: bool, include_last_point: bool) -> Vec<DVec2> {
    let points = glyph.sample(include_last_point);
    if scaled {
        normalize_glyph(&points)
    } else {
        points
    }
}

/// Center `points` on their bounding box and scale them into `[-1, 1]`.
///
/// Both axes share the larger half-extent, so the aspect ratio is kept.
/// Points with no extent at all are only centered.
pub fn normalize_glyph(points: &[DVec2]) -> Vec<DVec2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));

    let center = (min + max) / 2.0;
    let scale = ((max - center).abs()).max_element();

    points
        .iter()
        .map(|&p| {
            let centered = p - center;
            if scale > 0.0 { centered / scale } else { centered }
        })
        .collect()
}

/// Flatten exported sequences into rows of `[x, y]`, one row per glyph.
pub fn to_rows(array: &[Vec<DVec2>]) -> Vec<Vec<[f64; 2]>> {
    array
        .iter()
        .map(|glyph| glyph.iter().map(|p| p.to_array()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glyph_arc_core::Line;

    use crate::reader::FontReader;

    #[test]
    fn normalization_centers_and_keeps_aspect() {
        let points = [
            DVec2::new(10.0, 20.0),
            DVec2::new(30.0, 20.0),
            DVec2::new(30.0, 30.0),
        ];
        let normalized = normalize_glyph(&points);

        assert_eq!(normalized[0], DVec2::new(-1.0, -0.5));
        assert_eq!(normalized[1], DVec2::new(1.0, -0.5));
        assert_eq!(normalized[2], DVec2::new(1.0, 0.5));
    }

    #[test]
    fn degenerate_glyph_is_only_centered() {
        let points = [DVec2::new(3.0, 4.0), DVec2::new(3.0, 4.0)];
        assert_eq!(normalize_glyph(&points), vec![DVec2::ZERO, DVec2::ZERO]);
        assert!(normalize_glyph(&[]).is_empty());
    }

    #[test]
    fn exported_font_fits_unit_square() {
        let glyphs = [
            Glyph::new("a", Line::new((0.0, 0.0), (100.0, 50.0)).to_graphic(10)),
            Glyph::new("b", Line::new((-5.0, 7.0), (-5.0, 9.0)).to_graphic(10)),
        ];
        let font = Font::new("Lines", glyphs, 16);
        let array = font_to_array(&font, true, true);

        assert_eq!(array.len(), 2);
        for glyph in &array {
            assert_eq!(glyph.len(), 16);
            let extent = glyph
                .iter()
                .fold(0.0f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()));
            assert_abs_diff_eq!(extent, 1.0, epsilon = 1e-9);
        }
        assert_eq!(to_rows(&array)[1].len(), 16);
    }

    #[test]
    fn configured_export_ends_on_glyph_end_point() {
        let json = r#"{
            "name": "Hook",
            "glyphs": [{"name": "J", "contours": [[
                {"x": 0, "y": 0, "on_curve": true},
                {"x": 0, "y": 50, "on_curve": true},
                {"x": 40, "y": 50, "on_curve": false},
                {"x": 40, "y": 20, "on_curve": true}
            ]]}]
        }"#;
        let config = SamplingConfig {
            glyph_sample_count: 8,
            include_last_point: true,
            ..Default::default()
        };
        let font = FontReader::new(config.clone()).read_str(json).unwrap();
        let glyph = font.glyph("J").unwrap();

        let array = font_to_array_with(&font, false, &config);
        let last = *array[0].last().unwrap();
        assert_eq!(array[0].len(), 8);
        assert_abs_diff_eq!(last.distance(glyph.graphic().end_point()), 0.0, epsilon = 1e-2);

        let open = font_to_array_with(&font, false, &SamplingConfig::default());
        let open_last = *open[0].last().unwrap();
        assert!(open_last.distance(glyph.graphic().end_point()) > 1.0);
    }
}
