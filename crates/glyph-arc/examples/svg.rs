use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle};

use glyph_arc::export::font_to_array_with;
use glyph_arc::{DVec2, Font, FontReader, SamplingConfig};

const FONT: &str = r#"{
    "name": "Demo",
    "glyphs": [
        {"name": "O", "contours": [
            [
                {"x": 0, "y": 350, "on_curve": true},
                {"x": 0, "y": 700, "on_curve": false},
                {"x": 250, "y": 700, "on_curve": true},
                {"x": 500, "y": 700, "on_curve": false},
                {"x": 500, "y": 350, "on_curve": true},
                {"x": 500, "y": 0, "on_curve": false},
                {"x": 250, "y": 0, "on_curve": true},
                {"x": 0, "y": 0, "on_curve": false}
            ],
            [
                {"x": 100, "y": 350, "on_curve": true},
                {"x": 100, "y": 100, "on_curve": false},
                {"x": 250, "y": 100, "on_curve": true},
                {"x": 400, "y": 100, "on_curve": false},
                {"x": 400, "y": 350, "on_curve": true},
                {"x": 400, "y": 600, "on_curve": false},
                {"x": 250, "y": 600, "on_curve": true},
                {"x": 100, "y": 600, "on_curve": false}
            ]
        ]},
        {"name": "A", "contours": [
            [
                {"x": 0, "y": 0, "on_curve": true},
                {"x": 200, "y": 700, "on_curve": true},
                {"x": 300, "y": 700, "on_curve": true},
                {"x": 500, "y": 0, "on_curve": true},
                {"x": 400, "y": 0, "on_curve": true},
                {"x": 350, "y": 200, "on_curve": true},
                {"x": 150, "y": 200, "on_curve": true},
                {"x": 100, "y": 0, "on_curve": true}
            ],
            [
                {"x": 180, "y": 300, "on_curve": true},
                {"x": 320, "y": 300, "on_curve": true},
                {"x": 250, "y": 580, "on_curve": true}
            ]
        ]},
        {"name": "S", "contours": [[
            {"x": 450, "y": 650, "on_curve": true},
            {"x": 250, "y": 750, "on_curve": false},
            {"x": 50, "y": 600, "on_curve": false},
            {"x": 250, "y": 380, "on_curve": false},
            {"x": 450, "y": 150, "on_curve": false},
            {"x": 250, "y": -50, "on_curve": false},
            {"x": 50, "y": 50, "on_curve": true},
            {"x": 80, "y": 120, "on_curve": true},
            {"x": 250, "y": 40, "on_curve": false},
            {"x": 360, "y": 150, "on_curve": false},
            {"x": 250, "y": 320, "on_curve": false},
            {"x": 0, "y": 600, "on_curve": false},
            {"x": 250, "y": 820, "on_curve": false},
            {"x": 480, "y": 720, "on_curve": true}
        ]]}
    ]
}"#;

fn points_to_svg_path(points: &[DVec2], scale: f64, x_offset: f64, baseline: f64) -> Data {
    let mut data = Data::new();

    for (i, p) in points.iter().enumerate() {
        let x = p.x * scale + x_offset;
        let y = baseline - p.y * scale;

        if i == 0 {
            data = data.move_to((x, y));
        } else {
            data = data.line_to((x, y));
        }
    }

    data
}

fn draw_font(
    font: &Font,
    config: &SamplingConfig,
    scale: f64,
    margin: f64,
    advance: f64,
) -> (Vec<Path>, Vec<Circle>, f64) {
    let baseline = margin + 820.0 * scale;
    let mut paths = Vec::new();
    let mut dots = Vec::new();
    let mut x_offset = margin;

    let sequences = font_to_array_with(font, false, config);
    for (glyph, points) in font.iter().zip(sequences) {
        log::info!(
            "{}: {} points, length {:.1}",
            glyph.name(),
            points.len(),
            glyph.approximate_length()
        );

        paths.push(
            Path::new()
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 1)
                .set("d", points_to_svg_path(&points, scale, x_offset, baseline)),
        );
        for p in &points {
            dots.push(
                Circle::new()
                    .set("cx", p.x * scale + x_offset)
                    .set("cy", baseline - p.y * scale)
                    .set("r", 1.5)
                    .set("fill", "red"),
            );
        }

        x_offset += advance;
    }

    (paths, dots, baseline + margin)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scale = 0.25;
    let margin = 20.0;
    let advance = 150.0;

    let config = SamplingConfig {
        glyph_sample_count: 96,
        segment_sample_count: 16,
        include_last_point: true,
        ..Default::default()
    };
    let reader = FontReader::new(config);
    let font = reader.read_str(FONT)?;

    let (paths, dots, height) = draw_font(&font, reader.config(), scale, margin, advance);
    let width = margin * 2.0 + advance * font.len() as f64;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let mut document = Document::new().add(background);

    for el in paths {
        document = document.add(el);
    }
    for el in dots {
        document = document.add(el);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_glyphs.svg", &document)?;
    println!("Wrote output_glyphs.svg");

    Ok(())
}
