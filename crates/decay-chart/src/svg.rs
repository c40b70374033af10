// ─────────────────────────────────────────────────────────────────────
// SCPN Decay Lab — SVG Renderer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Line-chart rendering of recorded decay series as standalone SVG text.

use decay_types::state::DecayHistory;

use crate::palette::color_for;
use crate::scale::LinearScale;

/// Canvas geometry and captions.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    /// Gap between the canvas edge and the plot frame on every side.
    pub margin: f64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub font_size: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            width: 960.0,
            height: 600.0,
            margin: 60.0,
            title: "Isotopic Fractions over Time".to_string(),
            x_label: "Time (s)".to_string(),
            y_label: "Fraction".to_string(),
            font_size: 8.0,
        }
    }
}

/// Render one line per recorded series, plus axes, ticks and a legend.
///
/// Series draw in identifier order with colors from the palette, so the
/// output string is identical for identical histories. An empty history
/// still renders the frame and captions.
pub fn render_chart(history: &DecayHistory, style: &ChartStyle) -> String {
    let left = style.margin;
    let right = style.width - style.margin;
    let top = style.margin;
    let bottom = style.height - style.margin;

    let x_max = history
        .series
        .values()
        .filter_map(|samples| samples.last())
        .map(|&(elapsed_s, _)| elapsed_s)
        .fold(0.0_f64, f64::max);
    let y_max = history
        .series
        .values()
        .flat_map(|samples| samples.iter())
        .map(|&(_, fraction)| fraction)
        .fold(0.0_f64, f64::max);

    let x_scale = LinearScale::new(0.0, x_max, left, right);
    let y_scale = LinearScale::new(0.0, y_max, bottom, top);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" font-family=\"Helvetica, Arial, sans-serif\">\n",
        w = style.width,
        h = style.height
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
        style.width, style.height
    ));

    // Plot frame
    svg.push_str(&format!(
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"black\"/>\n",
        left, bottom, right, bottom
    ));
    svg.push_str(&format!(
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"black\"/>\n",
        left, bottom, left, top
    ));

    // Ticks and numeric labels
    for tick in x_scale.ticks(5) {
        let x = x_scale.map(tick);
        svg.push_str(&format!(
            "  <line x1=\"{x:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\" stroke=\"black\"/>\n",
            bottom,
            bottom + 5.0
        ));
        svg.push_str(&format!(
            "  <text x=\"{x:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n",
            bottom + 16.0,
            style.font_size,
            format_tick(tick)
        ));
    }
    for tick in y_scale.ticks(5) {
        let y = y_scale.map(tick);
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"black\"/>\n",
            left - 5.0,
            left
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"end\">{}</text>\n",
            left - 8.0,
            y + 3.0,
            style.font_size,
            format_tick(tick)
        ));
    }

    // One polyline per series, identifier order
    for (identifier, samples) in &history.series {
        let points: Vec<String> = samples
            .iter()
            .map(|&(elapsed_s, fraction)| {
                format!("{:.2},{:.2}", x_scale.map(elapsed_s), y_scale.map(fraction))
            })
            .collect();
        svg.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
            points.join(" "),
            color_for(identifier)
        ));
    }

    // Legend, top-right inside the frame
    for (row, identifier) in history.isotopes().enumerate() {
        let swatch_y = top + 10.0 + row as f64 * (style.font_size + 8.0);
        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"10\" height=\"10\" fill=\"{}\"/>\n",
            right - 100.0,
            swatch_y,
            color_for(identifier)
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\">{}</text>\n",
            right - 86.0,
            swatch_y + 9.0,
            style.font_size,
            xml_escape(identifier)
        ));
    }

    // Captions
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n",
        style.width / 2.0,
        style.margin * 0.6,
        style.font_size + 2.0,
        xml_escape(&style.title)
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>\n",
        style.width / 2.0,
        style.height - style.margin * 0.25,
        style.font_size,
        xml_escape(&style.x_label)
    ));
    svg.push_str(&format!(
        "  <text x=\"0\" y=\"0\" font-size=\"{}\" text-anchor=\"middle\" \
         transform=\"translate(18 {:.2}) rotate(-90)\">{}</text>\n",
        style.font_size,
        style.height / 2.0,
        xml_escape(&style.y_label)
    ));

    svg.push_str("</svg>\n");
    svg
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1.0e4 || value.abs() < 1.0e-2 {
        format!("{:.1e}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
