//! Standalone SVG documents for rendered gauges.

use crate::format::NumberFormat;
use crate::render::{GaugeRender, TextLine};
use std::fmt::Write;

/// Serialize a render as an SVG document.
///
/// The root element carries `role="meter"` and the `aria-value*`
/// attributes so screen readers announce the clamped value.
#[must_use]
pub fn to_svg(render: &GaugeRender) -> String {
    let n = |v: f64| NumberFormat::Shortest.format(v);
    let size = n(render.size);
    let stroke_width = n(render.stroke_width);

    let mut svg = String::with_capacity(768);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {size} {size}\" role=\"meter\" aria-valuenow=\"{}\" \
         aria-valuemin=\"{}\" aria-valuemax=\"{}\">",
        n(render.state.clamped),
        n(render.min),
        n(render.max),
    );

    push_arc(
        &mut svg,
        &render.track_path_data(),
        &render.track_color.to_svg_paint(),
        &stroke_width,
    );
    if let Some(fill) = render.fill_path_data() {
        push_arc(
            &mut svg,
            &fill,
            &render.color.to_svg_paint(),
            &stroke_width,
        );
    }

    let text_paint = render.text_color.to_svg_paint();
    for line in [&render.value_text, &render.label_text].into_iter().flatten() {
        push_text(&mut svg, line, &text_paint);
    }

    svg.push_str("</svg>");
    svg
}

fn push_arc(svg: &mut String, d: &str, stroke: &str, stroke_width: &str) {
    let _ = write!(
        svg,
        "<path d=\"{d}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" \
         stroke-linecap=\"round\"/>"
    );
}

fn push_text(svg: &mut String, line: &TextLine, fill: &str) {
    let n = |v: f64| NumberFormat::Shortest.format(v);
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
         font-size=\"{}\"",
        n(line.position.x),
        n(line.position.y),
        n(line.font_size),
    );
    if let Some(weight) = line.font_weight {
        let _ = write!(svg, " font-weight=\"{weight}\"");
    }
    if line.opacity < 1.0 {
        let _ = write!(svg, " opacity=\"{}\"", n(line.opacity));
    }
    let _ = write!(svg, " fill=\"{fill}\">{}</text>", escape_xml(&line.content));
}

/// Escape text for use in SVG content and attribute values.
#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
