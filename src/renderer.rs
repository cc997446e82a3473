use crate::color_utils::{opacity, parse_color, to_svg_hex};
use crate::error::Result;
use crate::models::{Brush, SquircleElement, SquircleScene, ViewBox};
use crate::path::build_path;
use crate::utils::calculate_viewbox;

/// Start and end points of a linear gradient at `angle` degrees across an
/// axis-aligned box, so the stops span the box edge to edge.
pub fn gradient_line(x: f32, y: f32, width: f32, height: f32, angle: f32) -> ((f32, f32), (f32, f32)) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let cx = x + width / 2.0;
    let cy = y + height / 2.0;
    let half = (width * cos.abs() + height * sin.abs()) / 2.0;
    ((cx - cos * half, cy - sin * half), (cx + cos * half, cy + sin * half))
}

/// Paint attribute value for `brush` plus any `<defs>` entry it needs
fn paint_attr(brush: &Brush, id: &str, el: &SquircleElement, defs: &mut Vec<String>) -> Result<(String, f32)> {
    match brush {
        Brush::Solid { color } => {
            let rgba = parse_color(color)?;
            Ok((to_svg_hex(rgba), opacity(rgba)))
        }
        Brush::LinearGradient { stops, angle } => {
            let ((x1, y1), (x2, y2)) = gradient_line(el.x, el.y, el.width, el.height, *angle);
            let count = stops.len().max(2) - 1;
            let mut stop_tags = Vec::with_capacity(stops.len());
            for (i, stop) in stops.iter().enumerate() {
                let rgba = parse_color(stop)?;
                stop_tags.push(format!(
                    r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                    i as f32 / count as f32,
                    to_svg_hex(rgba),
                    opacity(rgba)
                ));
            }
            defs.push(format!(
                r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{}</linearGradient>"#,
                id,
                x1,
                y1,
                x2,
                y2,
                stop_tags.join("")
            ));
            Ok((format!("url(#{id})"), 1.0))
        }
    }
}

fn render_element(el: &SquircleElement, index: usize, defs: &mut Vec<String>) -> Result<String> {
    let contour = build_path(&el.variant(), &el.inputs()).translated(el.x, el.y);
    let path_data = contour.to_svg_path_data();

    let (fill, fill_opacity) = match &el.fill {
        Some(brush) => paint_attr(brush, &format!("fill{index}"), el, defs)?,
        None => ("none".to_string(), 1.0),
    };

    let stroke_attrs = match &el.stroke {
        Some(stroke) if stroke.width > 0.0 => {
            let (paint, stroke_opacity) = paint_attr(&stroke.brush, &format!("stroke{index}"), el, defs)?;
            format!(
                r#" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
                paint, stroke_opacity, stroke.width
            )
        }
        _ => r#" stroke="none""#.to_string(),
    };

    let id_attr = el
        .id
        .as_deref()
        .map(|id| format!(r#" id="{}""#, escape_xml(id)))
        .unwrap_or_default();

    Ok(format!(
        r#"<path{} d="{}" fill="{}" fill-opacity="{}"{} opacity="{}"/>"#,
        id_attr,
        path_data,
        fill,
        fill_opacity,
        stroke_attrs,
        el.alpha.clamp(0.0, 1.0)
    ))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate a standalone SVG document for `scene`
pub fn generate_svg(scene: &SquircleScene) -> Result<String> {
    let viewbox: ViewBox = calculate_viewbox(scene);

    let mut defs = Vec::new();
    let mut body = Vec::with_capacity(scene.elements.len() + 1);

    if let Some(background) = &scene.background {
        let rgba = parse_color(background)?;
        if rgba.alpha > 0 {
            body.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                viewbox.min_x,
                viewbox.min_y,
                viewbox.width,
                viewbox.height,
                to_svg_hex(rgba),
                opacity(rgba)
            ));
        }
    }

    for (index, el) in scene.elements.iter().enumerate() {
        body.push(render_element(el, index, &mut defs)?);
    }

    log::debug!("generated SVG with {} element(s)", scene.elements.len());

    let defs_block = if defs.is_empty() {
        String::new()
    } else {
        format!("  <defs>\n    {}\n  </defs>\n", defs.join("\n    "))
    };

    Ok(format!(
        "<svg width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}  {}\n</svg>",
        viewbox.width,
        viewbox.height,
        viewbox.min_x,
        viewbox.min_y,
        viewbox.width,
        viewbox.height,
        defs_block,
        body.join("\n  ")
    ))
}
