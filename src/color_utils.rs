/// Color parsing utilities for fills, strokes and backgrounds
use crate::error::{Result, SquircleError};
use palette::Srgba;

/// Parse a hex color string into an RGBA color
/// Accepts:
/// - "transparent" or "none" => (0, 0, 0, 0)
/// - #RGB or RGB => (r, g, b, 255), each digit doubled
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
pub fn parse_color(color_str: &str) -> Result<Srgba<u8>> {
    let trimmed = color_str.trim();
    if is_transparent(trimmed) {
        return Ok(Srgba::new(0, 0, 0, 0));
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = |reason: &str| SquircleError::InvalidColor {
        value: color_str.to_string(),
        reason: reason.to_string(),
    };
    if !hex.is_ascii() {
        return Err(invalid("non-ASCII characters"));
    }

    let component = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| invalid(&format!("invalid hex digit in {name} component")))
    };

    match hex.len() {
        3 => {
            // #RGB shorthand
            let r = component(0..1, "R")?;
            let g = component(1..2, "G")?;
            let b = component(2..3, "B")?;
            Ok(Srgba::new(r * 17, g * 17, b * 17, 255))
        }
        6 => Ok(Srgba::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            255,
        )),
        8 => Ok(Srgba::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            component(6..8, "A")?,
        )),
        n => Err(invalid(&format!(
            "expected 3, 6 or 8 hex digits (RGB, RRGGBB or RRGGBBAA), got {n}"
        ))),
    }
}

/// Check if a color string represents transparency
pub fn is_transparent(color: &str) -> bool {
    color.is_empty() || color.eq_ignore_ascii_case("transparent") || color.eq_ignore_ascii_case("none")
}

/// Format a color as `#rrggbb` for SVG attributes (alpha goes in a separate opacity attribute)
pub fn to_svg_hex(color: Srgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Alpha channel as a 0.0..=1.0 opacity
pub fn opacity(color: Srgba<u8>) -> f32 {
    color.alpha as f32 / 255.0
}

/// Convert to a tiny-skia color, multiplying the alpha by `alpha` (0.0..=1.0)
pub fn to_skia_color(color: Srgba<u8>, alpha: f32) -> tiny_skia::Color {
    let a = (color.alpha as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, a)
}
