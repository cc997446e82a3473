use crate::color_utils::{parse_color, to_skia_color};
use crate::error::{Result, SquircleError};
use crate::utils::save_png_with_quality;
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::{Pixmap, Transform};

/// Rasterize an SVG document with resvg and save it as PNG.
///
/// This is the legacy route (SVG first, then PNG); `render_to_png` draws the
/// squircles straight onto a pixmap instead.
pub fn convert_svg_to_png(
    svg_content: &str,
    output_path: &Path,
    background: Option<&str>,
    quality: u8,
    dpi: Option<u32>,
) -> Result<()> {
    let pixmap = rasterize_svg(svg_content, background, dpi)?;
    save_png_with_quality(&pixmap, output_path, quality)
}

pub fn rasterize_svg(svg_content: &str, background: Option<&str>, dpi: Option<u32>) -> Result<Pixmap> {
    let options = usvg::Options::default();
    let tree = Tree::from_str(svg_content, &options)?;

    // Calculate scale factor from DPI (assume source is 96 DPI)
    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height).ok_or(SquircleError::Pixmap { width, height })?;

    // Fill with background (default white if None)
    let bg = parse_color(background.unwrap_or("#ffffff"))?;
    if bg.alpha > 0 {
        pixmap.fill(to_skia_color(bg, 1.0));
    }

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    log::debug!("rasterized SVG to {}x{} via resvg", width, height);
    Ok(pixmap)
}
