use crate::error::Result;
use crate::models::{SquircleScene, ViewBox};
use std::path::Path;
use tiny_skia::Pixmap;

/// Padding around the elements when the scene does not fix its canvas size
pub const VIEWBOX_PADDING: f32 = 40.0;

/// Save a pixmap to PNG with compression quality control (0-100).
/// Maps 0-100 to PNG compression types:
/// - 0-25: Fast (fastest encoding, larger files)
/// - 26-75: Default (balanced)
/// - 76-100: Best (slowest encoding, smallest files)
pub fn save_png_with_quality(pixmap: &Pixmap, output_path: &Path, quality: u8) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);
    encoder.set_compression(compression_for_quality(quality));

    let mut writer = encoder.write_header()?;

    // tiny-skia stores premultiplied RGBA, PNG wants straight alpha
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    writer.write_image_data(&data)?;

    log::debug!(
        "wrote {}x{} PNG to {}",
        pixmap.width(),
        pixmap.height(),
        output_path.display()
    );
    Ok(())
}

pub fn compression_for_quality(quality: u8) -> png::Compression {
    if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    }
}

/// Calculate the viewbox of a scene.
///
/// An explicit canvas size wins; otherwise the box encloses every element
/// plus padding. An empty scene without a size gets an 800x600 canvas.
pub fn calculate_viewbox(scene: &SquircleScene) -> ViewBox {
    if let (Some(width), Some(height)) = (scene.width, scene.height) {
        return ViewBox { min_x: 0.0, min_y: 0.0, width, height };
    }

    if scene.elements.is_empty() {
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for el in &scene.elements {
        min_x = min_x.min(el.x);
        min_y = min_y.min(el.y);
        max_x = max_x.max(el.x + el.width.max(0.0));
        max_y = max_y.max(el.y + el.height.max(0.0));
    }

    ViewBox {
        min_x: min_x - VIEWBOX_PADDING,
        min_y: min_y - VIEWBOX_PADDING,
        width: max_x - min_x + VIEWBOX_PADDING * 2.0,
        height: max_y - min_y + VIEWBOX_PADDING * 2.0,
    }
}
