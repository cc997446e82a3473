use crate::color_utils::{parse_color, to_skia_color};
use crate::contour::{Contour, PathCommand};
use crate::direction::{CornerRadii, LayoutDirection, LogicalCornerRadii};
use crate::error::{Result, SquircleError};
use crate::math_utils::arc_to_cubics;
use crate::models::{Brush, SquircleElement, SquircleScene, StrokeStyle};
use crate::path::{build_path, SquircleInputs, SquircleVariant};
use crate::renderer::gradient_line;
use crate::utils::{calculate_viewbox, save_png_with_quality};
use euclid::default::{Box2D, Size2D};
use std::path::Path as FsPath;
use tiny_skia::*;

/// Convert a contour into a tiny-skia path. Arcs become cubic segments.
/// Returns `None` for contours with no area to draw.
pub fn contour_to_path(contour: &Contour) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for command in contour.commands() {
        match *command {
            PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCommand::LineTo(p) => pb.line_to(p.x, p.y),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            PathCommand::ArcTo { bounds, start_angle, sweep_angle } => {
                for (c1, c2, end) in arc_to_cubics(bounds, start_angle, sweep_angle) {
                    pb.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                }
            }
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Build a paint for `brush`; gradients span `area` (in path coordinates)
fn brush_paint(brush: &Brush, area: Box2D<f32>, alpha: f32) -> Result<Paint<'static>> {
    let mut paint = Paint::default();
    paint.anti_alias = true;

    match brush {
        Brush::Solid { color } => {
            paint.set_color(to_skia_color(parse_color(color)?, alpha));
        }
        Brush::LinearGradient { stops, angle } => {
            let colors = stops
                .iter()
                .map(|stop| parse_color(stop).map(|c| to_skia_color(c, alpha)))
                .collect::<Result<Vec<_>>>()?;
            let count = colors.len().max(2) - 1;
            let gradient_stops: Vec<GradientStop> = colors
                .iter()
                .enumerate()
                .map(|(i, color)| GradientStop::new(i as f32 / count as f32, *color))
                .collect();

            let ((x1, y1), (x2, y2)) =
                gradient_line(area.min.x, area.min.y, area.width(), area.height(), *angle);
            match LinearGradient::new(
                Point::from_xy(x1, y1),
                Point::from_xy(x2, y2),
                gradient_stops,
                SpreadMode::Pad,
                Transform::identity(),
            ) {
                Some(shader) => paint.shader = shader,
                None => {
                    // Degenerate gradient (no stops or zero length): use the first stop
                    if let Some(first) = colors.first() {
                        paint.set_color(*first);
                    } else {
                        log::warn!("gradient without stops, painting nothing");
                        paint.set_color(Color::TRANSPARENT);
                    }
                }
            }
        }
    }

    Ok(paint)
}

/// Fill and/or stroke an already built contour
pub fn draw_contour(
    pixmap: &mut PixmapMut<'_>,
    contour: &Contour,
    fill: Option<&Brush>,
    stroke: Option<&StrokeStyle>,
    alpha: f32,
    transform: Transform,
) -> Result<()> {
    let (Some(path), Some(area)) = (contour_to_path(contour), contour.bounds()) else {
        log::debug!("skipping empty contour");
        return Ok(());
    };

    if let Some(brush) = fill {
        let paint = brush_paint(brush, area, alpha)?;
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    if let Some(style) = stroke.filter(|s| s.width > 0.0) {
        let paint = brush_paint(&style.brush, area, alpha)?;
        let skia_stroke = Stroke {
            width: style.width,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &skia_stroke, transform, None);
    }

    Ok(())
}

/// Draw a squircle with explicit per-corner pixel radii at `offset`.
///
/// `corners` are given as they would appear in a left-to-right layout; for
/// `RightToLeft` they are mirrored the same way shape outlines mirror their
/// start/end corners.
#[allow(clippy::too_many_arguments)]
pub fn draw_squircle(
    pixmap: &mut PixmapMut<'_>,
    offset: (f32, f32),
    size: Size2D<f32>,
    corners: CornerRadii,
    variant: &SquircleVariant,
    direction: LayoutDirection,
    fill: Option<&Brush>,
    stroke: Option<&StrokeStyle>,
    alpha: f32,
    transform: Transform,
) -> Result<()> {
    let logical = LogicalCornerRadii::new(
        corners.top_left,
        corners.top_right,
        corners.bottom_left,
        corners.bottom_right,
    );
    let inputs = SquircleInputs { size, corners: logical, direction };
    let contour = build_path(variant, &inputs).translated(offset.0, offset.1);
    draw_contour(pixmap, &contour, fill, stroke, alpha, transform)
}

fn render_element(pixmap: &mut PixmapMut<'_>, element: &SquircleElement, transform: Transform) -> Result<()> {
    let contour = build_path(&element.variant(), &element.inputs()).translated(element.x, element.y);
    log::trace!(
        "element {:?}: {} segment(s)",
        element.id.as_deref().unwrap_or("<unnamed>"),
        contour.segment_count()
    );
    draw_contour(
        pixmap,
        &contour,
        element.fill.as_ref(),
        element.stroke.as_ref(),
        element.alpha,
        transform,
    )
}

/// Rasterize `scene` at `scale` (1.0 = one pixel per unit).
///
/// `background` overrides the scene's own background; with neither set the
/// canvas is white.
pub fn render_scene(scene: &SquircleScene, background: Option<&str>, scale: f32) -> Result<Pixmap> {
    let viewbox = calculate_viewbox(scene);

    let width = (viewbox.width * scale).ceil().max(1.0) as u32;
    let height = (viewbox.height * scale).ceil().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(SquircleError::Pixmap { width, height })?;

    let background = background.or(scene.background.as_deref()).unwrap_or("#ffffff");
    let bg = parse_color(background)?;
    if bg.alpha > 0 {
        pixmap.fill(to_skia_color(bg, 1.0));
    }

    let transform = Transform::from_scale(scale, scale).pre_translate(-viewbox.min_x, -viewbox.min_y);

    for element in &scene.elements {
        render_element(&mut pixmap.as_mut(), element, transform)?;
    }

    log::debug!("rendered {} element(s) onto {}x{} pixmap", scene.elements.len(), width, height);
    Ok(pixmap)
}

pub fn render_to_png(
    scene: &SquircleScene,
    output_path: &FsPath,
    background: Option<&str>,
    quality: u8,
    dpi: Option<u32>,
) -> Result<()> {
    // Calculate scale factor from DPI (assume source is 96 DPI)
    const SOURCE_DPI: f32 = 96.0;
    let scale = dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let pixmap = render_scene(scene, background, scale)?;
    save_png_with_quality(&pixmap, output_path, quality)
}
