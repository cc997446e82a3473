use crate::clamp_utils::{clamp_radius, gentle_pull, upscaled_radius, MAX_PULL};
use crate::contour::Contour;
use crate::direction::{CornerRadii, LayoutDirection, LogicalCornerRadii};
use crate::math_utils::corner_threshold;
use crate::smoothing::Smoothing;
use euclid::default::{Box2D, Point2D, Size2D};

/// Fraction of an edge where the edge-pinch control points sit
pub const EDGE_PINCH: f32 = 0.2;

/// Gentle corners are enlarged by this factor before clamping, so radii close
/// to the threshold already turn into full arcs
pub const GENTLE_RADIUS_BOOST: f32 = 1.2;

/// How the straight edges between corners are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    #[default]
    Straight,
    /// Each edge becomes a cubic with control points at 20% and 80% of its length
    Pinched,
}

/// Squircle flavor and its variant-specific parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SquircleVariant {
    Primary {
        smoothing: Smoothing,
        upscale: bool,
        edges: EdgeMode,
    },
    /// Per-corner arc-or-cubic hybrid that turns into a stadium/circle at full radius
    Gentle,
}

impl Default for SquircleVariant {
    fn default() -> Self {
        SquircleVariant::Primary {
            smoothing: Smoothing::default(),
            upscale: false,
            edges: EdgeMode::Straight,
        }
    }
}

/// Everything the builder needs besides the variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquircleInputs {
    pub size: Size2D<f32>,
    pub corners: LogicalCornerRadii,
    pub direction: LayoutDirection,
}

impl SquircleInputs {
    pub fn new(width: f32, height: f32, corners: LogicalCornerRadii, direction: LayoutDirection) -> Self {
        Self { size: Size2D::new(width, height), corners, direction }
    }
}

/// Build the outline of a squircle.
///
/// Logical corners are mapped to physical ones for `inputs.direction`, clamped
/// (upscaled for the primary variant when asked, boosted by
/// [`GENTLE_RADIUS_BOOST`] for the gentle one), then handed to the variant's builder.
pub fn build_path(variant: &SquircleVariant, inputs: &SquircleInputs) -> Contour {
    let size = sanitize_size(inputs.size);
    let physical = inputs.corners.resolve(inputs.direction);

    match *variant {
        SquircleVariant::Primary { smoothing, upscale, edges } => {
            let radii = if upscale {
                let percent = smoothing.percent();
                physical.map(|r| upscaled_radius(r, size, percent))
            } else {
                physical.map(|r| clamp_radius(r, size))
            };
            build_squircle_path(size, radii, smoothing.pull(), edges)
        }
        SquircleVariant::Gentle => {
            let radii = physical.map(|r| clamp_radius(r * GENTLE_RADIUS_BOOST, size));
            build_gentle_squircle_path(size, radii)
        }
    }
}

/// Plain rectangle: move to the origin and four straight edges.
pub fn rectangle_contour(size: Size2D<f32>) -> Contour {
    let Size2D { width, height, .. } = sanitize_size(size);
    let mut contour = Contour::with_capacity(6);
    contour.move_to(0.0, 0.0);
    contour.line_to(width, 0.0);
    contour.line_to(width, height);
    contour.line_to(0.0, height);
    contour.line_to(0.0, 0.0);
    contour.close();
    contour
}

/// Build a squircle from already clamped physical radii.
///
/// `pull` scales the corner control points: at 0.45 the corners are close to
/// circular arcs, at 0 the control points collapse onto the corner and the
/// transition is as pinched as it gets. The contour starts at
/// `(top_left, 0)` and runs clockwise.
pub fn build_squircle_path(size: Size2D<f32>, radii: CornerRadii, pull: f32, edges: EdgeMode) -> Contour {
    if radii.sum() == 0.0 {
        return rectangle_contour(size);
    }

    let Size2D { width: w, height: h, .. } = size;
    let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;
    let pull = if pull.is_nan() { MAX_PULL } else { pull.clamp(0.0, MAX_PULL) };

    let mut contour = Contour::with_capacity(10);
    contour.move_to(tl, 0.0);

    // Top edge, top-right corner
    edge_to(&mut contour, edges, Point2D::new(tl, 0.0), Point2D::new(w - tr, 0.0));
    contour.cubic_to(w - tr * pull, 0.0, w, tr * pull, w, tr);

    // Right edge, bottom-right corner
    edge_to(&mut contour, edges, Point2D::new(w, tr), Point2D::new(w, h - br));
    contour.cubic_to(w, h - br * pull, w - br * pull, h, w - br, h);

    // Bottom edge, bottom-left corner
    edge_to(&mut contour, edges, Point2D::new(w - br, h), Point2D::new(bl, h));
    contour.cubic_to(bl * pull, h, 0.0, h - bl * pull, 0.0, h - bl);

    // Left edge, top-left corner
    edge_to(&mut contour, edges, Point2D::new(0.0, h - bl), Point2D::new(0.0, tl));
    contour.cubic_to(0.0, tl * pull, tl * pull, 0.0, tl, 0.0);

    contour.close();
    contour
}

/// Build a gentle squircle from already clamped physical radii.
///
/// A corner whose radius fills half the smallest side becomes a true
/// 90 degree arc; smaller corners get a cubic whose pull grows with the radius.
pub fn build_gentle_squircle_path(size: Size2D<f32>, radii: CornerRadii) -> Contour {
    if radii.sum() == 0.0 {
        return rectangle_contour(size);
    }

    let Size2D { width: w, height: h, .. } = size;
    let threshold = corner_threshold(size);
    let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;
    let use_arc = |r: f32| r > 0.0 && r >= threshold;

    let mut contour = Contour::with_capacity(10);
    contour.move_to(tl, 0.0);

    contour.line_to(w - tr, 0.0);
    if use_arc(tr) {
        contour.arc_to(Box2D::new(Point2D::new(w - 2.0 * tr, 0.0), Point2D::new(w, 2.0 * tr)), -90.0, 90.0);
    } else {
        let p = gentle_pull(tr, threshold);
        contour.cubic_to(w - tr * p, 0.0, w, tr * p, w, tr);
    }

    contour.line_to(w, h - br);
    if use_arc(br) {
        contour.arc_to(
            Box2D::new(Point2D::new(w - 2.0 * br, h - 2.0 * br), Point2D::new(w, h)),
            0.0,
            90.0,
        );
    } else {
        let p = gentle_pull(br, threshold);
        contour.cubic_to(w, h - br * p, w - br * p, h, w - br, h);
    }

    contour.line_to(bl, h);
    if use_arc(bl) {
        contour.arc_to(Box2D::new(Point2D::new(0.0, h - 2.0 * bl), Point2D::new(2.0 * bl, h)), 90.0, 90.0);
    } else {
        let p = gentle_pull(bl, threshold);
        contour.cubic_to(bl * p, h, 0.0, h - bl * p, 0.0, h - bl);
    }

    contour.line_to(0.0, tl);
    if use_arc(tl) {
        contour.arc_to(Box2D::new(Point2D::new(0.0, 0.0), Point2D::new(2.0 * tl, 2.0 * tl)), 180.0, 90.0);
    } else {
        let p = gentle_pull(tl, threshold);
        contour.cubic_to(0.0, tl * p, tl * p, 0.0, tl, 0.0);
    }

    contour.close();
    contour
}

fn edge_to(contour: &mut Contour, edges: EdgeMode, from: Point2D<f32>, to: Point2D<f32>) {
    match edges {
        EdgeMode::Straight => contour.line_to(to.x, to.y),
        EdgeMode::Pinched => {
            let c1 = from.lerp(to, EDGE_PINCH);
            let c2 = to.lerp(from, EDGE_PINCH);
            contour.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
        }
    }
}

/// Negative and non-finite sides become 0
fn sanitize_size(size: Size2D<f32>) -> Size2D<f32> {
    let side = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size2D::new(side(size.width), side(size.height))
}
