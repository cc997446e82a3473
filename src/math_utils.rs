/// Mathematical utilities for range mapping and arc approximation
use euclid::default::{Box2D, Point2D, Size2D};

/// Type alias for a cubic Bezier segment without its start point: (control_point_1, control_point_2, end_point)
pub type CubicSegment = (Point2D<f32>, Point2D<f32>, Point2D<f32>);

/// Map `value` from the range `[start_x, end_x]` onto `[start_y, end_y]`.
///
/// Inverted ranges are reordered first, so `start_x > end_x` behaves like
/// `[end_x, start_x]` (same for the output range). A zero-width input range
/// maps everything onto `start_y`.
///
/// # Arguments
/// * `value` - The input value
/// * `start_x`, `end_x` - Input range
/// * `start_y`, `end_y` - Output range
pub fn transform_fraction<T>(value: T, start_x: T, end_x: T, start_y: T, end_y: T) -> T
where
    T: num_traits::Float,
{
    let (start_x, end_x) = if start_x <= end_x { (start_x, end_x) } else { (end_x, start_x) };
    let (start_y, end_y) = if start_y <= end_y { (start_y, end_y) } else { (end_y, start_y) };

    let span_x = end_x - start_x;
    if span_x == T::zero() {
        return start_y;
    }

    start_y + (value - start_x) / span_x * (end_y - start_y)
}

/// Half of the smallest axis, never negative and never NaN
pub fn corner_threshold(size: Size2D<f32>) -> f32 {
    let min = min_dimension(size);
    if min.is_finite() && min > 0.0 {
        min / 2.0
    } else {
        0.0
    }
}

/// Smallest side of `size`; 0 when either side is not finite
pub fn min_dimension(size: Size2D<f32>) -> f32 {
    if size.width.is_finite() && size.height.is_finite() {
        size.width.min(size.height)
    } else {
        0.0
    }
}

/// Flattening tolerance for arcs, in user units
pub const ARC_TOLERANCE: f64 = 0.1;

/// Largest sweep worth drawing; anything past a full turn retraces the ellipse
pub const MAX_SWEEP_ANGLE: f32 = 360.0;

/// Approximate an elliptical arc inscribed in `bounds` with cubic segments.
///
/// Angles are in degrees, measured clockwise from the positive x axis in a
/// y-down coordinate system. The sweep is capped to one full turn.
pub fn arc_to_cubics(bounds: Box2D<f32>, start_angle: f32, sweep_angle: f32) -> Vec<CubicSegment> {
    let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
    if sweep_angle == 0.0 || ![sweep_angle, start_angle, rx, ry].iter().all(|v| v.is_finite()) {
        return vec![];
    }

    let sweep = sweep_angle.clamp(-MAX_SWEEP_ANGLE, MAX_SWEEP_ANGLE);
    let center = bounds.center();
    let arc = kurbo::Arc {
        center: kurbo::Point::new(center.x as f64, center.y as f64),
        radii: kurbo::Vec2::new(rx as f64, ry as f64),
        start_angle: (start_angle as f64).to_radians(),
        sweep_angle: (sweep as f64).to_radians(),
        x_rotation: 0.0,
    };

    let point = |p: kurbo::Point| Point2D::new(p.x as f32, p.y as f32);
    arc.append_iter(ARC_TOLERANCE)
        .filter_map(|el| match el {
            kurbo::PathEl::CurveTo(c1, c2, end) => Some((point(c1), point(c2), point(end))),
            _ => None,
        })
        .collect()
}

/// Point on the ellipse inscribed in `bounds` at `angle` degrees
pub fn point_on_arc(bounds: Box2D<f32>, angle: f32) -> Point2D<f32> {
    let center = bounds.center();
    let a = angle.to_radians();
    Point2D::new(
        center.x + bounds.width() / 2.0 * a.cos(),
        center.y + bounds.height() / 2.0 * a.sin(),
    )
}
