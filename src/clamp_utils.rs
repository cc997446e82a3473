use crate::math_utils::{corner_threshold, transform_fraction};
use euclid::default::Size2D;

// Smoothing domains
pub const MIN_SMOOTHING: i32 = 0;
pub const MAX_SMOOTHING: i32 = 100;
pub const MIN_LEGACY_SMOOTHING: f32 = 0.55;
pub const MAX_LEGACY_SMOOTHING: f32 = 1.0;

/// Largest pull factor, reached at zero smoothing
pub const MAX_PULL: f32 = 1.0 - MIN_LEGACY_SMOOTHING;

// Upscale ranges
pub const UPSCALE_BOOST_MAX: f32 = 2.33;
pub const UPSCALE_DAMPENING_MIN: f32 = 0.8;

/// Clamp a corner radius into `[0, min(width, height) / 2]`.
///
/// Negative, NaN and zero-size inputs collapse to 0.
pub fn clamp_radius(radius: f32, size: Size2D<f32>) -> f32 {
    let max = corner_threshold(size);
    if radius > 0.0 {
        radius.min(max)
    } else {
        0.0
    }
}

/// Clamp an integer smoothing into `[0, 100]`
pub fn clamp_smoothing(smoothing: i32) -> i32 {
    smoothing.clamp(MIN_SMOOTHING, MAX_SMOOTHING)
}

/// Clamp a legacy float smoothing into `[0.55, 1.0]`
pub fn clamp_legacy_smoothing(smoothing: f32) -> f32 {
    if smoothing.is_nan() {
        return MIN_LEGACY_SMOOTHING;
    }
    smoothing.clamp(MIN_LEGACY_SMOOTHING, MAX_LEGACY_SMOOTHING)
}

/// Map an integer smoothing (0..=100) onto the legacy factor range `[0.55, 1.0]`.
///
/// The builder's pull factor is `1 - smoothing_to_factor(smoothing)`.
pub fn smoothing_to_factor(smoothing: i32) -> f32 {
    percent_to_factor(clamp_smoothing(smoothing) as f32)
}

/// Same as [`smoothing_to_factor`] for a fractional percent
pub fn percent_to_factor(percent: f32) -> f32 {
    transform_fraction(
        percent.clamp(MIN_SMOOTHING as f32, MAX_SMOOTHING as f32),
        MIN_SMOOTHING as f32,
        MAX_SMOOTHING as f32,
        MIN_LEGACY_SMOOTHING,
        MAX_LEGACY_SMOOTHING,
    )
}

/// Map a legacy float smoothing back onto the percent range `[0, 100]`
pub fn legacy_smoothing_to_percent(smoothing: f32) -> f32 {
    transform_fraction(
        clamp_legacy_smoothing(smoothing),
        MIN_LEGACY_SMOOTHING,
        MAX_LEGACY_SMOOTHING,
        MIN_SMOOTHING as f32,
        MAX_SMOOTHING as f32,
    )
}

/// Enlarge a corner radius to compensate for the roundness eaten by smoothing.
///
/// Two factors are multiplied:
/// - a boost mapping smoothing `[0, 100]` onto `[1.0, 2.33]`
/// - a dampening mapping the radius from 0 up to the largest legal radius onto `[1.0, 0.8]`
///
/// The result is clamped back into the legal radius range.
pub fn upscaled_radius(radius: f32, size: Size2D<f32>, smoothing_percent: f32) -> f32 {
    let max = corner_threshold(size);
    if max == 0.0 {
        return 0.0;
    }

    let radius = clamp_radius(radius, size);
    let percent = smoothing_percent.clamp(MIN_SMOOTHING as f32, MAX_SMOOTHING as f32);

    let boost = transform_fraction(percent, MIN_SMOOTHING as f32, MAX_SMOOTHING as f32, 1.0, UPSCALE_BOOST_MAX);

    // Expressed on 1 - r/max since the output range gets reordered ascending
    let dampening = transform_fraction(1.0 - radius / max, 0.0, 1.0, UPSCALE_DAMPENING_MIN, 1.0);

    (radius * boost * dampening).clamp(0.0, max)
}

/// Gradual pull for the gentle variant: 0 at radius 0, growing linearly to
/// 0.45 once the radius reaches `corner_threshold`.
pub fn gentle_pull(radius: f32, corner_threshold: f32) -> f32 {
    if corner_threshold <= 0.0 || !corner_threshold.is_finite() {
        return 0.0;
    }
    transform_fraction(
        radius.clamp(0.0, corner_threshold),
        0.0,
        corner_threshold,
        0.0,
        MAX_PULL,
    )
}
