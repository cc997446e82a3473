pub mod clamp_utils;
pub mod color_utils;
pub mod contour;
pub mod converter;
pub mod direction;
pub mod error;
pub mod logging;
pub mod math_utils;
pub mod models;
pub mod path;
pub mod renderer;
pub mod renderer_skia;
pub mod smoothing;
pub mod utils;

pub use clamp_utils::{clamp_radius, smoothing_to_factor};
pub use contour::{Contour, PathCommand};
pub use converter::convert_svg_to_png;
pub use direction::{resolve_physical_corners, CornerRadii, LayoutDirection, LogicalCornerRadii};
pub use error::SquircleError;
pub use models::{SquircleElement, SquircleScene};
pub use path::{
    build_gentle_squircle_path, build_path, build_squircle_path, rectangle_contour, EdgeMode,
    SquircleInputs, SquircleVariant,
};
pub use renderer::generate_svg;
pub use renderer_skia::{draw_squircle, render_to_png};
pub use smoothing::{Smoothing, SmoothingPreset};
