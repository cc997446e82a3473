use crate::direction::{LayoutDirection, LogicalCornerRadii};
use crate::error::SquircleError;
use crate::math_utils::min_dimension;
use crate::path::{EdgeMode, SquircleInputs, SquircleVariant};
use crate::smoothing::Smoothing;
use euclid::default::Size2D;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A corner size in pixels or as a percent of the shape's smallest side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CornerSizeRepr", into = "CornerSizeRepr")]
pub enum CornerSize {
    Px(f32),
    /// 0 to 100; 50% of the smallest side already fills the whole corner budget
    Percent(f32),
}

impl CornerSize {
    /// Resolve to pixels for a shape of `size`
    pub fn to_px(self, size: Size2D<f32>) -> f32 {
        match self {
            CornerSize::Px(px) => px,
            CornerSize::Percent(percent) => {
                let min = min_dimension(size).max(0.0);
                percent.clamp(0.0, 100.0) / 100.0 * min
            }
        }
    }
}

impl Default for CornerSize {
    fn default() -> Self {
        CornerSize::Px(0.0)
    }
}

impl fmt::Display for CornerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerSize::Px(px) => write!(f, "{px}"),
            CornerSize::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for CornerSize {
    type Err = SquircleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SquircleError::InvalidCornerSize(s.to_string());
        if let Some(percent) = trimmed.strip_suffix('%') {
            return percent.trim().parse::<f32>().map(CornerSize::Percent).map_err(|_| invalid());
        }
        let px = trimmed.strip_suffix("px").unwrap_or(trimmed);
        px.trim().parse::<f32>().map(CornerSize::Px).map_err(|_| invalid())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CornerSizeRepr {
    Px(f32),
    Text(String),
}

impl TryFrom<CornerSizeRepr> for CornerSize {
    type Error = SquircleError;

    fn try_from(repr: CornerSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            CornerSizeRepr::Px(px) => Ok(CornerSize::Px(px)),
            CornerSizeRepr::Text(text) => text.parse(),
        }
    }
}

impl From<CornerSize> for CornerSizeRepr {
    fn from(size: CornerSize) -> Self {
        match size {
            CornerSize::Px(px) => CornerSizeRepr::Px(px),
            CornerSize::Percent(_) => CornerSizeRepr::Text(size.to_string()),
        }
    }
}

/// Corner sizes of an element: one value for all corners, or one per logical corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerSpec {
    Uniform(CornerSize),
    #[serde(rename_all = "camelCase")]
    PerCorner {
        #[serde(default)]
        top_start: CornerSize,
        #[serde(default)]
        top_end: CornerSize,
        #[serde(default)]
        bottom_start: CornerSize,
        #[serde(default)]
        bottom_end: CornerSize,
    },
}

impl Default for CornerSpec {
    fn default() -> Self {
        CornerSpec::Uniform(CornerSize::Percent(100.0))
    }
}

impl CornerSpec {
    pub fn resolve(&self, size: Size2D<f32>) -> LogicalCornerRadii {
        match *self {
            CornerSpec::Uniform(corner) => LogicalCornerRadii::all(corner.to_px(size)),
            CornerSpec::PerCorner { top_start, top_end, bottom_start, bottom_end } => LogicalCornerRadii::new(
                top_start.to_px(size),
                top_end.to_px(size),
                bottom_start.to_px(size),
                bottom_end.to_px(size),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    #[default]
    Primary,
    Gentle,
}

/// Paint source for fills and strokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Brush {
    Solid { color: String },
    /// Evenly spaced color stops; `angle` in degrees, 0 runs left to right, 90 top to bottom
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        stops: Vec<String>,
        #[serde(default)]
        angle: f32,
    },
}

impl Brush {
    pub fn solid(color: impl Into<String>) -> Self {
        Brush::Solid { color: color.into() }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::solid("#000000")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    pub brush: Brush,
    #[serde(default = "default_stroke_width")]
    pub width: f32,
}

fn default_stroke_width() -> f32 {
    1.0
}

fn default_alpha() -> f32 {
    1.0
}

/// One squircle placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquircleElement {
    #[serde(default)]
    pub id: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub corners: CornerSpec,
    #[serde(default)]
    pub variant: VariantKind,
    #[serde(default)]
    pub smoothing: Smoothing,
    #[serde(default)]
    pub upscale: bool,
    #[serde(default)]
    pub edge_pinch: bool,
    #[serde(default)]
    pub direction: LayoutDirection,
    #[serde(default)]
    pub fill: Option<Brush>,
    #[serde(default)]
    pub stroke: Option<StrokeStyle>,
    /// 0.0 (invisible) to 1.0 (opaque)
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

impl SquircleElement {
    pub fn size(&self) -> Size2D<f32> {
        Size2D::new(self.width, self.height)
    }

    pub fn variant(&self) -> SquircleVariant {
        match self.variant {
            VariantKind::Primary => SquircleVariant::Primary {
                smoothing: self.smoothing,
                upscale: self.upscale,
                edges: if self.edge_pinch { EdgeMode::Pinched } else { EdgeMode::Straight },
            },
            VariantKind::Gentle => SquircleVariant::Gentle,
        }
    }

    pub fn inputs(&self) -> SquircleInputs {
        let size = self.size();
        SquircleInputs {
            size,
            corners: self.corners.resolve(size),
            direction: self.direction,
        }
    }
}

/// Scene document consumed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquircleScene {
    /// Canvas size; computed from the elements when absent
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub background: Option<String>,
    pub elements: Vec<SquircleElement>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}
