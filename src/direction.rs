use serde::{Deserialize, Serialize};

/// Text/layout direction used to map start/end corners onto left/right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// Per-corner radii in physical order (pixels).
///
/// Negative values are tolerated here and clamped by the path builders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadii {
    /// Top pair first, then the bottom pair, left before right
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Uniform radius on all four corners.
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r }
    }

    pub fn sum(&self) -> f32 {
        self.top_left + self.top_right + self.bottom_right + self.bottom_left
    }

    /// Apply `f` to every corner
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }
}

/// Per-corner radii in logical order: "start" is left in LTR and right in RTL.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LogicalCornerRadii {
    pub top_start: f32,
    pub top_end: f32,
    pub bottom_start: f32,
    pub bottom_end: f32,
}

impl LogicalCornerRadii {
    /// Same argument order as [`resolve_physical_corners`]
    pub const fn new(top_start: f32, top_end: f32, bottom_start: f32, bottom_end: f32) -> Self {
        Self { top_start, top_end, bottom_start, bottom_end }
    }

    pub const fn all(r: f32) -> Self {
        Self { top_start: r, top_end: r, bottom_start: r, bottom_end: r }
    }

    pub fn resolve(&self, direction: LayoutDirection) -> CornerRadii {
        resolve_physical_corners(
            self.top_start,
            self.top_end,
            self.bottom_start,
            self.bottom_end,
            direction,
        )
    }
}

/// Map logical start/end corners onto physical left/right corners.
///
/// LTR: start = left, end = right. RTL: start = right, end = left.
/// This is the only place the swap happens; shape outlines and the direct
/// drawing helpers both go through it.
pub fn resolve_physical_corners(
    top_start: f32,
    top_end: f32,
    bottom_start: f32,
    bottom_end: f32,
    direction: LayoutDirection,
) -> CornerRadii {
    match direction {
        LayoutDirection::LeftToRight => CornerRadii {
            top_left: top_start,
            top_right: top_end,
            bottom_right: bottom_end,
            bottom_left: bottom_start,
        },
        LayoutDirection::RightToLeft => CornerRadii {
            top_left: top_end,
            top_right: top_start,
            bottom_right: bottom_start,
            bottom_left: bottom_end,
        },
    }
}
