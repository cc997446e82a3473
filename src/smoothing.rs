use crate::clamp_utils::{
    clamp_legacy_smoothing, clamp_smoothing, legacy_smoothing_to_percent, smoothing_to_factor,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named smoothing amounts.
///
/// Labels deserialize through [`FromStr`], so scene files accept the same
/// case-insensitive spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SmoothingPreset {
    /// Plain rounded corners
    None,
    Small,
    Medium,
    Large,
    /// Fully pronounced squircle
    Full,
}

impl SmoothingPreset {
    pub const ALL: [SmoothingPreset; 5] = [
        SmoothingPreset::None,
        SmoothingPreset::Small,
        SmoothingPreset::Medium,
        SmoothingPreset::Large,
        SmoothingPreset::Full,
    ];

    /// Integer form (0..=100)
    pub fn percent(self) -> i32 {
        match self {
            SmoothingPreset::None => 0,
            SmoothingPreset::Small => 20,
            SmoothingPreset::Medium => 48,
            SmoothingPreset::Large => 67,
            SmoothingPreset::Full => 100,
        }
    }

    /// Legacy float form (0.55..=1.0)
    pub fn legacy(self) -> f32 {
        match self {
            SmoothingPreset::None => 0.55,
            SmoothingPreset::Small => 0.67,
            SmoothingPreset::Medium => 0.72,
            SmoothingPreset::Large => 0.8,
            SmoothingPreset::Full => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SmoothingPreset::None => "none",
            SmoothingPreset::Small => "small",
            SmoothingPreset::Medium => "medium",
            SmoothingPreset::Large => "large",
            SmoothingPreset::Full => "full",
        }
    }
}

impl fmt::Display for SmoothingPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SmoothingPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SmoothingPreset::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown smoothing preset: {s}"))
    }
}

impl TryFrom<String> for SmoothingPreset {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Corner smoothing in either of its input forms.
///
/// Both forms normalize into the single pull factor used by the path
/// builder; out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Smoothing {
    /// 0 (round) to 100 (fully pinched)
    Percent(i32),
    /// 0.55 (round) to 1.0 (fully pinched)
    Legacy(f32),
    Preset(SmoothingPreset),
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Preset(SmoothingPreset::Medium)
    }
}

impl Smoothing {
    /// Smoothing normalized onto `[0, 100]`
    pub fn percent(&self) -> f32 {
        match *self {
            Smoothing::Percent(value) => clamp_smoothing(value) as f32,
            Smoothing::Legacy(value) => legacy_smoothing_to_percent(value),
            Smoothing::Preset(preset) => preset.percent() as f32,
        }
    }

    /// Smoothing normalized onto the legacy range `[0.55, 1.0]`
    pub fn factor(&self) -> f32 {
        match *self {
            Smoothing::Percent(value) => smoothing_to_factor(value),
            Smoothing::Legacy(value) => clamp_legacy_smoothing(value),
            Smoothing::Preset(preset) => smoothing_to_factor(preset.percent()),
        }
    }

    /// Curve control pull in `[0, 0.45]`: 0.45 is the roundest, 0 the most pinched
    pub fn pull(&self) -> f32 {
        1.0 - self.factor()
    }
}

impl From<SmoothingPreset> for Smoothing {
    fn from(preset: SmoothingPreset) -> Self {
        Smoothing::Preset(preset)
    }
}

impl FromStr for Smoothing {
    type Err = String;

    /// Accepts an integer percent (`"60"`), a legacy float (`"0.72"`) or a preset label (`"large"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(percent) = trimmed.parse::<i32>() {
            return Ok(Smoothing::Percent(percent));
        }
        if let Ok(legacy) = trimmed.parse::<f32>() {
            return Ok(Smoothing::Legacy(legacy));
        }
        trimmed.parse::<SmoothingPreset>().map(Smoothing::Preset)
    }
}
