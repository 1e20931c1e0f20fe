// Carousel options: caller overrides merged onto defaults, then sanitized once.
// Bad numbers fall back to defaults with a warning instead of failing.

use log::warn;
use serde::{Deserialize, Serialize};

/// Easing profile selected once per engine. Applies to all three phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingProfile {
    #[default]
    Elastic,
    Linear,
}

/// Options as supplied by the caller (JSON from JS or built in Rust).
/// Missing fields take the documented defaults; legacy names are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    #[serde(default = "default_spacing_x", alias = "cardDistance")]
    pub card_spacing_x: f64,
    #[serde(default = "default_spacing_y", alias = "verticalDistance")]
    pub card_spacing_y: f64,
    #[serde(default = "default_interval_ms", alias = "delay")]
    pub rotation_interval_ms: f64,
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
    #[serde(default = "default_skew", alias = "skewAmount")]
    pub skew_degrees: f64,
    #[serde(default, alias = "easing")]
    pub easing_profile: EasingProfile,
    #[serde(default = "default_width", alias = "width")]
    pub card_width: f64,
    #[serde(default = "default_height", alias = "height")]
    pub card_height: f64,
    /// Start the first rotation on mount instead of after one interval.
    #[serde(default)]
    pub swap_on_start: bool,
}

fn default_spacing_x() -> f64 {
    80.0
}

fn default_spacing_y() -> f64 {
    90.0
}

fn default_interval_ms() -> f64 {
    4000.0
}

fn default_true() -> bool {
    true
}

fn default_skew() -> f64 {
    8.0
}

fn default_width() -> f64 {
    450.0
}

fn default_height() -> f64 {
    320.0
}

impl Default for CarouselOptions {
    fn default() -> Self {
        CarouselOptions {
            card_spacing_x: default_spacing_x(),
            card_spacing_y: default_spacing_y(),
            rotation_interval_ms: default_interval_ms(),
            pause_on_hover: true,
            skew_degrees: default_skew(),
            easing_profile: EasingProfile::Elastic,
            card_width: default_width(),
            card_height: default_height(),
            swap_on_start: false,
        }
    }
}

impl CarouselOptions {
    /// Parse caller JSON. An empty string means "all defaults".
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(CarouselOptions::default());
        }
        serde_json::from_str(json)
    }

    /// Clamp every numeric option into its valid domain and freeze the result.
    pub fn resolve(self) -> CarouselConfig {
        CarouselConfig {
            card_spacing_x: non_negative("cardSpacingX", self.card_spacing_x, default_spacing_x()),
            card_spacing_y: non_negative("cardSpacingY", self.card_spacing_y, default_spacing_y()),
            rotation_interval_ms: interval("rotationIntervalMs", self.rotation_interval_ms),
            pause_on_hover: self.pause_on_hover,
            skew_degrees: finite("skewDegrees", self.skew_degrees, default_skew()),
            easing_profile: self.easing_profile,
            card_width: positive("cardWidth", self.card_width, default_width()),
            card_height: positive("cardHeight", self.card_height, default_height()),
            swap_on_start: self.swap_on_start,
        }
    }
}

fn finite(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("{name}={value} is not a finite number, using {fallback}");
        fallback
    }
}

fn non_negative(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("{name}={value} must be >= 0, using {fallback}");
        fallback
    }
}

fn positive(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("{name}={value} must be > 0, using {fallback}");
        fallback
    }
}

fn interval(name: &str, value: f64) -> u64 {
    let ms = positive(name, value, default_interval_ms()).round() as u64;
    if ms == 0 {
        warn!("{name}={value} rounds to zero, using {}", default_interval_ms());
        return default_interval_ms() as u64;
    }
    ms
}

/// Resolved configuration. Immutable for the lifetime of one engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub card_spacing_x: f64,
    pub card_spacing_y: f64,
    pub rotation_interval_ms: u64,
    pub pause_on_hover: bool,
    pub skew_degrees: f64,
    pub easing_profile: EasingProfile,
    pub card_width: f64,
    pub card_height: f64,
    pub swap_on_start: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselOptions::default().resolve()
    }
}
