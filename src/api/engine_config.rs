use serde::{Deserialize, Serialize};

use crate::core::hero::HeroTiming;
use crate::core::types::Viewport;
use crate::error::{ShowroomError, ShowroomResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load showroom
/// setup without inventing their own ad-hoc format. Breakpoints and timing
/// constants are named here instead of living as magic numbers at call
/// sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowroomEngineConfig {
    pub viewport: Viewport,
    /// Inclusive upper width of the compact viewport class.
    #[serde(default = "default_compact_max_width")]
    pub compact_max_width: u32,
    /// Inclusive upper width at which the recently-added section renders
    /// as a carousel instead of a grid.
    #[serde(default = "default_recent_carousel_max_width")]
    pub recent_carousel_max_width: u32,
    /// Minimum horizontal drag distance for a swipe gesture.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    /// Quiet period collapsing resize bursts into one relayout.
    #[serde(default = "default_resize_quiet_period_s")]
    pub resize_quiet_period_s: f64,
    #[serde(default)]
    pub hero_timing: HeroTiming,
    /// Dealership showcase images; empty disables the hero carousel.
    #[serde(default)]
    pub hero_images: Vec<String>,
}

impl ShowroomEngineConfig {
    /// Creates a config with contract defaults for every constant.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            compact_max_width: default_compact_max_width(),
            recent_carousel_max_width: default_recent_carousel_max_width(),
            swipe_threshold_px: default_swipe_threshold_px(),
            resize_quiet_period_s: default_resize_quiet_period_s(),
            hero_timing: HeroTiming::default(),
            hero_images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_compact_max_width(mut self, width: u32) -> Self {
        self.compact_max_width = width;
        self
    }

    #[must_use]
    pub fn with_recent_carousel_max_width(mut self, width: u32) -> Self {
        self.recent_carousel_max_width = width;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_resize_quiet_period_s(mut self, quiet_period_s: f64) -> Self {
        self.resize_quiet_period_s = quiet_period_s;
        self
    }

    #[must_use]
    pub fn with_hero_timing(mut self, timing: HeroTiming) -> Self {
        self.hero_timing = timing;
        self
    }

    #[must_use]
    pub fn with_hero_images(mut self, images: Vec<String>) -> Self {
        self.hero_images = images;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ShowroomResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShowroomError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ShowroomResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ShowroomError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_compact_max_width() -> u32 {
    768
}

fn default_recent_carousel_max_width() -> u32 {
    1400
}

fn default_swipe_threshold_px() -> f64 {
    80.0
}

fn default_resize_quiet_period_s() -> f64 {
    0.25
}
