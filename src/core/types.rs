use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Two-bucket responsive switch used by the hero layout and the
/// recently-added section. There is no continuous interpolation between
/// buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width against an inclusive compact breakpoint.
    #[must_use]
    pub fn for_width(width: u32, compact_max_width: u32) -> Self {
        if width <= compact_max_width {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}
