//! Bounded cyclic index state machine shared by every image carousel.

use serde::{Deserialize, Serialize};

use crate::error::{ShowroomError, ShowroomResult};

/// Current-slide state over a fixed, non-empty slide list.
///
/// `next`/`prev` wrap around; `go_to` rejects out-of-range targets and
/// leaves the state untouched. The slide count is fixed at construction —
/// regenerating a carousel for a new image list builds a fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> ShowroomResult<Self> {
        if len == 0 {
            return Err(ShowroomError::InvalidData(
                "carousel needs at least one slide".to_owned(),
            ));
        }
        Ok(Self { len, current: 0 })
    }

    #[must_use]
    pub fn slide_count(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    /// Advances one slide with wraparound and returns the new index.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Steps back one slide with wraparound and returns the new index.
    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    pub fn go_to(&mut self, index: usize) -> ShowroomResult<()> {
        if index >= self.len {
            return Err(ShowroomError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Prev/next/indicator controls are hidden, not merely disabled, for
    /// single-slide carousels.
    #[must_use]
    pub fn controls_visible(self) -> bool {
        self.len > 1
    }

    /// Track offset for percentage-based carousels.
    #[must_use]
    pub fn offset_percent(self) -> f64 {
        -(self.current as f64) * 100.0
    }
}
