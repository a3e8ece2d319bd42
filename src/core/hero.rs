//! Dealership showcase carousel: pixel-centered layout plus a
//! deterministic auto-advance timer.
//!
//! Time is injected through [`HeroCarousel::tick`] so every timing
//! property stays synchronous and testable; no OS timers are involved.

use serde::{Deserialize, Serialize};

use crate::core::carousel::CarouselState;
use crate::core::types::ViewportClass;
use crate::error::ShowroomResult;

/// Fixed layout constants for one viewport class.
///
/// The active slide is centered absolutely:
/// `offset = -(index * (slide + gap)) - slide / 2 + centering`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroLayout {
    pub slide_width_px: f64,
    pub gap_px: f64,
    pub centering_px: f64,
}

impl HeroLayout {
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            slide_width_px: 280.0,
            gap_px: 15.0,
            centering_px: -30.0,
        }
    }

    #[must_use]
    pub const fn wide() -> Self {
        Self {
            slide_width_px: 420.0,
            gap_px: 20.0,
            centering_px: -60.0,
        }
    }

    #[must_use]
    pub const fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Compact => Self::compact(),
            ViewportClass::Wide => Self::wide(),
        }
    }

    /// Track offset in pixels that centers the slide at `index`.
    #[must_use]
    pub fn offset_px(&self, index: usize) -> f64 {
        let stride = self.slide_width_px + self.gap_px;
        -(index as f64 * stride) - self.slide_width_px / 2.0 + self.centering_px
    }
}

/// Auto-advance timing contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroTiming {
    /// Seconds between automatic advances while no hold is active.
    pub advance_interval_s: f64,
    /// Seconds a manual navigation holds auto-advance after it completes.
    pub resume_delay_s: f64,
}

impl Default for HeroTiming {
    fn default() -> Self {
        Self {
            advance_interval_s: 7.0,
            resume_delay_s: 3.0,
        }
    }
}

/// Showcase carousel state machine.
///
/// Two independent holds suspend the timer: hover (held until the pointer
/// leaves) and manual navigation (held for `resume_delay_s` after the
/// action). Whenever the timer resumes, the interval restarts from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroCarousel {
    slides: CarouselState,
    timing: HeroTiming,
    hovering: bool,
    resume_cooldown_s: f64,
    elapsed_s: f64,
}

impl HeroCarousel {
    pub fn new(slide_count: usize, timing: HeroTiming) -> ShowroomResult<Self> {
        Ok(Self {
            slides: CarouselState::new(slide_count)?,
            timing,
            hovering: false,
            resume_cooldown_s: 0.0,
            elapsed_s: 0.0,
        })
    }

    #[must_use]
    pub fn slides(&self) -> CarouselState {
        self.slides
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.slides.current()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.slide_count()
    }

    #[must_use]
    pub fn timing(&self) -> HeroTiming {
        self.timing
    }

    /// True while any hold (hover or post-navigation cooldown) is active.
    #[must_use]
    pub fn is_user_interacting(&self) -> bool {
        self.hovering || self.resume_cooldown_s > 0.0
    }

    /// Manual advance; starts the post-navigation hold.
    pub fn next(&mut self) -> usize {
        let index = self.slides.next();
        self.note_manual_navigation();
        index
    }

    /// Manual step back; starts the post-navigation hold.
    pub fn prev(&mut self) -> usize {
        let index = self.slides.prev();
        self.note_manual_navigation();
        index
    }

    /// Manual jump (indicator dot); starts the post-navigation hold on
    /// success and leaves all state untouched on a rejected index.
    pub fn go_to(&mut self, index: usize) -> ShowroomResult<()> {
        self.slides.go_to(index)?;
        self.note_manual_navigation();
        Ok(())
    }

    pub fn hover_enter(&mut self) {
        self.hovering = true;
        self.elapsed_s = 0.0;
    }

    pub fn hover_leave(&mut self) {
        self.hovering = false;
        self.elapsed_s = 0.0;
    }

    /// Registers a completed manual interaction (navigation or swipe).
    pub fn note_manual_navigation(&mut self) {
        self.resume_cooldown_s = self.timing.resume_delay_s;
        self.elapsed_s = 0.0;
    }

    /// Advances simulated time and returns how many slides auto-advance
    /// moved. The cooldown hold keeps ticking during hover; accumulated
    /// interval time does not.
    pub fn tick(&mut self, delta_s: f64) -> usize {
        if !delta_s.is_finite() || delta_s <= 0.0 {
            return 0;
        }

        let mut remaining = delta_s;
        if self.resume_cooldown_s > 0.0 {
            if remaining < self.resume_cooldown_s {
                self.resume_cooldown_s -= remaining;
                return 0;
            }
            remaining -= self.resume_cooldown_s;
            self.resume_cooldown_s = 0.0;
            self.elapsed_s = 0.0;
        }

        if self.hovering {
            return 0;
        }

        self.elapsed_s += remaining;
        let advances = (self.elapsed_s / self.timing.advance_interval_s) as usize;
        if advances > 0 {
            self.elapsed_s -= advances as f64 * self.timing.advance_interval_s;
            for _ in 0..advances {
                self.slides.next();
            }
        }
        advances
    }
}
