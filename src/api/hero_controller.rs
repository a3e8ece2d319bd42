use crate::core::hero::{HeroCarousel, HeroLayout};
use crate::core::types::ViewportClass;
use crate::error::ShowroomResult;
use crate::interaction::SwipeDirection;
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    #[must_use]
    pub fn hero(&self) -> Option<&HeroCarousel> {
        self.hero.as_ref()
    }

    /// Layout constants for the current viewport class.
    #[must_use]
    pub fn hero_layout(&self) -> HeroLayout {
        HeroLayout::for_class(ViewportClass::for_width(
            self.viewport.width,
            self.config.compact_max_width,
        ))
    }

    /// Track offset centering the active hero slide, when a hero exists.
    #[must_use]
    pub fn hero_offset_px(&self) -> Option<f64> {
        let hero = self.hero.as_ref()?;
        Some(self.hero_layout().offset_px(hero.current()))
    }

    /// Manual arrow navigation; `None` when no hero is configured.
    pub fn hero_next(&mut self) -> Option<usize> {
        self.hero.as_mut().map(HeroCarousel::next)
    }

    pub fn hero_prev(&mut self) -> Option<usize> {
        self.hero.as_mut().map(HeroCarousel::prev)
    }

    /// Indicator-dot navigation; inert when no hero is configured.
    pub fn hero_go_to(&mut self, index: usize) -> ShowroomResult<()> {
        match &mut self.hero {
            Some(hero) => hero.go_to(index),
            None => Ok(()),
        }
    }

    pub fn hero_hover_enter(&mut self) {
        if let Some(hero) = &mut self.hero {
            hero.hover_enter();
        }
    }

    pub fn hero_hover_leave(&mut self) {
        if let Some(hero) = &mut self.hero {
            hero.hover_leave();
        }
    }

    /// Touch-start does not hold auto-advance; only a completed swipe does.
    pub fn hero_touch_start(&mut self, x: f64) {
        self.hero_swipe.begin(x);
    }

    /// Resolves the drag against the swipe threshold and navigates on a
    /// completed gesture. Below-threshold motion changes nothing.
    pub fn hero_touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let direction = self.hero_swipe.end(x)?;
        let hero = self.hero.as_mut()?;
        match direction {
            SwipeDirection::Next => {
                hero.next();
            }
            SwipeDirection::Prev => {
                hero.prev();
            }
        }
        Some(direction)
    }
}
