use crate::core::carousel::CarouselState;
use crate::error::{ShowroomError, ShowroomResult};
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    /// Current carousel state for a vehicle card.
    pub fn card_carousel(&self, vehicle_id: &str) -> ShowroomResult<CarouselState> {
        self.card_carousels
            .get(vehicle_id)
            .copied()
            .ok_or_else(|| ShowroomError::UnknownVehicle(vehicle_id.to_owned()))
    }

    pub fn card_carousel_next(&mut self, vehicle_id: &str) -> ShowroomResult<usize> {
        let state = self.card_carousel_mut(vehicle_id)?;
        Ok(state.next())
    }

    pub fn card_carousel_prev(&mut self, vehicle_id: &str) -> ShowroomResult<usize> {
        let state = self.card_carousel_mut(vehicle_id)?;
        Ok(state.prev())
    }

    pub fn card_carousel_go_to(&mut self, vehicle_id: &str, index: usize) -> ShowroomResult<()> {
        let state = self.card_carousel_mut(vehicle_id)?;
        state.go_to(index)
    }

    /// Navigation state of the recently-added carousel, present only when
    /// the section currently renders as a multi-slide carousel.
    #[must_use]
    pub fn recent_carousel(&self) -> Option<CarouselState> {
        self.recent_carousel
    }

    /// Advances the recently-added carousel; `None` when the section is a
    /// grid or has at most one slide.
    pub fn recent_carousel_next(&mut self) -> Option<usize> {
        self.recent_carousel.as_mut().map(CarouselState::next)
    }

    pub fn recent_carousel_prev(&mut self) -> Option<usize> {
        self.recent_carousel.as_mut().map(CarouselState::prev)
    }

    pub fn recent_carousel_go_to(&mut self, index: usize) -> ShowroomResult<()> {
        match &mut self.recent_carousel {
            Some(state) => state.go_to(index),
            None => Ok(()),
        }
    }

    fn card_carousel_mut(&mut self, vehicle_id: &str) -> ShowroomResult<&mut CarouselState> {
        self.card_carousels
            .get_mut(vehicle_id)
            .ok_or_else(|| ShowroomError::UnknownVehicle(vehicle_id.to_owned()))
    }

    /// One registry entry per vehicle, keyed by id in catalog order.
    /// Single-image vehicles get a one-slide state whose controls stay
    /// hidden and whose navigation is a wraparound no-op.
    pub(super) fn rebuild_card_carousels(&mut self) {
        self.card_carousels.clear();
        for brand in &self.catalog.brands {
            for car in &brand.cars {
                let slide_count = car.gallery.len().max(1);
                if let Ok(state) = CarouselState::new(slide_count) {
                    self.card_carousels.insert(car.id.clone(), state);
                }
            }
        }
    }

    pub(super) fn reset_card_carousels(&mut self) {
        for state in self.card_carousels.values_mut() {
            let _ = state.go_to(0);
        }
    }

    pub(super) fn rebuild_recent_carousel(&mut self) {
        let slide_count = self.recently_added_vehicles().len();
        let carousel_layout = self.viewport.width <= self.config.recent_carousel_max_width;
        self.recent_carousel = if carousel_layout && slide_count > 1 {
            CarouselState::new(slide_count).ok()
        } else {
            None
        };
    }
}
