use crate::core::catalog::{Brand, Vehicle};
use crate::core::filter::{FilterCriteria, apply_filters};
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Applies submitted form criteria. The catalog view regenerates, so
    /// every card carousel and the recently-added carousel restart at
    /// slide zero.
    pub fn submit_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.reset_card_carousels();
        self.rebuild_recent_carousel();
    }

    /// Clears the form back to the identity filter.
    pub fn reset_filters(&mut self) {
        self.submit_filters(FilterCriteria::default());
    }

    /// Vehicles matching the active criteria, in catalog order.
    #[must_use]
    pub fn visible_vehicles(&self) -> Vec<&Vehicle> {
        self.catalog
            .brands
            .iter()
            .flat_map(|brand| apply_filters(&brand.cars, &self.criteria))
            .collect()
    }

    /// True when the brand still has vehicles under the active criteria;
    /// drives the enabled/disabled state of brand navigation entries.
    #[must_use]
    pub fn brand_has_matches(&self, brand_id: &str) -> bool {
        self.catalog
            .brands
            .iter()
            .find(|brand| brand.id == brand_id)
            .is_some_and(|brand| {
                brand.cars.iter().any(|car| self.criteria.matches(car))
            })
    }

    /// Recently-added vehicles across all brands under the active
    /// criteria, priciest first (ties keep catalog order).
    #[must_use]
    pub fn recently_added_vehicles(&self) -> Vec<(&Brand, &Vehicle)> {
        let criteria = &self.criteria;
        let mut recent: Vec<(&Brand, &Vehicle)> = self
            .catalog
            .brands
            .iter()
            .flat_map(move |brand| {
                brand
                    .cars
                    .iter()
                    .filter(move |car| car.aggiunto && criteria.matches(car))
                    .map(move |car| (brand, car))
            })
            .collect();
        recent.sort_by(|(_, a), (_, b)| b.prezzo.cmp(&a.prezzo));
        recent
    }
}
