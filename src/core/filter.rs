//! Vehicle filter engine.
//!
//! Criteria are sparse: unset fields impose no constraint, and a vehicle
//! passes only when every set constraint holds. Filtering derives a view
//! and never mutates or reorders the input.

use serde::{Deserialize, Serialize};

use crate::core::catalog::{NoviceEligibility, Vehicle};

/// Sparse numeric-range and categorical constraints over vehicle records.
///
/// Empty-string form inputs are expected to be dropped at the parse
/// boundary; an empty criteria value here means "unconstrained", so
/// [`FilterCriteria::default`] is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower_max: Option<u32>,
    /// Substring match against the vehicle fuel label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    /// Exact match against the transmission label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    /// `Eligible` keeps only novice-eligible vehicles; `NotEligible` keeps
    /// everything that is not explicitly eligible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub novice_eligible: Option<NoviceEligibility>,
    /// Exact match against the emission class label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_class: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_price_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    #[must_use]
    pub fn with_year_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    #[must_use]
    pub fn with_mileage_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.mileage_min = min;
        self.mileage_max = max;
        self
    }

    #[must_use]
    pub fn with_horsepower_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.horsepower_min = min;
        self.horsepower_max = max;
        self
    }

    #[must_use]
    pub fn with_fuel(mut self, fuel: impl Into<String>) -> Self {
        self.fuel = Some(fuel.into());
        self
    }

    #[must_use]
    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    #[must_use]
    pub fn with_novice_eligible(mut self, eligibility: NoviceEligibility) -> Self {
        self.novice_eligible = Some(eligibility);
        self
    }

    #[must_use]
    pub fn with_emission_class(mut self, emission_class: impl Into<String>) -> Self {
        self.emission_class = Some(emission_class.into());
        self
    }

    /// True when the vehicle satisfies every set constraint.
    ///
    /// Evaluation short-circuits on the first failing predicate; predicate
    /// order does not affect the outcome.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if self.price_min.is_some_and(|min| vehicle.prezzo < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| vehicle.prezzo > max) {
            return false;
        }
        if self.year_min.is_some_and(|min| vehicle.anno < min) {
            return false;
        }
        if self.year_max.is_some_and(|max| vehicle.anno > max) {
            return false;
        }
        if self
            .mileage_min
            .is_some_and(|min| vehicle.chilometraggio < min)
        {
            return false;
        }
        if self
            .mileage_max
            .is_some_and(|max| vehicle.chilometraggio > max)
        {
            return false;
        }
        if self.horsepower_min.is_some_and(|min| vehicle.cavalli < min) {
            return false;
        }
        if self.horsepower_max.is_some_and(|max| vehicle.cavalli > max) {
            return false;
        }
        if let Some(fuel) = &self.fuel
            && !vehicle.carburante.contains(fuel.as_str())
        {
            return false;
        }
        if let Some(transmission) = &self.transmission
            && vehicle.tipo_cambio != *transmission
        {
            return false;
        }
        if let Some(eligibility) = self.novice_eligible {
            let eligible = vehicle.neopatentati.is_eligible();
            match eligibility {
                NoviceEligibility::Eligible if !eligible => return false,
                NoviceEligibility::NotEligible if eligible => return false,
                _ => {}
            }
        }
        if let Some(emission_class) = &self.emission_class
            && vehicle.euro != *emission_class
        {
            return false;
        }
        true
    }
}

/// Stable filter over a vehicle slice: the result preserves input order and
/// borrows from it. Display sorting is a separate, explicit rendering step.
#[must_use]
pub fn apply_filters<'a>(vehicles: &'a [Vehicle], criteria: &FilterCriteria) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| criteria.matches(vehicle))
        .collect()
}
