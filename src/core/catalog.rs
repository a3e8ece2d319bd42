//! Catalog wire model.
//!
//! Field names follow the inventory JSON, which uses Italian keys
//! (`anno`, `chilometraggio`, `prezzo`, ...). The catalog is parsed once at
//! startup and treated as an immutable snapshot for the session.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level catalog document: brands own their vehicles by containment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub brands: Vec<Brand>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub cars: Vec<Vehicle>,
}

/// Novice-driver eligibility flag.
///
/// The wire value is the string `"SI"` or `"NO"`, but older inventory files
/// also carried a plain boolean. Anything that is not an explicit yes
/// deserializes as [`NoviceEligibility::NotEligible`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoviceEligibility {
    #[serde(rename = "SI")]
    Eligible,
    #[default]
    #[serde(rename = "NO")]
    NotEligible,
}

impl NoviceEligibility {
    #[must_use]
    pub fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

fn deserialize_novice<'de, D>(deserializer: D) -> Result<NoviceEligibility, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Flag(bool),
        Text(String),
    }

    Ok(match Wire::deserialize(deserializer)? {
        Wire::Flag(true) => NoviceEligibility::Eligible,
        Wire::Flag(false) => NoviceEligibility::NotEligible,
        Wire::Text(text) if text == "SI" => NoviceEligibility::Eligible,
        Wire::Text(_) => NoviceEligibility::NotEligible,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub anno: i32,
    pub chilometraggio: u32,
    pub carburante: String,
    pub tipo_cambio: String,
    pub cavalli: u32,
    pub prezzo: u32,
    #[serde(default)]
    pub euro: String,
    #[serde(default, deserialize_with = "deserialize_novice")]
    pub neopatentati: NoviceEligibility,
    #[serde(default)]
    pub venduto: bool,
    #[serde(default)]
    pub aggiunto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condizioni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cilindrata: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kw: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posti: Option<u32>,
}

impl Vehicle {
    /// Image list backing the detail viewer: the gallery when present,
    /// otherwise the single card image (possibly an empty placeholder slot).
    #[must_use]
    pub fn display_gallery(&self) -> Vec<String> {
        if self.gallery.is_empty() {
            vec![self.image.clone()]
        } else {
            self.gallery.clone()
        }
    }

    /// `gallery.len() > 1` implies carousel rendering; otherwise the card
    /// falls back to a single image.
    #[must_use]
    pub fn has_carousel(&self) -> bool {
        self.gallery.len() > 1
    }
}

impl CatalogDocument {
    #[must_use]
    pub fn vehicle(&self, vehicle_id: &str) -> Option<(&Brand, &Vehicle)> {
        self.brands.iter().find_map(|brand| {
            brand
                .cars
                .iter()
                .find(|car| car.id == vehicle_id)
                .map(|car| (brand, car))
        })
    }

    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.brands.iter().map(|brand| brand.cars.len()).sum()
    }
}

/// Drops sold vehicles from every brand, then drops brands left with no
/// inventory. Pure, idempotent, order-preserving.
#[must_use]
pub fn remove_sold_and_empty(document: CatalogDocument) -> CatalogDocument {
    let brands = document
        .brands
        .into_iter()
        .map(|mut brand| {
            brand.cars.retain(|car| !car.venduto);
            brand
        })
        .filter(|brand| !brand.cars.is_empty())
        .collect();

    CatalogDocument { brands }
}
