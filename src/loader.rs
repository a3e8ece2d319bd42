//! Catalog loading: JSON parsing, structure verification, and the
//! sold-vehicle post-processing step.
//!
//! The HTTP fetch lives behind the `http` cargo feature so the default
//! build stays I/O-free. Loading is fail-fast: a single failed fetch or a
//! malformed document aborts initialization; there is no retry policy.

use tracing::{debug, warn};

use crate::core::catalog::{CatalogDocument, remove_sold_and_empty};
use crate::error::{ShowroomError, ShowroomResult};

/// Parses a raw catalog document from JSON text.
pub fn parse_catalog(input: &str) -> ShowroomResult<CatalogDocument> {
    serde_json::from_str(input).map_err(|e| ShowroomError::Parse(e.to_string()))
}

/// Logs diagnostics for structurally suspect brands. Warnings only; a
/// catalog that parsed is accepted as-is.
pub fn verify_structure(document: &CatalogDocument) {
    for (index, brand) in document.brands.iter().enumerate() {
        if brand.id.is_empty() || brand.name.is_empty() {
            warn!(index, "brand is missing id or name");
        }
    }
    debug!(
        brands = document.brands.len(),
        vehicles = document.vehicle_count(),
        "catalog parsed"
    );
}

/// Parses and prepares a session snapshot: verifies the structure and
/// strips sold vehicles and emptied brands.
pub fn prepare_catalog(input: &str) -> ShowroomResult<CatalogDocument> {
    let document = parse_catalog(input)?;
    verify_structure(&document);
    Ok(remove_sold_and_empty(document))
}

/// Fetches, parses, and prepares the catalog from a URL.
///
/// Fails with `Fetch` on transport errors or a non-2xx status and `Parse`
/// on malformed JSON.
#[cfg(feature = "http")]
pub fn load_catalog(url: &str) -> ShowroomResult<CatalogDocument> {
    let response = reqwest::blocking::get(url).map_err(|e| ShowroomError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShowroomError::Fetch(format!(
            "unexpected status {status} from {url}"
        )));
    }

    let body = response
        .text()
        .map_err(|e| ShowroomError::Fetch(e.to_string()))?;
    prepare_catalog(&body)
}
