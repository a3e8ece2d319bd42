use tracing::debug;

use crate::core::catalog::{CatalogDocument, remove_sold_and_empty};
use crate::render::Renderer;

use super::ShowroomEngine;

impl<R: Renderer> ShowroomEngine<R> {
    /// Installs the session catalog snapshot.
    ///
    /// The sold-vehicle post-processing runs here (idempotent, so a
    /// pre-processed document passes through unchanged), every card
    /// carousel is rebuilt at slide zero, open overlays are discarded, and
    /// any previously submitted criteria keep applying to the new data.
    pub fn set_catalog(&mut self, document: CatalogDocument) {
        self.catalog = remove_sold_and_empty(document);
        debug!(
            brands = self.catalog.brands.len(),
            vehicles = self.catalog.vehicle_count(),
            "catalog snapshot installed"
        );

        self.detail.close();
        self.lightbox.close();
        self.rebuild_card_carousels();
        self.rebuild_recent_carousel();
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogDocument {
        &self.catalog
    }
}
