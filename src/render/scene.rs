//! Backend-agnostic scene for one catalog draw pass.
//!
//! The scene is a pure projection of engine state: renderers read it and
//! draw; nothing is ever read back out of a surface to infer state.

use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ShowroomError, ShowroomResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogScene {
    pub viewport: Viewport,
    pub brand_nav: Vec<BrandNavEntry>,
    pub sections: Vec<BrandSection>,
    pub recently_added: Option<RecentSection>,
    pub hero: Option<HeroView>,
    pub overlay: OverlayView,
    pub scroll_locked: bool,
}

/// Brand navigation strip entry; disabled when the brand has no vehicles
/// matching the active criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandNavEntry {
    pub brand_id: String,
    pub name: String,
    pub logo: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSection {
    pub brand_id: String,
    pub name: String,
    pub cards: Vec<CardView>,
    /// Set when the section renders with no cards (unfiltered empty brand).
    pub empty_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub vehicle_id: String,
    pub title: String,
    pub year: i32,
    pub mileage_label: String,
    pub fuel: String,
    pub transmission: String,
    pub price_label: String,
    pub recently_added: bool,
    pub media: MediaView,
}

/// Card media slot: a carousel for multi-image galleries, a single image,
/// or a placeholder when no image is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaView {
    Carousel(CarouselView),
    Image(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselView {
    pub images: Vec<String>,
    pub active_index: usize,
    pub offset_percent: f64,
    pub controls_visible: bool,
}

/// Recently-added section: a carousel at or below the configured
/// breakpoint, a grid above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSection {
    pub layout: RecentLayout,
    pub cards: Vec<CardView>,
    /// Carousel navigation state when `layout` is `Carousel` and there is
    /// more than one card.
    pub active_index: usize,
    pub offset_percent: f64,
    /// Set when no vehicle is flagged as recently added (unfiltered view).
    pub empty_placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecentLayout {
    Grid,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroView {
    pub images: Vec<String>,
    pub active_index: usize,
    pub offset_px: f64,
    pub auto_advance_held: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayView {
    None,
    Detail(DetailView),
    Lightbox(LightboxView),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub vehicle_id: String,
    pub title: String,
    pub price_label: String,
    pub specs: Vec<SpecRow>,
    pub images: Vec<String>,
    pub active_index: usize,
    pub controls_visible: bool,
    pub fullscreen: Option<FullscreenView>,
}

/// Nested fullscreen overlay projected from the detail modal's shared
/// carousel index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullscreenView {
    pub image: String,
    pub counter_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightboxView {
    pub image: String,
    pub title: Option<String>,
    pub counter_label: String,
    pub controls_visible: bool,
}

impl CatalogScene {
    /// Internal-consistency checks renderers can rely on.
    pub fn validate(&self) -> ShowroomResult<()> {
        if !self.viewport.is_valid() {
            return Err(ShowroomError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for section in &self.sections {
            if section.brand_id.is_empty() {
                return Err(ShowroomError::InvalidData(
                    "brand section with empty id".to_owned(),
                ));
            }
            for card in &section.cards {
                card.validate()?;
            }
        }

        if let Some(recent) = &self.recently_added {
            for card in &recent.cards {
                card.validate()?;
            }
            if !recent.cards.is_empty() && recent.active_index >= recent.cards.len() {
                return Err(ShowroomError::IndexOutOfRange {
                    index: recent.active_index,
                    len: recent.cards.len(),
                });
            }
        }

        if let Some(hero) = &self.hero
            && hero.active_index >= hero.images.len()
        {
            return Err(ShowroomError::IndexOutOfRange {
                index: hero.active_index,
                len: hero.images.len(),
            });
        }

        match &self.overlay {
            OverlayView::None => {
                if self.scroll_locked {
                    return Err(ShowroomError::InvalidData(
                        "scroll locked with no open overlay".to_owned(),
                    ));
                }
            }
            OverlayView::Detail(detail) => {
                if detail.active_index >= detail.images.len() {
                    return Err(ShowroomError::IndexOutOfRange {
                        index: detail.active_index,
                        len: detail.images.len(),
                    });
                }
            }
            OverlayView::Lightbox(_) => {}
        }

        Ok(())
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|section| section.cards.len()).sum()
    }
}

impl CardView {
    fn validate(&self) -> ShowroomResult<()> {
        if self.vehicle_id.is_empty() {
            return Err(ShowroomError::InvalidData(
                "card with empty vehicle id".to_owned(),
            ));
        }
        if let MediaView::Carousel(carousel) = &self.media
            && carousel.active_index >= carousel.images.len()
        {
            return Err(ShowroomError::IndexOutOfRange {
                index: carousel.active_index,
                len: carousel.images.len(),
            });
        }
        Ok(())
    }
}
