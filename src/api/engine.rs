use indexmap::IndexMap;

use crate::core::carousel::CarouselState;
use crate::core::catalog::CatalogDocument;
use crate::core::filter::FilterCriteria;
use crate::core::hero::HeroCarousel;
use crate::core::modal::{DetailModal, Lightbox};
use crate::core::types::Viewport;
use crate::error::ShowroomResult;
use crate::interaction::{Debouncer, SwipeTracker};
use crate::render::Renderer;

use super::{ShowroomEngineConfig, scene_builder, validation::validate_config};

/// Main orchestration facade consumed by host applications.
///
/// One engine is constructed at startup and owns all showroom state: the
/// catalog snapshot, the active filter criteria, the per-vehicle carousel
/// registry, the hero carousel, and the overlay viewers. Hosts forward
/// input events into it and call [`ShowroomEngine::render`] per pass.
#[derive(Debug)]
pub struct ShowroomEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ShowroomEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) catalog: CatalogDocument,
    pub(super) criteria: FilterCriteria,
    pub(super) card_carousels: IndexMap<String, CarouselState>,
    pub(super) recent_carousel: Option<CarouselState>,
    pub(super) hero: Option<HeroCarousel>,
    pub(super) hero_swipe: SwipeTracker,
    pub(super) overlay_swipe: SwipeTracker,
    pub(super) detail: DetailModal,
    pub(super) lightbox: Lightbox,
    pub(super) resize_debouncer: Debouncer,
    pub(super) pending_viewport: Option<Viewport>,
}

impl<R: Renderer> ShowroomEngine<R> {
    pub fn new(renderer: R, config: ShowroomEngineConfig) -> ShowroomResult<Self> {
        validate_config(&config)?;

        let hero = if config.hero_images.is_empty() {
            None
        } else {
            Some(HeroCarousel::new(
                config.hero_images.len(),
                config.hero_timing,
            )?)
        };

        Ok(Self {
            renderer,
            viewport: config.viewport,
            hero,
            hero_swipe: SwipeTracker::new(config.swipe_threshold_px),
            overlay_swipe: SwipeTracker::new(config.swipe_threshold_px),
            resize_debouncer: Debouncer::new(config.resize_quiet_period_s),
            catalog: CatalogDocument::default(),
            criteria: FilterCriteria::default(),
            card_carousels: IndexMap::new(),
            recent_carousel: None,
            detail: DetailModal::default(),
            lightbox: Lightbox::default(),
            pending_viewport: None,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ShowroomEngineConfig {
        &self.config
    }

    /// Advances the engine's simulated clock: hero auto-advance and the
    /// resize debouncer run off this single pump.
    pub fn tick(&mut self, delta_s: f64) {
        if let Some(hero) = &mut self.hero {
            hero.tick(delta_s);
        }
        if self.resize_debouncer.tick(delta_s)
            && let Some(viewport) = self.pending_viewport.take()
        {
            self.apply_viewport(viewport);
        }
    }

    /// Builds the scene from current state and hands it to the renderer.
    pub fn render(&mut self) -> ShowroomResult<()> {
        let scene = scene_builder::build_scene(self);
        self.renderer.render(&scene)
    }

    /// Builds the scene without rendering it; useful for headless hosts.
    #[must_use]
    pub fn build_scene(&self) -> crate::render::CatalogScene {
        scene_builder::build_scene(self)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
