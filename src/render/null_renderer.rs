use crate::error::ShowroomResult;
use crate::render::{CatalogScene, OverlayView, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests can catch inconsistent
/// projections before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_section_count: usize,
    pub last_card_count: usize,
    pub last_overlay_open: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &CatalogScene) -> ShowroomResult<()> {
        scene.validate()?;
        self.last_section_count = scene.sections.len();
        self.last_card_count = scene.card_count();
        self.last_overlay_open = !matches!(scene.overlay, OverlayView::None);
        Ok(())
    }
}
