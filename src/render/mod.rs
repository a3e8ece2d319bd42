pub mod null_renderer;
pub mod scene;

pub use null_renderer::NullRenderer;
pub use scene::{
    BrandNavEntry, BrandSection, CardView, CarouselView, CatalogScene, DetailView, FullscreenView,
    HeroView, LightboxView, MediaView, OverlayView, RecentLayout, RecentSection, SpecRow,
};

use crate::error::ShowroomResult;

/// Drawing backend seam: hosts implement this over their actual surface
/// (DOM, GTK, terminal, ...) and receive a fully-resolved scene per pass.
pub trait Renderer {
    fn render(&mut self, scene: &CatalogScene) -> ShowroomResult<()>;
}
