pub mod carousel;
pub mod catalog;
pub mod filter;
pub mod hero;
pub mod modal;
pub mod types;

pub use carousel::CarouselState;
pub use catalog::{Brand, CatalogDocument, NoviceEligibility, Vehicle, remove_sold_and_empty};
pub use filter::{FilterCriteria, apply_filters};
pub use hero::{HeroCarousel, HeroLayout, HeroTiming};
pub use modal::{DetailModal, Lightbox, ViewerState};
pub use types::{Viewport, ViewportClass};
