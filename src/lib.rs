//! showroom-rs: headless car-dealership catalog browsing engine.
//!
//! This crate owns the catalog snapshot, the filter engine, and the
//! carousel/modal state machines behind a dealership showroom page.
//! Rendering stays behind the [`render::Renderer`] seam so hosts can drive
//! any surface from the scene the engine produces.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

pub use api::{ShowroomEngine, ShowroomEngineConfig};
pub use error::{ShowroomError, ShowroomResult};
