//! Engine facade and its per-concern controllers.

mod carousel_controller;
mod catalog_controller;
mod engine;
mod engine_config;
mod filter_controller;
mod hero_controller;
mod labels;
mod modal_controller;
mod scene_builder;
mod validation;
mod viewport_controller;

pub use engine::ShowroomEngine;
pub use engine_config::ShowroomEngineConfig;
pub use labels::{car_title, format_number, format_price};
