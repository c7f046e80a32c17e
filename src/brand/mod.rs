//! Brand identity generation
//!
//! - [`types`] - plan/bible data model
//! - [`schema`] - structured-generation prompt and response schema
//! - [`orchestrator`] - plan generation + image fan-out
//! - [`progress`] - rotating status phrases for in-flight operations

pub mod orchestrator;
pub mod progress;
pub mod schema;
pub mod types;

pub use orchestrator::BrandPlanOrchestrator;
pub use types::{BrandBible, BrandIdentityPlan, ColorInfo, FontPairing, Mission};
