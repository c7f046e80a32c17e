// src/lib.rs

pub mod brand;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;

pub use brand::{BrandBible, BrandPlanOrchestrator};
pub use chat::ChatSession;
pub use config::BrandwiseConfig;
pub use error::BrandwiseError;
pub use gemini::{GeminiClient, GenerativeService};
