// src/config/mod.rs

//! Pipeline configuration loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate semantic invariants like known teaching styles (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{GenerationSection, NotesSection, NotificationSection, PipelineConfig};
pub use validate::validate_config;
