// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::PipelineConfig;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path and return the raw
/// `PipelineConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (known teaching style, sane limits). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {path:?}"))?;

    let config: PipelineConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {path:?}"))?;

    Ok(config)
}

/// Load a configuration file from path and run semantic validation.
///
/// This is the recommended entry point for embedding applications:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that the default teaching style names a known style and that
///   limits are sane.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}
