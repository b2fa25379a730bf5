// src/config/validate.rs

use anyhow::{Context, Result, anyhow};

use crate::config::model::PipelineConfig;
use crate::course::style::TeachingStyle;

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - `[generation].default_teaching_style` names a known style
/// - `[notes].max_notes >= 1`
pub fn validate_config(cfg: &PipelineConfig) -> Result<()> {
    validate_generation(cfg)?;
    validate_notes(cfg)?;
    Ok(())
}

fn validate_generation(cfg: &PipelineConfig) -> Result<()> {
    cfg.generation
        .default_teaching_style
        .parse::<TeachingStyle>()
        .map_err(|e| anyhow!(e))
        .context("invalid [generation].default_teaching_style")?;
    Ok(())
}

fn validate_notes(cfg: &PipelineConfig) -> Result<()> {
    if cfg.notes.max_notes == 0 {
        return Err(anyhow!("[notes].max_notes must be >= 1 (got 0)"));
    }
    Ok(())
}
