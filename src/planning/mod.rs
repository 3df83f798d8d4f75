//! Forward and inverse sling calculations
//!
//! - [`LoadLimitRequest`]: "what can I lift with the slings I have?"
//! - [`SizingRequest`]: "which sling do I need for this load?"
//!
//! Requests can be built in code or read from JSON / TOML lift plan files,
//! with masses and measured angles written as `{ value, unit }`.

pub mod load_limit;
pub mod sizing;

pub use load_limit::*;
pub use sizing::*;

use crate::rigging::{AngleBracket, RiggingError};
use crate::types::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error(transparent)]
    Rigging(#[from] RiggingError),

    #[error("Unit conversion error: {0}")]
    UnitError(#[from] UnitError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported lift plan format: {0}")]
    UnsupportedFormat(String),
}

/// Sling angle as given in a request: a bracket, or a measured angle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleInput {
    Bracket(AngleBracket),
    Measured(AngleValue),
}

impl AngleInput {
    pub fn bracket(&self) -> Result<AngleBracket, UnitError> {
        match self {
            AngleInput::Bracket(bracket) => Ok(*bracket),
            AngleInput::Measured(value) => Ok(AngleBracket::classify(value.to_angle()?)),
        }
    }
}

impl From<AngleBracket> for AngleInput {
    fn from(bracket: AngleBracket) -> Self {
        AngleInput::Bracket(bracket)
    }
}

pub(crate) fn default_symmetric() -> bool {
    true
}

pub(crate) fn default_parallel_sets() -> u32 {
    1
}

/// Read a request from a `.json` or `.toml` lift plan file
pub fn read_request<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, PlanningError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        Some("toml") => Ok(toml::from_str(&fs::read_to_string(path)?)?),
        _ => Err(PlanningError::UnsupportedFormat(path.display().to_string())),
    }
}
