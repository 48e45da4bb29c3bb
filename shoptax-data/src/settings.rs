use std::io::Read;

use shoptax_core::{TaxSettings, TaxSettingsError};
use thiserror::Error;

/// Errors that can occur when loading a tax settings document.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] TaxSettingsError),
}

/// Loader for tenant tax settings stored as JSON documents.
///
/// Reads the same payload shape the hosted settings endpoint serves and
/// rejects documents that fail `TaxSettings::validate`, so downstream code
/// never sees an out-of-range rate or a blank description.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Parse and validate a settings document from any reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<TaxSettings, SettingsLoadError> {
        let settings: TaxSettings = serde_json::from_reader(reader)?;
        settings.validate()?;
        Ok(settings)
    }
}
