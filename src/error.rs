//! Error types for settings loading.

use std::fmt;

/// Errors that can occur when loading field settings.
#[derive(Debug)]
pub enum SettingsError {
    /// JSON could not be parsed into settings.
    Parse(serde_json::Error),
    /// Settings parsed but describe an unusable field.
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse field settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "Invalid field settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
