//! User preferences persistence
//!
//! Stored as JSON under [`Preferences::STORAGE_KEY`] in browser storage.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;
use crate::models::Theme;

/// Shell preferences that survive a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Color scheme (light / dark)
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    pub const STORAGE_KEY: &'static str = "nitrosubs.preferences";

    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|source| CoreError::InvalidPreferences {
            message: source.to_string(),
            source,
        })
    }

    /// Decode stored preferences.
    /// Returns defaults when nothing is stored or the payload is corrupt.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            warn!(subject = e.subject(), error = %e, "discarding stored value");
            Self::default()
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
