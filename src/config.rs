//! App shell configuration.
//!
//! The host page may embed a JSON blob to override the marker key or the
//! display strings; every field is optional and falls back to its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Storage key the login flow writes the access token under.
pub const DEFAULT_MARKER_KEY: &str = "token";

/// Error returned by [`GateConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gate config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("marker key must not be empty")]
    EmptyMarkerKey,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Storage key holding the session marker.
    pub marker_key: String,
    /// Document title.
    pub app_title: String,
    /// Text shown under the spinner while bootstrapping.
    pub loading_label: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            marker_key: DEFAULT_MARKER_KEY.to_owned(),
            app_title: "Chat".to_owned(),
            loading_label: "Loading...".to_owned(),
        }
    }
}

impl GateConfig {
    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or names an empty
    /// marker key.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.marker_key.trim().is_empty() {
            return Err(ConfigError::EmptyMarkerKey);
        }
        Ok(config)
    }

    /// Resolve the config from an optional embedded blob. Missing or invalid
    /// blobs fall back to the defaults.
    #[must_use]
    pub fn from_embedded(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("config: {e}; using defaults");
            Self::default()
        })
    }
}
