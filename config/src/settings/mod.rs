//! Export settings supplied by the host for a single invocation.
//!
//! The settings are an immutable value threaded into the pipeline; nothing
//! here is process-wide state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RETAIN_CURVED_SURFACE_FACETS;

/// How vertex normals are produced for each emitted triangle corner.
///
/// # Examples
/// ```
/// use config::settings::NormalMode;
/// assert_eq!(NormalMode::from_retain_facets(true), NormalMode::Flat);
/// assert_eq!(NormalMode::from_retain_facets(false), NormalMode::Smooth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalMode {
    /// One normal per triangle, shared by its three corners.
    Flat,
    /// One normal per corner, sampled from the analytic surface.
    Smooth,
}

impl NormalMode {
    /// Maps the host's "retain curved-surface facets" switch to a mode.
    pub fn from_retain_facets(retain: bool) -> Self {
        if retain {
            NormalMode::Flat
        } else {
            NormalMode::Smooth
        }
    }
}

/// Immutable settings for one export invocation.
///
/// # Examples
/// ```
/// use config::settings::{ExportConfig, NormalMode};
/// let config = ExportConfig::new(false);
/// assert_eq!(config.normal_mode(), NormalMode::Smooth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// `true` keeps curved surfaces faceted (flat normals), `false` samples
    /// smooth per-corner normals from the surface.
    pub retain_curved_surface_facets: bool,
}

impl ExportConfig {
    /// Builds settings from the host's facet switch.
    pub fn new(retain_curved_surface_facets: bool) -> Self {
        Self {
            retain_curved_surface_facets,
        }
    }

    /// Parses settings from a JSON object such as
    /// `{"retain_curved_surface_facets": false}`. Missing keys keep their
    /// defaults; unknown keys are rejected.
    ///
    /// # Examples
    /// ```
    /// use config::settings::ExportConfig;
    /// let cfg = ExportConfig::from_json(r#"{"retain_curved_surface_facets": false}"#)
    ///     .expect("valid settings");
    /// assert!(!cfg.retain_curved_surface_facets);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Returns the normal policy selected by these settings.
    pub fn normal_mode(&self) -> NormalMode {
        NormalMode::from_retain_facets(self.retain_curved_surface_facets)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RETAIN_CURVED_SURFACE_FACETS)
    }
}

/// Error returned when host settings cannot be read.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the settings text is not a valid settings object.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid export settings: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
