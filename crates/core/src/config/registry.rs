// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry configuration
//!
//! ```toml
//! normalization = "strict"
//! diagnostic_prefix = "[events]"
//! ```

use crate::diagnostics::DEFAULT_PREFIX;
use crate::error::ConfigError;
use crate::events::path;
use serde::Deserialize;
use std::path::Path;

/// How raw paths are turned into registry keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Collapse stray dots: `"a..b."` registers as `"a.b"`
    #[default]
    Collapse,
    /// Reject any name that is not already normalized
    Strict,
}

impl Normalization {
    /// Accept a raw path for registration.
    ///
    /// Returns the registry key, or `None` if the policy refuses the name.
    pub fn accept(self, raw: &str) -> Option<String> {
        match self {
            Normalization::Collapse => {
                let name = path::normalize(raw);
                path::is_valid(&name).then_some(name)
            }
            Normalization::Strict => path::is_strict(raw).then(|| raw.to_string()),
        }
    }
}

/// Configuration for an [`EventRegistry`](crate::EventRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub normalization: Normalization,
    /// Prepended to every diagnostic message
    pub diagnostic_prefix: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            diagnostic_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_diagnostic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.diagnostic_prefix = prefix.into();
        self
    }

    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
