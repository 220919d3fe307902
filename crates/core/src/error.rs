// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event registry and its configuration

use std::path::PathBuf;
use thiserror::Error;

/// Why a registry operation was refused.
///
/// The boolean registry operations never return these; they hand them to the
/// registry's [`Diagnostics`](crate::Diagnostics) sink and answer `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Path argument missing or empty
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Path fails the name grammar
    #[error(
        "Error in [{path:?}]. Special characters, white spaces in names, names ending with a dot, \
         and completely empty strings, are not supported."
    )]
    InvalidPath { path: String },

    /// A subscription already exists at the exact path
    #[error("There is already an event '{path}'. Use the 'replace' method instead.")]
    DuplicateName { path: String },

    /// No subscription at the exact path
    #[error("There is no task with name: \"{path}\"")]
    NotFound { path: String },
}

impl RegistryError {
    /// Short stable label (snake_case) for logs
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::InvalidArguments(_) => "invalid_arguments",
            RegistryError::InvalidPath { .. } => "invalid_path",
            RegistryError::DuplicateName { .. } => "duplicate_name",
            RegistryError::NotFound { .. } => "not_found",
        }
    }

    /// The path the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            RegistryError::InvalidArguments(_) => None,
            RegistryError::InvalidPath { path }
            | RegistryError::DuplicateName { path }
            | RegistryError::NotFound { path } => Some(path),
        }
    }
}

/// Errors that can occur while loading a [`RegistryConfig`](crate::RegistryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
