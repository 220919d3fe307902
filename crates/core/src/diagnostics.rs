// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report-and-continue sink for refused registry operations
//!
//! The registry never surfaces a [`RegistryError`] from its boolean
//! operations. Each refusal is reported here exactly once and the caller
//! simply sees `false`.

use crate::error::RegistryError;
#[cfg(any(test, feature = "test-support"))]
use std::sync::{Arc, Mutex};

/// Default prefix for diagnostic messages
pub const DEFAULT_PREFIX: &str = "### Events:";

/// Receives one report per refused operation. Must not panic.
pub trait Diagnostics {
    fn report(&self, error: &RegistryError);
}

/// Sink that emits each report as a `tracing` warning
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    prefix: String,
}

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &RegistryError) {
        tracing::warn!(
            label = error.as_label(),
            path = error.path().unwrap_or_default(),
            "{} {}",
            self.prefix,
            error
        );
    }
}

/// Sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _error: &RegistryError) {}
}

/// Sink that records reports for later inspection.
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the registry.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    reports: Arc<Mutex<Vec<RegistryError>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports so far, oldest first
    pub fn reports(&self) -> Vec<RegistryError> {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Labels of all reports so far
    pub fn labels(&self) -> Vec<&'static str> {
        self.reports().iter().map(RegistryError::as_label).collect()
    }

    pub fn clear(&self) {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Diagnostics for RecordingDiagnostics {
    fn report(&self, error: &RegistryError) {
        self.reports
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(error.clone());
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
