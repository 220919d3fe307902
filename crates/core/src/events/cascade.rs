// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record of a single trigger

/// What one trigger matched and which callbacks actually ran.
///
/// Every list follows cascade order (deepest paths first). Each matched path
/// lands in exactly one of `fired` and `skipped`. It is skipped when an
/// earlier callback in the same cascade removed it, or when it was a once
/// subscription already claimed further up the call stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    root: String,
    matched: Vec<String>,
    fired: Vec<String>,
    skipped: Vec<String>,
}

impl Cascade {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Normalized path that was triggered
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn matched(&self) -> &[String] {
        &self.matched
    }

    pub fn fired(&self) -> &[String] {
        &self.fired
    }

    /// Matched paths whose callbacks did not run
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// True when the trigger matched nothing
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub(crate) fn record(&mut self, path: &str, fired: bool) {
        self.matched.push(path.to_string());
        if fired {
            self.fired.push(path.to_string());
        } else {
            self.skipped.push(path.to_string());
        }
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
