// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical event registry
//!
//! Callbacks are registered against dot-delimited paths. Triggering a path
//! fires every callback at that path and beneath it, deepest first, so a
//! once subscription on an ancestor can never remove a descendant before the
//! descendant has fired.
//!
//! Everything runs inline on the caller's thread. The map is never borrowed
//! while a callback runs, so callbacks may call back into the registry (hold
//! it through a `Weak` to avoid a reference cycle).

use super::cascade::Cascade;
use super::path::{self, WILDCARD};
use super::subscription::{Callback, Subscription, SubscriptionState};
use crate::config::RegistryConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::RegistryError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

type Subscriptions<A> = BTreeMap<String, Rc<Subscription<A>>>;

/// Registry of path-keyed subscriptions.
///
/// `A` is the argument type handed to callbacks on trigger; `D` receives a
/// report for every refused operation.
pub struct EventRegistry<A = (), D = TracingDiagnostics> {
    subscriptions: RefCell<Subscriptions<A>>,
    config: RegistryConfig,
    diagnostics: D,
}

impl<A> EventRegistry<A, TracingDiagnostics> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let diagnostics = TracingDiagnostics::with_prefix(config.diagnostic_prefix.clone());
        Self::with_diagnostics(config, diagnostics)
    }
}

impl<A> Default for EventRegistry<A, TracingDiagnostics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, D: Diagnostics> EventRegistry<A, D> {
    pub fn with_diagnostics(config: RegistryConfig, diagnostics: D) -> Self {
        Self {
            subscriptions: RefCell::new(BTreeMap::new()),
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a callback that fires on every trigger of its branch
    pub fn on<F>(&self, path: &str, callback: F) -> bool
    where
        F: Fn(&str, &A) + 'static,
    {
        let result = self.try_on(path, callback);
        self.settle(result)
    }

    /// Register a callback that fires once, then removes itself
    pub fn one<F>(&self, path: &str, callback: F) -> bool
    where
        F: Fn(&str, &A) + 'static,
    {
        let result = self.try_one(path, callback);
        self.settle(result)
    }

    pub fn try_on<F>(&self, path: &str, callback: F) -> Result<(), RegistryError>
    where
        F: Fn(&str, &A) + 'static,
    {
        self.add(path, Rc::new(callback), false)
    }

    pub fn try_one<F>(&self, path: &str, callback: F) -> Result<(), RegistryError>
    where
        F: Fn(&str, &A) + 'static,
    {
        self.add(path, Rc::new(callback), true)
    }

    /// Swap the callback at an existing path, keeping its once flag.
    ///
    /// The old subscription is destroyed and a new one takes its slot.
    pub fn replace<F>(&self, path: &str, callback: F) -> bool
    where
        F: Fn(&str, &A) + 'static,
    {
        let result = self.try_replace(path, callback);
        self.settle(result)
    }

    pub fn try_replace<F>(&self, path: &str, callback: F) -> Result<(), RegistryError>
    where
        F: Fn(&str, &A) + 'static,
    {
        let name = query_key(path)?;

        let old = self
            .subscriptions
            .borrow_mut()
            .remove(&name)
            .ok_or_else(|| RegistryError::NotFound {
                path: path.to_string(),
            })?;
        old.destroy();

        let once = old.once();
        let callback: Callback<A> = Rc::new(callback);
        self.subscriptions.borrow_mut().insert(
            name.clone(),
            Rc::new(Subscription::new(name.as_str(), callback, once)),
        );
        tracing::debug!(path = %name, once, "subscription replaced");

        drop(old);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------

    /// Remove the subscription at `path`, or its whole branch.
    ///
    /// `"*"` removes everything. Returns true if anything was removed.
    pub fn off(&self, path: &str, include_children: bool) -> bool {
        match self.try_off(path, include_children) {
            Ok(removed) => !removed.is_empty(),
            Err(e) => self.settle(Err(e)),
        }
    }

    /// Same as [`off`](Self::off)
    pub fn empty(&self, path: &str, include_children: bool) -> bool {
        self.off(path, include_children)
    }

    /// Remove and return the removed paths (descending).
    ///
    /// An exact removal that finds nothing is `NotFound`; a branch removal
    /// that finds nothing is an empty list.
    pub fn try_off(
        &self,
        path: &str,
        include_children: bool,
    ) -> Result<Vec<String>, RegistryError> {
        if path == WILDCARD {
            return Ok(self.clear());
        }

        let root = query_key(path)?;
        let doomed = {
            let subs = self.subscriptions.borrow();
            path::matching_branch(&root, subs.keys(), include_children)
        };

        if doomed.is_empty() && !include_children {
            return Err(RegistryError::NotFound { path: root });
        }

        self.remove_all(&doomed);
        tracing::debug!(path = %root, include_children, count = doomed.len(), "subscriptions removed");
        Ok(doomed)
    }

    fn clear(&self) -> Vec<String> {
        let drained = std::mem::take(&mut *self.subscriptions.borrow_mut());
        let removed: Vec<String> = drained.keys().rev().cloned().collect();
        for sub in drained.values() {
            sub.destroy();
        }
        drop(drained);

        tracing::debug!(count = removed.len(), "registry cleared");
        removed
    }

    fn remove_all(&self, paths: &[String]) {
        let removed: Vec<Rc<Subscription<A>>> = {
            let mut subs = self.subscriptions.borrow_mut();
            paths.iter().filter_map(|p| subs.remove(p)).collect()
        };
        for sub in &removed {
            sub.destroy();
        }
    }

    /// Destroy a once subscription after it fired, unless something else
    /// already removed or replaced it
    fn retire(&self, sub: &Rc<Subscription<A>>) {
        if !sub.destroy() {
            return;
        }
        let removed = {
            let mut subs = self.subscriptions.borrow_mut();
            match subs.get(sub.path()) {
                Some(current) if Rc::ptr_eq(current, sub) => subs.remove(sub.path()),
                _ => None,
            }
        };
        drop(removed);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Exact membership of the normalized path
    pub fn has(&self, path: &str) -> bool {
        self.subscriptions
            .borrow()
            .contains_key(&path::normalize(path))
    }

    /// Lifecycle state of the subscription at `path`.
    ///
    /// `Spent` means a once callback started and never finished (it
    /// panicked); such a subscription is never invoked again.
    pub fn state(&self, path: &str) -> Option<SubscriptionState> {
        self.subscriptions
            .borrow()
            .get(&path::normalize(path))
            .map(|sub| sub.state())
    }

    /// Registered paths in `path`'s branch, deepest first
    pub fn find(&self, path: &str, include_children: bool) -> Vec<String> {
        self.find_many(&[path], include_children)
    }

    /// Union of [`find`](Self::find) over several roots
    pub fn find_many(&self, roots: &[&str], include_children: bool) -> Vec<String> {
        let roots: Vec<String> = roots.iter().map(|r| path::normalize(r)).collect();
        let subs = self.subscriptions.borrow();
        path::matching_branches(roots.iter().map(String::as_str), subs.keys(), include_children)
    }

    /// All registered paths, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.subscriptions.borrow().keys().cloned().collect()
    }

    /// All registered paths, descending
    pub fn ordered(&self) -> Vec<String> {
        self.subscriptions.borrow().keys().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }

    // ------------------------------------------------------------------
    // Triggering
    // ------------------------------------------------------------------

    /// Fire every callback in `path`'s branch, deepest first.
    ///
    /// Returns true if anything matched. A panicking callback unwinds
    /// through this call.
    pub fn trigger(&self, path: &str, args: &A) -> bool {
        !self.trigger_cascade(path, args).is_empty()
    }

    /// Like [`trigger`](Self::trigger), returning what ran.
    ///
    /// A path that cannot name a subscription is reported and yields an
    /// empty cascade.
    pub fn trigger_cascade(&self, path: &str, args: &A) -> Cascade {
        match self.try_trigger(path, args) {
            Ok(cascade) => cascade,
            Err(e) => {
                self.diagnostics.report(&e);
                Cascade::new(path)
            }
        }
    }

    pub fn try_trigger(&self, path: &str, args: &A) -> Result<Cascade, RegistryError> {
        let root = query_key(path)?;
        let targets: Vec<Rc<Subscription<A>>> = {
            let subs = self.subscriptions.borrow();
            path::matching_branch(&root, subs.keys(), true)
                .iter()
                .filter_map(|p| subs.get(p).cloned())
                .collect()
        };

        let mut cascade = Cascade::new(root);
        for sub in targets {
            let fired = sub.invoke(sub.path(), args);
            if !fired {
                tracing::debug!(path = sub.path(), state = ?sub.state(), "skipped inactive subscription");
            } else if sub.once() {
                self.retire(&sub);
            }
            cascade.record(sub.path(), fired);
        }

        tracing::debug!(
            path = cascade.root(),
            matched = cascade.matched().len(),
            fired = cascade.fired().len(),
            "cascade complete"
        );
        Ok(cascade)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn add(&self, path: &str, callback: Callback<A>, once: bool) -> Result<(), RegistryError> {
        if path.is_empty() {
            return Err(missing_path());
        }
        let name = self
            .config
            .normalization
            .accept(path)
            .ok_or_else(|| RegistryError::InvalidPath {
                path: path.to_string(),
            })?;

        let mut subs = self.subscriptions.borrow_mut();
        if subs.contains_key(&name) {
            return Err(RegistryError::DuplicateName { path: name });
        }
        subs.insert(
            name.clone(),
            Rc::new(Subscription::new(name.as_str(), callback, once)),
        );
        tracing::debug!(path = %name, once, "subscription added");
        Ok(())
    }

    /// Report a refusal to the sink and collapse to the boolean answer
    fn settle(&self, result: Result<(), RegistryError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.report(&e);
                false
            }
        }
    }
}

impl<A, D> fmt::Debug for EventRegistry<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("paths", &self.subscriptions.borrow().keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn missing_path() -> RegistryError {
    RegistryError::InvalidArguments("path must be a non-empty string".to_string())
}

/// Normalize a path that must name something concrete
fn query_key(raw: &str) -> Result<String, RegistryError> {
    if raw.is_empty() {
        return Err(missing_path());
    }
    let name = path::normalize(raw);
    if !path::is_valid(&name) {
        return Err(RegistryError::InvalidPath {
            path: raw.to_string(),
        });
    }
    Ok(name)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
