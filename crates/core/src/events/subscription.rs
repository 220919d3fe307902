// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriptions held by the registry

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Handler invoked with the fired path and the trigger arguments
pub(crate) type Callback<A> = Rc<dyn Fn(&str, &A)>;

/// Lifecycle of a subscription.
///
/// `Active -> Spent -> Destroyed` for once subscriptions fired by a trigger,
/// `Active | Spent -> Destroyed` on removal. Nothing returns to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Registered and invocable
    Active,
    /// Once subscription that has been claimed by a cascade
    Spent,
    /// Removed from the registry
    Destroyed,
}

/// One registered callback at one normalized path
pub(crate) struct Subscription<A> {
    path: String,
    callback: Callback<A>,
    once: bool,
    state: Cell<SubscriptionState>,
}

impl<A> Subscription<A> {
    pub(crate) fn new(path: impl Into<String>, callback: Callback<A>, once: bool) -> Self {
        Self {
            path: path.into(),
            callback,
            once,
            state: Cell::new(SubscriptionState::Active),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn once(&self) -> bool {
        self.once
    }

    pub fn state(&self) -> SubscriptionState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state() == SubscriptionState::Active
    }

    pub fn destroyed(&self) -> bool {
        self.state() == SubscriptionState::Destroyed
    }

    /// Run the callback if the subscription is still active.
    ///
    /// A once subscription is spent before its callback runs, so a re-entrant
    /// trigger from inside the callback cannot fire it a second time.
    /// Returns whether the callback ran.
    pub(crate) fn invoke(&self, fired: &str, args: &A) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.once {
            self.state.set(SubscriptionState::Spent);
        }
        (self.callback)(fired, args);
        true
    }

    /// Mark as removed. Returns false if it already was.
    pub(crate) fn destroy(&self) -> bool {
        if self.destroyed() {
            return false;
        }
        self.state.set(SubscriptionState::Destroyed);
        true
    }
}

impl<A> fmt::Debug for Subscription<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("path", &self.path)
            .field("once", &self.once)
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
