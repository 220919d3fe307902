// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical publish/subscribe
//!
//! This module provides:
//! - `path` - Normalization, validation and branch matching for dotted paths
//! - `EventRegistry` - Path-keyed subscriptions with deepest-first triggering
//! - `SubscriptionState` - Lifecycle of a registered callback
//! - `Cascade` - What a single trigger matched and fired

mod cascade;
pub mod path;
mod registry;
mod subscription;

pub use cascade::Cascade;
pub use registry::EventRegistry;
pub use subscription::SubscriptionState;
