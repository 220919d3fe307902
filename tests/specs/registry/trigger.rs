//! Trigger specs
//!
//! Verify branch matching, deepest-first ordering, and once semantics.

use crate::prelude::*;
use similar_asserts::assert_eq;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn find_uses_segment_boundaries() {
    let h = Harness::new().with_paths(&["aaa", "aaab", "aaa.b"]);

    assert_eq!(h.events.find("aaa", true), vec!["aaa.b", "aaa"]);
    assert_eq!(h.events.find("aaa", false), vec!["aaa"]);
    assert!(h.events.find("", true).is_empty());
}

#[test]
fn trigger_fires_root_and_descendants_deepest_first() {
    let h = Harness::new().with_paths(&["aaa", "aaa.bbb", "aaa.bbb.ccc", "aaab"]);

    assert!(h.trigger("aaa"));
    assert_eq!(h.take_fired(), vec!["aaa.bbb.ccc", "aaa.bbb", "aaa"]);

    assert!(h.trigger("aaa.bbb"));
    assert_eq!(h.take_fired(), vec!["aaa.bbb.ccc", "aaa.bbb"]);
}

#[test]
fn once_branch_fires_completely_before_self_destruction() {
    let h = Harness::new();
    for path in ["aaa", "aaa.bbb", "aaa.bbb.ccc"] {
        assert!(h.one(path));
    }

    assert!(h.trigger("aaa"));
    assert_eq!(h.take_fired(), vec!["aaa.bbb.ccc", "aaa.bbb", "aaa"]);
    assert!(h.events.names().is_empty());
}

#[test]
fn once_subscription_fires_exactly_once() {
    let h = Harness::new();
    assert!(h.one("p"));

    assert!(h.trigger("p"));
    assert!(!h.events.has("p"));
    assert!(!h.trigger("p"));

    assert_eq!(h.take_fired(), vec!["p"]);
}

#[test]
fn trigger_without_match_fires_nothing() {
    let h = Harness::new().with_paths(&["turbo", "turbo.diesel"]);

    assert!(!h.trigger("turbo_diesel"));
    assert!(!h.trigger("turbo.turbo_diesel.smahjez"));
    assert!(h.take_fired().is_empty());
    assert!(h.labels().is_empty());
}

#[test]
fn trigger_reports_malformed_paths() {
    let h = Harness::new().with_paths(&["turbo"]);

    assert!(!h.trigger(""));
    assert!(!h.trigger("*"));
    assert!(!h.trigger("a b"));
    assert!(h.take_fired().is_empty());
    assert_eq!(h.labels(), vec!["invalid_arguments", "invalid_path", "invalid_path"]);

    // Queries stay quiet
    assert!(h.events.find("a b!", true).is_empty());
    assert_eq!(h.labels().len(), 3);
}

#[test]
fn panicking_once_callback_unwinds_and_is_never_retried() {
    let h = Harness::new();
    assert!(h.events.one("p", |_: &str, _: &()| panic!("callback failed")));

    let outcome = catch_unwind(AssertUnwindSafe(|| h.trigger("p")));
    assert!(outcome.is_err());

    assert_eq!(h.events.state("p"), Some(SubscriptionState::Spent));
    let cascade = h.events.trigger_cascade("p", &());
    assert_eq!(cascade.matched(), ["p"]);
    assert!(cascade.fired().is_empty());

    assert!(h.on("q"));
    assert!(h.trigger("q"));
    assert_eq!(h.take_fired(), vec!["q"]);

    assert!(h.events.off("p", false));
    assert!(!h.events.has("p"));
    assert!(h.labels().is_empty());
}

#[test]
fn removal_mid_cascade_skips_removed_members() {
    let h = Harness::new();
    let weak = std::rc::Rc::downgrade(&h.events);
    let log = h.tagged("a.z");

    // "a.z" sorts first, fires first, and drops its sibling "a.b"
    assert!(h.events.on("a.z", move |path: &str, args: &()| {
        log(path, args);
        if let Some(events) = weak.upgrade() {
            events.off("a.b", false);
        }
    }));
    assert!(h.on("a.b"));
    assert!(h.on("a"));

    let cascade = h.events.trigger_cascade("a", &());
    assert_eq!(cascade.matched(), ["a.z", "a.b", "a"]);
    assert_eq!(cascade.skipped(), ["a.b"]);
    assert_eq!(h.take_fired(), vec!["a.z", "a"]);
}
