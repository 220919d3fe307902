//! Replace specs
//!
//! Verify callback replacement and once preservation.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn replace_preserves_once_flag() {
    let h = Harness::new();
    assert!(h.events.one("x", h.tagged("cbA")));

    assert!(h.events.replace("x", h.tagged("cbB")));
    assert!(h.trigger("x"));

    assert_eq!(h.take_fired(), vec!["cbB"]);
    assert!(!h.events.has("x"));
}

#[test]
fn replace_keeps_regular_subscription_registered() {
    let h = Harness::new();
    assert!(h.events.on("cheetah", h.tagged("old")));

    assert!(h.events.replace("cheetah", h.tagged("new")));
    assert!(h.trigger("cheetah"));
    assert!(h.trigger("cheetah"));

    assert_eq!(h.take_fired(), vec!["new", "new"]);
    assert!(h.events.has("cheetah"));
}

#[test]
fn replace_unknown_path_reports_not_found() {
    let h = Harness::new().with_paths(&["turbo.diesel"]);

    assert!(h.events.replace("turbo.diesel", h.tagged("swapped")));
    assert!(!h.events.replace("turbo.diesel5000", h.recorder()));

    assert_eq!(
        h.diagnostics.reports(),
        vec![RegistryError::NotFound {
            path: "turbo.diesel5000".to_string()
        }]
    );
}
