//! Registration specs
//!
//! Verify `on`/`one` acceptance rules: normalization, grammar, duplicates.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn duplicate_registration_is_refused() {
    let h = Harness::new();

    assert!(h.on("turbo"));
    assert!(h.events.has("turbo"));
    assert!(!h.on("turbo"));
    assert!(!h.one("turbo"));

    assert_eq!(h.labels(), vec!["duplicate_name", "duplicate_name"]);
    assert_eq!(
        h.diagnostics.reports()[0].to_string(),
        "There is already an event 'turbo'. Use the 'replace' method instead."
    );
}

#[test]
fn normalized_names_share_one_key() {
    let h = Harness::new();

    assert!(h.on("a..b."));
    assert!(!h.on("a.b"));
    assert_eq!(h.events.names(), vec!["a.b".to_string()]);
}

#[test]
fn branches_register_independently_of_their_roots() {
    let h = Harness::new();

    assert!(h.on("turbo"));
    assert!(h.on("turbo.diesel"));
    assert!(!h.on("turbo.diesel"));
    assert!(h.on("dragon.diesel"));
    assert!(h.on("turbo.butters.diesel.injection"));
    assert!(h.on("turbo.diesel.injection"));

    assert_eq!(
        h.events.ordered(),
        vec![
            "turbo.diesel.injection",
            "turbo.diesel",
            "turbo.butters.diesel.injection",
            "turbo",
            "dragon.diesel",
        ]
    );
}

#[test]
fn invalid_names_are_reported_once_each() {
    let h = Harness::new();

    assert!(!h.on(""));
    assert!(!h.on("!@{Pdoroti_e_gotina"));
    assert!(!h.on("white space"));
    assert!(!h.on("..."));
    assert!(!h.on("*"));

    assert_eq!(
        h.labels(),
        vec![
            "invalid_arguments",
            "invalid_path",
            "invalid_path",
            "invalid_path",
            "invalid_path",
        ]
    );
    assert!(h.events.is_empty());
}

#[test]
fn strict_names_must_already_be_normalized() {
    let h = Harness::strict();

    assert!(!h.on("a.b."));
    assert!(!h.on(".a.b"));
    assert!(h.on("a.b"));
    assert!(h.on("CB_is_a_valid_name"));

    assert_eq!(h.labels(), vec!["invalid_path", "invalid_path"]);
    // Lookups still normalize
    assert!(h.events.has("a..b"));
}
