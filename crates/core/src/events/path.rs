// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical path algebra
//!
//! Paths are dot-delimited names such as `aaa.bbb.ccc`. Everything here is
//! pure: normalization, validation, and the segment-boundary containment test
//! that decides which registered paths belong to a branch.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Reserved name meaning "every registered path". Only removal accepts it.
pub const WILDCARD: &str = "*";

/// Separator between path segments
pub const SEPARATOR: char = '.';

// Grammar for a registrable path - this is a constant valid pattern
#[allow(clippy::expect_used)]
static PATH_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]+$").expect("constant regex pattern is valid"));

/// Iterate the non-empty segments of a raw path
pub fn segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Collapse leading, trailing and doubled dots.
///
/// `"a..b."` becomes `"a.b"`; a string of only dots becomes `""`.
/// Does not validate: pair with [`is_valid`] when the result must be
/// registrable.
pub fn normalize(raw: &str) -> String {
    segments(raw).collect::<Vec<_>>().join(".")
}

/// Check whether a path could be registered
pub fn is_valid(path: &str) -> bool {
    path != WILDCARD && PATH_GRAMMAR.is_match(path) && segments(path).next().is_some()
}

/// Valid and already in normalized form (no stray dots)
pub fn is_strict(raw: &str) -> bool {
    is_valid(raw) && normalize(raw) == raw
}

/// True iff `candidate` is `root` or lies beneath it.
///
/// The test respects segment boundaries: `aaa.b` is under `aaa`, `aaab` is not.
pub fn is_descendant_or_self(candidate: &str, root: &str) -> bool {
    match candidate.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with(SEPARATOR),
        None => false,
    }
}

/// Select the members of `root`'s branch from `all_paths`.
///
/// Without children only the exact match is eligible. The result is
/// deduplicated and sorted in descending order, which places every
/// descendant ahead of its ancestors.
pub fn matching_branch<I, S>(root: &str, all_paths: I, include_children: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    matching_branches(std::iter::once(root), all_paths, include_children)
}

/// Union of [`matching_branch`] over several roots, same ordering rule
pub fn matching_branches<'r, R, I, S>(roots: R, all_paths: I, include_children: bool) -> Vec<String>
where
    R: IntoIterator<Item = &'r str>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let roots: Vec<&str> = roots.into_iter().filter(|r| !r.is_empty()).collect();
    if roots.is_empty() {
        return Vec::new();
    }

    let matched: BTreeSet<String> = all_paths
        .into_iter()
        .filter(|p| {
            let p = p.as_ref();
            roots.iter().any(|root| {
                if include_children {
                    is_descendant_or_self(p, root)
                } else {
                    p == *root
                }
            })
        })
        .map(|p| p.as_ref().to_string())
        .collect();

    matched.into_iter().rev().collect()
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
