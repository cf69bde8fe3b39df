//! Prefix search over the whole category forest.
//!
//! Search always runs against the entire forest, independent of where the
//! drill-down currently stands: a seller typing in the search box expects
//! to find "Aretes" even while parked three levels into "Cerámica".
//! Matching is a case-insensitive *prefix* test on the category name, never
//! a substring test, so "cer" finds "Cerámica" but "rámica" finds nothing.

use crate::model::{CategoryForest, CategoryNode};

/// Collect every node, at any depth, whose name starts with `term`
/// (case-insensitively), in depth-first payload order.
///
/// Surrounding whitespace in `term` is ignored by design: the term is
/// trimmed before matching, so padding left in the input box never changes
/// the results. A term that is empty or whitespace-only yields no results.
/// Callers that
/// need to tell "not searching" apart from "searched and found nothing" use
/// [`SearchState::is_active`](crate::picker::SearchState::is_active).
#[must_use]
pub fn prefix_search<'f>(forest: &'f CategoryForest, term: &str) -> Vec<&'f CategoryNode> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    forest
        .iter_depth_first()
        .filter(|node| node.name.to_lowercase().starts_with(&needle))
        .collect()
}
