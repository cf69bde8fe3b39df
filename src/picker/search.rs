//! Free-text search state for one open picker session.

use crate::model::{CategoryForest, CategoryId, CategoryNode};
use crate::search::prefix_search;

/// Search term plus matched node ids, recreated on every open.
///
/// Results are stored as ids and resolved against the forest on demand, so
/// the forest stays the single owner of node data.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    term: String,
    results: Vec<CategoryId>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the term and recompute matches against the whole forest.
    pub fn set_term(&mut self, forest: &CategoryForest, term: &str) {
        self.term = term.to_string();
        self.results = prefix_search(forest, term).iter().map(|n| n.id).collect();
    }

    /// The raw term as typed, including any surrounding whitespace.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the seller is searching at all.
    ///
    /// Distinguishes the idle drill-down panel (inactive) from an active
    /// search with zero matches, which the form renders as "no results".
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Matched ids, in depth-first payload order.
    #[must_use]
    pub fn results(&self) -> &[CategoryId] {
        &self.results
    }

    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.results.is_empty()
    }

    /// Resolve the matched ids back to nodes, skipping any that are no
    /// longer present in the forest.
    #[must_use]
    pub fn result_nodes<'f>(&self, forest: &'f CategoryForest) -> Vec<&'f CategoryNode> {
        self.results.iter().filter_map(|id| forest.find(*id)).collect()
    }

    /// Drop the term and all matches.
    pub fn clear(&mut self) {
        self.term.clear();
        self.results.clear();
    }
}
