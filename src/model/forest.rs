//! The category forest and its pure tree queries.
//!
//! [`CategoryForest`] owns the top-level payload sequence and answers the
//! read-only questions every other layer builds on: which roots exist,
//! where a given id lives, and what the root-to-node ancestor chain looks
//! like. The ancestor query is the single source of truth for breadcrumbs;
//! opening the picker on an existing value and picking a search result both
//! resolve through it.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::category::{CategoryId, CategoryNode};
use crate::error::{PickerError, Result};

/// An immutable snapshot of the category taxonomy.
///
/// Top-level entries normally all carry `parentId == 0`; entries that do
/// not are kept reachable for lookups but excluded from
/// [`roots`](Self::roots), and [`validate_forest`](super::validate_forest)
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CategoryForest {
    nodes: Vec<CategoryNode>,
}

impl CategoryForest {
    #[must_use]
    pub fn new(nodes: Vec<CategoryNode>) -> Self {
        Self { nodes }
    }

    /// Parse a forest from a category service JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let forest: Self = serde_json::from_str(payload)
            .map_err(|e| PickerError::parse("category payload", e))?;
        tracing::debug!(
            nodes = forest.node_count(),
            roots = forest.roots().count(),
            "Parsed category payload"
        );
        Ok(forest)
    }

    /// Load a forest from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path).map_err(|e| PickerError::io(path, e))?;
        Self::from_json(&payload)
    }

    /// All top-level payload entries, in payload order.
    #[must_use]
    pub fn nodes(&self) -> &[CategoryNode] {
        &self.nodes
    }

    /// Root categories: top-level entries with `parentId == 0`, in payload
    /// order.
    pub fn roots(&self) -> impl Iterator<Item = &CategoryNode> {
        self.nodes.iter().filter(|n| n.is_root())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes at any depth.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// First node with the given id, in depth-first payload order.
    ///
    /// Ids are unique on well-formed payloads, so at most one node matches;
    /// on malformed payloads the first match wins deterministically.
    #[must_use]
    pub fn find(&self, id: CategoryId) -> Option<&CategoryNode> {
        self.iter_depth_first().find(|n| n.id == id)
    }

    /// Ancestor chain from a root down to (and including) the target.
    ///
    /// Returns an empty path when the id is not present anywhere in the
    /// forest.
    #[must_use]
    pub fn ancestor_path(&self, target: CategoryId) -> Vec<&CategoryNode> {
        let mut path = Vec::new();
        find_path(&self.nodes, target, &mut path);
        path
    }

    /// Depth of a node below its root (`0` for roots), or `None` when the
    /// id is absent.
    #[must_use]
    pub fn depth_of(&self, id: CategoryId) -> Option<usize> {
        let path = self.ancestor_path(id);
        if path.is_empty() {
            None
        } else {
            Some(path.len() - 1)
        }
    }

    /// Visit every node depth-first, parents before children, siblings in
    /// payload order.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.nodes.iter().rev().collect(),
        }
    }
}

/// Depth-first iterator over a forest, yielding parents before children.
pub struct DepthFirst<'f> {
    stack: Vec<&'f CategoryNode>,
}

impl<'f> Iterator for DepthFirst<'f> {
    type Item = &'f CategoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children pushed reversed so the leftmost sibling pops first.
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Backtracking depth-first search. When the target is found, `path` holds
/// the full root-to-target chain and the function returns `true`; otherwise
/// `path` is left as it was.
fn find_path<'f>(
    nodes: &'f [CategoryNode],
    target: CategoryId,
    path: &mut Vec<&'f CategoryNode>,
) -> bool {
    for node in nodes {
        path.push(node);
        if node.id == target || find_path(&node.children, target, path) {
            return true;
        }
        path.pop();
    }
    false
}
