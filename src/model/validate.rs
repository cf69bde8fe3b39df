//! Offline invariant checks for category payloads.
//!
//! The picker itself never validates its input: it is a frontend widget and
//! degrades to inert behavior on malformed data. These checks exist for the
//! CLI and for backends that want to gate a payload before shipping it to
//! the storefront.
//!
//! Acyclicity needs no check here: the nested payload representation cannot
//! express a cycle.

use std::fmt;

use indexmap::IndexMap;

use super::category::{CategoryId, CategoryNode};
use super::forest::CategoryForest;

/// A single invariant violation found in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for ForestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// Classification of payload invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The same id appears on more than one node
    DuplicateId,
    /// A child's `parentId` does not match the node it is nested under
    ParentMismatch,
    /// A top-level node carries a nonzero `parentId`
    StrayRoot,
}

impl IssueKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DuplicateId => "duplicate-id",
            Self::ParentMismatch => "parent-mismatch",
            Self::StrayRoot => "stray-root",
        }
    }
}

/// Check the payload invariants the picker relies on.
///
/// Returns one issue per violation, in deterministic first-seen order, so
/// two runs over the same payload always report identically.
#[must_use]
pub fn validate_forest(forest: &CategoryForest) -> Vec<ForestIssue> {
    let mut issues = Vec::new();

    // Occurrence counts keyed in depth-first first-seen order.
    let mut seen: IndexMap<CategoryId, usize> = IndexMap::new();
    for node in forest.iter_depth_first() {
        *seen.entry(node.id).or_insert(0) += 1;
    }
    for (id, count) in &seen {
        if *count > 1 {
            issues.push(ForestIssue {
                kind: IssueKind::DuplicateId,
                message: format!(
                    "id {id} appears {count} times; ids must be unique across the forest"
                ),
            });
        }
    }

    for node in forest.nodes() {
        if !node.is_root() {
            issues.push(ForestIssue {
                kind: IssueKind::StrayRoot,
                message: format!(
                    "top-level node {} (\"{}\") carries parentId {}; roots must use 0",
                    node.id, node.name, node.parent_id
                ),
            });
        }
        check_linkage(node, &mut issues);
    }

    issues
}

fn check_linkage(parent: &CategoryNode, issues: &mut Vec<ForestIssue>) {
    for child in &parent.children {
        if child.parent_id != parent.id {
            issues.push(ForestIssue {
                kind: IssueKind::ParentMismatch,
                message: format!(
                    "node {} (\"{}\") is nested under {} but carries parentId {}",
                    child.id, child.name, parent.id, child.parent_id
                ),
            });
        }
        check_linkage(child, issues);
    }
}
