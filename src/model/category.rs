//! Core category payload types.
//!
//! The category service delivers the taxonomy as a nested JSON tree:
//! `children` is omitted (or empty) on leaf categories, and `parentId` is
//! `0` on roots. These types mirror that payload exactly so a forest can be
//! deserialized straight from the service response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a category, unique across the whole forest.
pub type CategoryId = u64;

/// Sentinel `parentId` value marking a root category.
pub const ROOT_PARENT: CategoryId = 0;

/// A single category in the marketplace taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Globally unique id
    pub id: CategoryId,
    /// Display name, e.g. "Bisutería"
    pub name: String,
    /// Parent id; `0` marks a root
    #[serde(default)]
    pub parent_id: CategoryId,
    /// Child categories; absent in the payload means leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// A leaf has no children. An absent `children` field and an empty one
    /// are the same state; picking a leaf is a terminal action.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node sits at the top of the taxonomy.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT
    }

    /// Parent id, or `None` for roots.
    #[must_use]
    pub fn parent(&self) -> Option<CategoryId> {
        if self.is_root() {
            None
        } else {
            Some(self.parent_id)
        }
    }

    /// Direct child with the given id, if any.
    #[must_use]
    pub fn child(&self, id: CategoryId) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Whether `id` is a direct child of this node.
    #[must_use]
    pub fn has_child(&self, id: CategoryId) -> bool {
        self.child(id).is_some()
    }
}
