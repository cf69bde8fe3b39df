//! **State machine and tree queries for a hierarchical category selector.**
//!
//! `category-picker` implements the selection logic behind a marketplace
//! category field: the seller opens a modal, drills down through the
//! taxonomy level by level along a breadcrumb, or searches the whole tree
//! by name prefix, and finally commits one category back to the form.
//!
//! The crate is deliberately UI-agnostic. It owns *what* the selector shows
//! and *how* it reacts to input; rendering, focus, and the actual timers
//! belong to the embedding form.
//!
//! ## Key Features
//!
//! - **Payload-faithful model**: [`CategoryNode`] deserializes straight from
//!   the category service JSON (camelCase, optional `children`, `parentId`
//!   `0` on roots).
//! - **Pure tree queries**: roots, id lookup, and ancestor-path
//!   reconstruction on [`CategoryForest`]; breadcrumbs are always derived
//!   from these, never cached.
//! - **Breadcrumb navigation**: [`NavigationState`] splices drill targets
//!   into the trail correctly whether the click came from the current
//!   panel, an earlier crumb's panel, or a stale panel.
//! - **Deferred transitions**: animated embedders split a drill into
//!   begin/complete; tokens from a closed or reopened session are discarded
//!   instead of clobbering the fresh one.
//! - **Prefix search**: case-insensitive, whole-forest, never substring.
//! - **Commit contract**: [`CategoryPicker`] fires the embedder's
//!   `on_change` callback exactly once per pick, then closes.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the payload types, the forest queries, payload
//!   validation, and the [`CategorySource`] availability states.
//! - **[`picker`]**: the [`CategoryPicker`] controller and its parts
//!   ([`NavigationState`], [`SearchState`], [`StatusMessage`]).
//! - **[`search`]**: the prefix-search engine shared by the picker and the
//!   CLI.
//! - **[`config`]**: presentational tunables with validation.
//!
//! ## Getting Started
//!
//! ```
//! use category_picker::{CategoryForest, CategoryPicker, CategorySource, PickerConfig, PickerEvent};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let forest = CategoryForest::from_json(r#"[
//!         {"id": 1, "name": "Bisutería", "parentId": 0, "children": [
//!             {"id": 11, "name": "Aretes", "parentId": 1}
//!         ]}
//!     ]"#)?;
//!     let source = CategorySource::ready(forest);
//!
//!     let mut picker = CategoryPicker::new(PickerConfig::default())
//!         .on_change(|id| println!("picked category {id}"));
//!
//!     picker.open(&source, None);
//!     picker.select_category(&source.forest, 1);
//!
//!     let event = picker.select_category(&source.forest, 11);
//!     assert_eq!(event, PickerEvent::Committed(11));
//!     assert!(!picker.is_open());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The crate also ships a small payload inspector (`roots`, `path`,
//! `search`, `validate`, `schema`). See the project README for usage.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod picker;
pub mod search;

// Re-export main types for convenience
pub use config::{ConfigError, PickerConfig, Validatable};
pub use error::{PickerError, Result};
pub use model::{
    validate_forest, Availability, CategoryForest, CategoryId, CategoryNode, CategorySource,
    ForestIssue, IssueKind, ROOT_PARENT,
};
pub use picker::{
    BreadcrumbEntry, CategoryPicker, NavAction, NavigationState, PendingNav, PickerEvent,
    SearchState, StatusMessage,
};
pub use search::prefix_search;
