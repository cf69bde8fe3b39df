//! Category payload model and pure tree queries.
//!
//! This module defines the taxonomy data structures shared by the picker
//! state machine, the search engine, and the CLI. Everything here is
//! read-only with respect to the forest: navigation and search borrow nodes,
//! they never copy or mutate the tree.

mod category;
mod forest;
mod source;
mod validate;

pub use category::*;
pub use forest::*;
pub use source::*;
pub use validate::*;

/// Generate the JSON Schema for the category payload.
///
/// Useful for validating service responses in CI or editor tooling.
#[must_use]
pub fn generate_payload_schema() -> String {
    let schema = schemars::schema_for!(Vec<CategoryNode>);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_schema_mentions_category_fields() {
        let schema = generate_payload_schema();
        assert!(schema.contains("parentId"));
        assert!(schema.contains("children"));
    }
}
