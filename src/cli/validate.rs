//! Validate command handler.
//!
//! Checks the payload invariants the picker relies on, for gating a payload
//! in CI before it ships to the storefront.

use anyhow::Result;
use std::path::Path;

use crate::model::{validate_forest, CategoryForest};

/// Run the validate command
pub fn run_validate(file: &Path) -> Result<i32> {
    let forest = CategoryForest::from_path(file)?;
    let issues = validate_forest(&forest);

    if issues.is_empty() {
        println!(
            "OK: {} categories across {} roots, no invariant violations",
            forest.node_count(),
            forest.roots().count()
        );
        return Ok(0);
    }

    for issue in &issues {
        println!("{issue}");
    }
    println!();
    println!("{} violation(s) found", issues.len());
    Ok(1)
}
