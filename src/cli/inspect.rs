//! Inspection command handlers (`roots`, `path`, `search`).
//!
//! Each handler loads a payload, runs the same library queries the picker
//! uses, and returns the process exit code: 0 on success, 1 when the lookup
//! found nothing.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::model::{CategoryForest, CategoryId};
use crate::picker::{BreadcrumbEntry, CategoryPicker};
use crate::search::prefix_search;

/// Shallow root summary for `roots --json`; subtrees stay out of the output.
#[derive(Serialize)]
struct RootRow {
    id: CategoryId,
    name: String,
    children: usize,
}

/// Run the roots command
pub fn run_roots(file: &Path, json: bool) -> Result<i32> {
    let forest = CategoryForest::from_path(file)?;
    let roots: Vec<_> = forest.roots().collect();

    if json {
        let rows: Vec<RootRow> = roots
            .iter()
            .map(|n| RootRow {
                id: n.id,
                name: n.name.clone(),
                children: n.children.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for node in &roots {
            println!(
                "{:>8}  {}  ({} subcategories)",
                node.id,
                node.name,
                node.children.len()
            );
        }
    }
    Ok(0)
}

/// Run the path command
pub fn run_path(file: &Path, id: CategoryId, json: bool) -> Result<i32> {
    let forest = CategoryForest::from_path(file)?;
    let label = CategoryPicker::breadcrumb_label(&forest, Some(id));

    if label.is_empty() {
        eprintln!("Category {id} not found");
        return Ok(1);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&label)?);
    } else {
        println!("{}", format_trail(&label));
    }
    Ok(0)
}

/// Run the search command
pub fn run_search(file: &Path, term: &str, json: bool) -> Result<i32> {
    let forest = CategoryForest::from_path(file)?;
    let matches = prefix_search(&forest, term);

    if matches.is_empty() {
        eprintln!("No categories matching \"{term}\"");
        return Ok(1);
    }

    if json {
        let trails: Vec<Vec<BreadcrumbEntry>> = matches
            .iter()
            .map(|n| CategoryPicker::breadcrumb_label(&forest, Some(n.id)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&trails)?);
    } else {
        for node in &matches {
            let label = CategoryPicker::breadcrumb_label(&forest, Some(node.id));
            println!("{:>8}  {}", node.id, format_trail(&label));
        }
    }
    Ok(0)
}

pub(crate) fn format_trail(entries: &[BreadcrumbEntry]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}
