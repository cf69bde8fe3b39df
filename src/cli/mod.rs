//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for one subcommand
//! and returns the process exit code; argument parsing stays in the binary.

mod inspect;
mod validate;

pub use inspect::{run_path, run_roots, run_search};
pub use validate::run_validate;
