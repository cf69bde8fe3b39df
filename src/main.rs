//! category-picker: inspect and validate marketplace category payloads
//!
//! The binary exposes the library's tree queries for payload debugging and
//! CI gating; the picker state machine itself is a library concern.

use anyhow::Result;
use category_picker::{cli, config, model};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "category-picker")]
#[command(version)]
#[command(about = "Inspect and validate hierarchical category payloads", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Not found / no matches / invariant violations

EXAMPLES:
    # List root categories
    category-picker roots categories.json

    # Full breadcrumb trail for a category id
    category-picker path categories.json 114

    # Case-insensitive prefix search, one trail per match
    category-picker search categories.json cer

    # Gate a payload in CI before it ships to the storefront
    category-picker validate categories.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List root categories
    Roots {
        /// Category payload (JSON)
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the full ancestor path of a category
    Path {
        /// Category payload (JSON)
        file: PathBuf,

        /// Category id to resolve
        id: u64,

        /// Emit JSON instead of a trail string
        #[arg(long)]
        json: bool,
    },

    /// Prefix-search category names across the whole forest
    Search {
        /// Category payload (JSON)
        file: PathBuf,

        /// Search term (case-insensitive prefix)
        term: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check payload invariants (unique ids, parent linkage)
    Validate {
        /// Category payload (JSON)
        file: PathBuf,
    },

    /// Generate JSON Schema for the payload or the picker config
    Schema {
        /// Emit the picker config schema instead of the payload schema
        #[arg(long)]
        config: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let exit_code = match cli.command {
        Commands::Roots { file, json } => cli::run_roots(&file, json)?,
        Commands::Path { file, id, json } => cli::run_path(&file, id, json)?,
        Commands::Search { file, term, json } => cli::run_search(&file, &term, json)?,
        Commands::Validate { file } => cli::run_validate(&file)?,
        Commands::Schema { config } => {
            if config {
                println!("{}", config::generate_config_schema());
            } else {
                println!("{}", model::generate_payload_schema());
            }
            0
        }
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "category-picker",
                &mut io::stdout(),
            );
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
