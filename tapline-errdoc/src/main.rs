//! Tapline SDK - error catalog tool
//!
//! Inspects and exports the SDK error catalog: lists codes, shows single
//! records, writes the machine-readable catalog consumed by the hosted
//! error-reference page, and renders the Markdown table for the developer
//! portal.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tapline_errors::export::export_catalog;
use tapline_errors::{ErrorCategory, ErrorCode, RESERVED_CODES, all_records, is_reserved_code};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tapline-errdoc")]
#[command(author, version, about = "Tapline SDK error catalog tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every catalogued error code
    List {
        /// Restrict the listing to one category
        #[arg(long, value_enum)]
        category: Option<CategoryFilter>,

        /// Emit JSON records instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single code in full
    Show {
        /// Numeric code, e.g. -10016
        #[arg(allow_hyphen_values = true)]
        code: i32,

        /// Emit the JSON record instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the machine-readable catalog and record schema
    Export {
        /// Output directory
        #[arg(long, default_value = "docs/errors")]
        out_dir: PathBuf,
    },

    /// Render the Markdown reference table for the developer portal
    Markdown,
}

/// Category filter for `list`, mirroring [`ErrorCategory`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryFilter {
    None,
    CardReader,
    CardSdk,
}

impl CategoryFilter {
    fn category(self) -> ErrorCategory {
        match self {
            CategoryFilter::None => ErrorCategory::None,
            CategoryFilter::CardReader => ErrorCategory::CardReader,
            CategoryFilter::CardSdk => ErrorCategory::CardSdk,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { category, json } => {
            cmd_list(category.map(CategoryFilter::category), json)
        }
        Commands::Show { code, json } => cmd_show(code, json),
        Commands::Export { out_dir } => cmd_export(&out_dir),
        Commands::Markdown => cmd_markdown(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list(category: Option<ErrorCategory>, json: bool) -> Result<()> {
    let codes: Vec<ErrorCode> = ErrorCode::all()
        .iter()
        .copied()
        .filter(|code| category.is_none_or(|category| code.category() == category))
        .collect();
    debug!(count = codes.len(), "listing catalogued codes");

    if json {
        let records: Vec<_> = all_records()
            .filter(|record| category.is_none_or(|category| record.category == category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("{:<8} {:<36} {:<12} MESSAGE", "CODE", "NAME", "CATEGORY");
    for code in &codes {
        println!(
            "{:<8} {:<36} {:<12} {}",
            code.code(),
            code.name(),
            code.category(),
            code.message()
        );
    }
    Ok(())
}

fn cmd_show(code: i32, json: bool) -> Result<()> {
    let Some(resolved) = ErrorCode::from_code(code) else {
        if is_reserved_code(code) {
            bail!("code {code} is reserved and has never been assigned");
        }
        bail!("code {code} is not defined in the SDK domain");
    };
    let record = resolved.record();

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", record.format_full());
    println!("Name:     {}", resolved.name());
    Ok(())
}

fn cmd_export(out_dir: &Path) -> Result<()> {
    let result = export_catalog(out_dir)
        .with_context(|| format!("failed to write catalog to {}", out_dir.display()))?;
    for file in &result.files {
        info!(file = %file.display(), "wrote");
    }
    println!(
        "Wrote {} files to {}",
        result.files.len(),
        result.output_dir.display()
    );
    Ok(())
}

fn cmd_markdown() -> Result<()> {
    println!("| Code | Name | Category | Message | User message |");
    println!("|------|------|----------|---------|--------------|");
    for code in ErrorCode::all() {
        println!(
            "| {} | `{}` | {} | {} | {} |",
            code.code(),
            code.name(),
            code.category(),
            code.message(),
            code.user_message().unwrap_or("-")
        );
    }
    println!();
    println!(
        "Codes {}..={} are reserved and never assigned.",
        RESERVED_CODES.start(),
        RESERVED_CODES.end()
    );
    Ok(())
}
