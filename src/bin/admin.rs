//! CLI administration tool for gene-dashboard.
//!
//! Checks the storage bucket against the asset catalogue, signs single
//! objects, and shows how identifier input is normalized, without starting
//! the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Check that every figure, video and the logo exist in the bucket
//! cargo run --bin admin -- assets check
//!
//! # Print a signed URL for one object
//! cargo run --bin admin -- assets sign Images/1.png --ttl 600
//!
//! # Show the canonical form of raw identifier input
//! cargo run --bin admin -- ids normalize "Ca_00001, Ca_00002 Ca_00001"
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `GCS_BUCKET`, `GCS_ENDPOINT`, `GCS_HMAC_ACCESS_ID`,
//! `GCS_HMAC_SECRET`. The `ids` commands need none of them.

use gene_dashboard::config::{self, Config};
use gene_dashboard::domain::assets::all_objects;
use gene_dashboard::domain::identifiers::{IdentifierKind, IdentifierSet};
use gene_dashboard::domain::storage::{ObjectStore, SignedMethod};
use gene_dashboard::server::build_object_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing gene-dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Storage asset operations
    Assets {
        #[command(subcommand)]
        action: AssetAction,
    },

    /// Identifier tools
    Ids {
        #[command(subcommand)]
        action: IdsAction,
    },
}

/// Storage asset subcommands.
#[derive(Subcommand)]
enum AssetAction {
    /// Check that every catalogued object exists
    Check,

    /// Print a signed GET URL for one object
    Sign {
        /// Object name (e.g., "Images/1.png")
        object: String,

        /// URL lifetime in seconds
        #[arg(short, long, default_value_t = 3600)]
        ttl: u64,
    },
}

/// Identifier subcommands.
#[derive(Subcommand)]
enum IdsAction {
    /// Print the canonical comma-separated form of raw input
    Normalize {
        /// Raw input, e.g. "Ca_00001, Ca_00002"
        raw: String,

        /// Identifier kind, used for the label only
        #[arg(short, long, value_enum, default_value_t = KindArg::Gene)]
        kind: KindArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Gene,
    Locus,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Gene => IdentifierKind::Gene,
            KindArg::Locus => IdentifierKind::Locus,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assets { action } => {
            let config = config::load_from_env().context("Failed to load configuration")?;
            handle_asset_action(action, &config).await?
        }
        Commands::Ids { action } => handle_ids_action(action),
    }

    Ok(())
}

/// Dispatches asset commands.
async fn handle_asset_action(action: AssetAction, config: &Config) -> Result<()> {
    if !config.is_storage_enabled() {
        anyhow::bail!("Storage is disabled: set GCS_HMAC_ACCESS_ID and GCS_HMAC_SECRET");
    }

    let store = build_object_store(config);

    match action {
        AssetAction::Check => check_assets(store, &config.storage_bucket).await,
        AssetAction::Sign { object, ttl } => sign_object(store, &object, ttl),
    }
}

/// Checks every catalogued object and prints a per-object report.
async fn check_assets(store: Arc<dyn ObjectStore>, bucket: &str) -> Result<()> {
    println!("{}", "Asset check".bright_blue().bold());
    println!("  Bucket: {}", bucket.cyan());
    println!();

    let objects = all_objects();
    let mut missing = 0usize;

    for object in &objects {
        match store.exists(object).await {
            Ok(true) => println!("  {} {}", "ok     ".green(), object),
            Ok(false) => {
                missing += 1;
                println!("  {} {}", "missing".yellow(), object);
            }
            Err(e) => {
                missing += 1;
                println!("  {} {} ({})", "error  ".red(), object, e);
            }
        }
    }

    println!();
    if missing == 0 {
        println!(
            "{}",
            format!("All {} objects found", objects.len()).green().bold()
        );
        Ok(())
    } else {
        anyhow::bail!("{} of {} objects unavailable", missing, objects.len())
    }
}

/// Prints a signed GET URL for `object`.
fn sign_object(store: Arc<dyn ObjectStore>, object: &str, ttl: u64) -> Result<()> {
    let url = store
        .signed_url(object, Duration::from_secs(ttl), SignedMethod::Get)
        .with_context(|| format!("Failed to sign {}", object))?;

    println!("{}", url);
    Ok(())
}

/// Dispatches identifier commands.
fn handle_ids_action(action: IdsAction) {
    match action {
        IdsAction::Normalize { raw, kind } => {
            let set = IdentifierSet::parse(kind.into(), &raw);

            if set.is_empty() {
                println!("{}", format!("No {} found in input", set.kind()).yellow());
                return;
            }

            println!(
                "{} ({} unique): {}",
                set.kind().label().bright_white().bold(),
                set.len(),
                set.canonical().cyan()
            );
        }
    }
}
