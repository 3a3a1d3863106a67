//! CLI for the setlist sort-name mapping store.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use setlist_core::config;
use setlist_core::mapping_store::MappingStore;
use std::path::PathBuf;

use commands::{run_add, run_delete, run_link, run_list, run_sort_key, run_update};

/// Top-level CLI for the setlist catalog tools.
#[derive(Debug, Parser)]
#[command(name = "setlist")]
#[command(about = "Manage artist sort-name overrides for the setlist catalog", long_about = None)]
pub struct Cli {
    /// Mapping file to use instead of the configured one.
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add (or replace) the sort name for an artist.
    Add {
        /// Artist name exactly as it appears in the catalog.
        artist: String,
        /// Key the artist should sort under.
        sort_name: String,
    },

    /// List all sort-name overrides.
    List,

    /// Change an artist's sort name; adds it if not present yet.
    Update {
        artist: String,
        sort_name: String,
    },

    /// Remove an artist's sort-name override.
    Delete {
        artist: String,
    },

    /// Show the sort key generated for a name.
    SortKey {
        name: String,
    },

    /// Print a stream URL that starts at the given timestamp (H:MM:SS or M:SS).
    Link {
        url: String,
        timestamp: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = MappingStore::new(cfg.mapping_path(cli.file.as_deref())?);
        tracing::debug!(path = %store.path().display(), "using mapping file");

        match cli.command {
            CliCommand::Add { artist, sort_name } => run_add(&store, &artist, &sort_name)?,
            CliCommand::List => run_list(&store)?,
            CliCommand::Update { artist, sort_name } => {
                run_update(&store, &artist, &sort_name)?;
            }
            CliCommand::Delete { artist } => run_delete(&store, &artist)?,
            CliCommand::SortKey { name } => run_sort_key(&cfg, &store, &name),
            CliCommand::Link { url, timestamp } => run_link(&url, &timestamp),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
