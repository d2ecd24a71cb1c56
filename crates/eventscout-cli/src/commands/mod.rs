pub mod list;
pub mod mcp;
pub mod search;
pub mod show;
pub mod stats;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use eventscout_core::config::ScoutConfig;
use eventscout_core::storage::JsonFileStore;

#[derive(Subcommand)]
pub enum Commands {
    /// Search events by free text (most relevant first)
    Search(search::SearchArgs),
    /// List every event in date order
    List(list::ListArgs),
    /// Show details of a specific event
    Show(show::ShowArgs),
    /// Show aggregate statistics across all events
    Stats,
    /// Serve event search over MCP on stdio
    Mcp,
    /// Print version information
    Version,
}

/// Where to find the event store.
#[derive(Args)]
pub struct StoreArgs {
    /// Path to the JSON event store (overrides the settings file)
    #[arg(long, global = true, env = "EVENTSCOUT_STORE")]
    pub store: Option<PathBuf>,

    /// Settings file (default: ./.eventscout.json if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    pub fn settings(&self) -> Result<ScoutConfig> {
        let mut settings = match &self.config {
            Some(path) => ScoutConfig::load(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?,
            None => ScoutConfig::discover(&std::env::current_dir()?)
                .context("Failed to read settings")?,
        };
        if let Some(store) = &self.store {
            settings.store = store.clone();
        }
        Ok(settings)
    }

    pub fn open(&self) -> Result<(JsonFileStore, ScoutConfig)> {
        let settings = self.settings()?;
        let store = JsonFileStore::open(&settings.store).with_context(|| {
            format!("Failed to open event store {}", settings.store.display())
        })?;
        Ok((store, settings))
    }
}
