//! Command-line interface for Folio.
//!
//! # Commands
//!
//! - `build` - render every page into the output directory
//! - `check` - load each content resource and report what is available
//! - `serve` - development server for a built site
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - errors only
//! - `--config` / `-c` - path to `folio.toml` (also `FOLIO_CONFIG`)
//!
//! `RUST_LOG`, when set, takes precedence over both flags.

mod build;
mod check;
mod serve;

pub use check::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;

/// Settings derived from the global flags, applied before a command runs.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = Some(level.to_string());
        self
    }

    /// Install the global tracing subscriber. Later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("info"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Load `folio.toml` per the configured lookup order.
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        SiteConfig::load(self.config_path.as_deref())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Folio - build and preview a content-driven personal website",
    version,
    long_about = "Folio renders a personal website from JSON content files (profile, articles, experience, projects) and serves it locally for preview."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to folio.toml
    #[arg(short, long, global = true, env = crate::constants::CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every page into the output directory
    Build(build::BuildCommand),

    /// Check that the content resources load
    Check(check::CheckCommand),

    /// Serve a built site for local preview
    Serve(serve::ServeCommand),
}

impl Cli {
    /// Run the selected command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
        }
    }

    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let site = config.load_site_config()?;

        match self.command {
            Commands::Build(cmd) => cmd.execute(&site).await,
            Commands::Check(cmd) => cmd.execute(&site).await,
            Commands::Serve(cmd) => cmd.execute(&site).await,
        }
    }
}
