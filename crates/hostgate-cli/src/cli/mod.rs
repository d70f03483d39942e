//! CLI for the hostgate mirror policy.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hostgate_core::config::{self, HostgateConfig};
use hostgate_core::host_policy::HostDenylist;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_check, run_hostname, run_list, run_pick};

/// Top-level CLI for hostgate.
#[derive(Debug, Parser)]
#[command(name = "hostgate")]
#[command(about = "hostgate: choose usable media mirrors using a host denylist", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/hostgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the lowercased hostname of a URL ("-" if it has none).
    Hostname {
        /// URL to inspect.
        url: String,
    },

    /// Report whether each URL is denied and by which entry.
    Check {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the preferred mirror from an ordered candidate list.
    Pick {
        /// Candidate URLs, most preferred first.
        #[arg(required_unless_present = "json")]
        urls: Vec<String>,

        /// Read the candidate list as JSON from FILE ("-" for stdin).
        #[arg(long, value_name = "FILE", conflicts_with = "urls")]
        json: Option<String>,
    },

    /// Print the active denylist, one entry per line.
    List,
}

fn load_config(path: Option<&PathBuf>) -> Result<HostgateConfig> {
    match path {
        Some(p) => config::load_from_path(p)
            .with_context(|| format!("load config override: {}", p.display())),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let denylist = HostDenylist::from_config(&cfg.denylist)?;

        let code = match cli.command {
            CliCommand::Hostname { url } => run_hostname(&url),
            CliCommand::Check { urls } => run_check(&denylist, &urls),
            CliCommand::Pick { urls, json } => run_pick(&denylist, &urls, json.as_deref())?,
            CliCommand::List => run_list(&denylist),
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
