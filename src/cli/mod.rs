pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::FeedConfig;

#[derive(Parser, Debug)]
#[command(name = "cvefeed")]
#[command(about = "Browse the latest CVE advisories in the terminal", long_about = None)]
pub struct Cli {
    /// Feed URL (overrides the config file)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// HTTP timeout in seconds (at least 1)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Fail on the first malformed feed item instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Browse advisories interactively (default)
    Browse,
    /// Print advisories and exit
    List,
}

impl Cli {
    /// Overlay command-line flags on the loaded feed settings.
    pub fn apply(&self, feed: &mut FeedConfig) {
        if let Some(url) = &self.url {
            feed.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            feed.timeout_secs = timeout;
        }
        if self.strict {
            feed.strict = true;
        }
    }

    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Browse)
    }
}
