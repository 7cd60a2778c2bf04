//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for filterbar using the `clap` crate.
//! Every command works on a query string and a catalog file, so the filter
//! bar state of a URL can be inspected and edited from a shell.
//!
//! # Commands
//!
//! - **search**: List catalog definitions matching a keyword
//! - **decode**: Show the filters and pagination a query string holds
//! - **apply**: Apply filter mutations and print the resulting query string
//! - **params**: Print the flat data-fetching parameters as JSON
//! - **config**: Show the effective configuration
//! - **completions**: Generate shell completions
//!
//! # Examples
//!
//! ```
//! use filterbar::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_iter(["filterbar", "decode", "pageNum=2", "--catalog", "jobs.toml"]);
//! assert!(matches!(cli.command, Commands::Decode { .. }));
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::str::FromStr;

/// One `--set id=value` mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Definition id
    pub option_id: String,
    /// Raw value, parsed according to the definition kind
    pub value: String,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (option_id, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
        let option_id = option_id.trim();
        if option_id.is_empty() {
            return Err(format!("missing filter id in '{s}'"));
        }
        Ok(Self {
            option_id: option_id.to_string(),
            value: value.to_string(),
        })
    }
}

/// Catalog file argument shared by the query commands
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// TOML file with `[[filter]]` definitions
    #[arg(short = 'C', long = "catalog", value_name = "FILE")]
    pub catalog: PathBuf,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "filterbar")]
#[command(about = "Inspect and edit filter bar state stored in URLs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this config file instead of the default one
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List catalog definitions whose label matches a keyword
    #[command(visible_alias = "s")]
    Search {
        /// Keyword (case-insensitive substring of the label)
        #[arg(value_name = "KEYWORD", default_value = "")]
        keyword: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Decode the filters and pagination of a query string
    #[command(visible_alias = "d")]
    Decode {
        /// Query string, with or without a leading '?'
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print the decoded state as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Apply filter mutations to a query string and print the result
    #[command(visible_alias = "a")]
    Apply {
        /// Query string, with or without a leading '?'
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,

        /// Commit a filter (multi-choice: a,b; date: YYYY-MM-DD; range: START..END)
        #[arg(short = 's', long = "set", value_name = "ID=VALUE")]
        set: Vec<Assignment>,

        /// Remove a filter
        #[arg(short = 'r', long = "remove", value_name = "ID")]
        remove: Vec<String>,

        /// Remove every filter first
        #[arg(long = "reset")]
        reset: bool,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Print the flat filter parameters of a query string as JSON
    #[command(visible_alias = "p")]
    Params {
        /// Query string, with or without a leading '?'
        #[arg(value_name = "QUERY")]
        query: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the default config file path
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    pub fn parse_from_iter<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Log filter directive implied by `--verbose`/`--quiet`
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}
