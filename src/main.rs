//! Filterbar CLI application entry point
//!
//! Inspects and edits filter bar state stored in URL query strings, using a
//! catalog of filter definitions loaded from TOML.
//!
//! # Usage
//!
//! ```bash
//! # Which filters does this link carry?
//! filterbar decode '?filters={"status":"running"}&pageNum=2' -C jobs.toml
//!
//! # Add and remove filters, printing the new query string
//! filterbar apply '?pageNum=5' -C jobs.toml --set status=running --set tags=a,b --remove name
//!
//! # Flat parameters for a backend request
//! filterbar params "$QUERY" -C jobs.toml
//!
//! # Search the catalog
//! filterbar search stat -C jobs.toml
//! ```
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/filterbar/config.toml` on Linux) or from `--config <file>`.
//! Log output is controlled by `FILTERBAR_LOG` (an `EnvFilter` directive)
//! or `-v`.

use clap::CommandFactory;
use filterbar::{
    FilterbarError,
    cli::{Cli, Commands, ConfigCommands},
    commands::{self, apply::Mutations},
    completions,
    config::FilterbarConfig,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, FilterbarError>;

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "FILTERBAR_LOG";

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose > 0 || cli.quiet {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Handle config subcommands
///
/// # Errors
/// Returns `FilterbarError::ConfigError` if the path cannot be determined or
/// the configuration cannot be rendered.
fn handle_config_command(config: &FilterbarConfig, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml_string()?),
        ConfigCommands::Path => println!("{}", FilterbarConfig::config_path()?.display()),
    }
    Ok(())
}

fn main() -> Result<()> {
    #[cfg(feature = "dynamic-completions")]
    completions::init_dynamic_completions(Cli::command);

    let cli = Cli::parse_args();
    init_tracing(&cli);

    let config = FilterbarConfig::load(cli.config.as_deref())?;
    let quiet = cli.quiet;

    match &cli.command {
        Commands::Search { keyword, catalog_args } => {
            let catalog = commands::load_catalog(catalog_args)?;
            commands::search(&catalog, keyword, quiet)?;
        }
        Commands::Decode { query, json, catalog_args } => {
            let catalog = commands::load_catalog(catalog_args)?;
            commands::decode(catalog, query, *json, &config, quiet)?;
        }
        Commands::Apply { query, set, remove, reset, catalog_args } => {
            let catalog = commands::load_catalog(catalog_args)?;
            let mutations = Mutations {
                reset: *reset,
                remove,
                set,
            };
            commands::apply(catalog, query, &mutations, &config, quiet)?;
        }
        Commands::Params { query, catalog_args } => {
            let catalog = commands::load_catalog(catalog_args)?;
            commands::params(catalog, query, &config, quiet)?;
        }
        Commands::Config { command } => handle_config_command(&config, *command)?,
        Commands::Completions { shell } => {
            completions::generate_static(*shell, &mut Cli::command(), &mut std::io::stdout());
        }
    }

    Ok(())
}
