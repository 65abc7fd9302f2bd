//! Fate CLI - Command Line Dice Roller
//!
//! Operational entry point for the `fate_core` random number library.
//!
//! # Commands
//!
//! - `fate roll <NOTATION> [-n COUNT]` - Roll a notation such as `3d6^1:4`
//! - `fate histogram <NOTATION> [-t TRIALS] [-f table|json]` - Tally outcomes
//! - `fate check` - Print the resolved configuration
//!
//! Set `--seed` (or `FATE_SEED`) to make any run reproducible.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fate_core::Generator;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod histogram;

pub use error::{CliError, Result};

use config::FileConfig;

/// Seedable dice roller and distribution explorer
#[derive(Debug, Parser)]
#[command(name = "fate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./fate.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed, overriding the configuration file
    #[arg(short, long, global = true, env = "FATE_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Roll a notation and print each result
    Roll {
        /// Roll notation (e.g. 5, 3-7, 2d6, 4t2, 1d8^1:4)
        notation: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Roll a notation many times and print outcome frequencies
    Histogram {
        /// Roll notation (e.g. 5, 3-7, 2d6, 4t2, 1d8^1:4)
        notation: String,

        /// Number of samples (defaults to the configured trial count)
        #[arg(short, long)]
        trials: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print the resolved configuration
    Check,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = FileConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_seed_override(cli.seed)?;
    let mut rng = Generator::from_config(&config.generator);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Roll { notation, count } => {
            commands::roll::run(&notation, count, &mut rng, &mut out)
        }
        Commands::Histogram {
            notation,
            trials,
            format,
        } => commands::histogram::run(
            &notation,
            trials.unwrap_or(config.trials),
            &format,
            &mut rng,
            &mut out,
        ),
        Commands::Check => commands::check::run(&config, &rng, &mut out),
    }
    .context("command failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roll() {
        let cli = Cli::try_parse_from(["fate", "roll", "2d6", "-n", "3"]).unwrap();
        match cli.command {
            Commands::Roll { notation, count } => {
                assert_eq!(notation, "2d6");
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_histogram_defaults() {
        let cli = Cli::try_parse_from(["fate", "histogram", "4t2"]).unwrap();
        match cli.command {
            Commands::Histogram {
                notation,
                trials,
                format,
            } => {
                assert_eq!(notation, "4t2");
                assert_eq!(trials, None);
                assert_eq!(format, "table");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fate", "histogram", "1d4", "--seed", "42", "-f", "json", "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::try_parse_from(["fate", "--config", "dice.toml", "check"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("dice.toml")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["fate"]).is_err());
    }

    #[test]
    fn test_non_numeric_seed_is_an_error() {
        assert!(Cli::try_parse_from(["fate", "--seed", "abc", "check"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
