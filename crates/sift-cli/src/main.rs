mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::SiftConfig;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about = "Sift CLI - match URL paths against patterns and diff JSON records", long_about = None)]
struct Cli {
    /// Config file (defaults to ./sift.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract named parameters from a path
    Match {
        /// Concrete path, e.g. users/42/tabs/billing
        path: String,

        /// Pattern with parameter segments, e.g. users/:id/tabs/:tab
        pattern: String,

        /// Character that starts a parameter segment
        #[arg(short, long)]
        marker: Option<char>,

        /// Exit with status 1 when the path does not match
        #[arg(short, long)]
        strict: bool,
    },

    /// Report fields that changed between two JSON objects
    Diff {
        /// JSON file holding the record before the update
        source: PathBuf,

        /// JSON file holding the record after the update
        target: PathBuf,

        /// How nested arrays and objects are compared
        #[arg(short, long)]
        equality: Option<EqualityMode>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EqualityMode {
    /// Scalars by value, arrays and objects always differ (default)
    Strict,
    /// Arrays and objects compared by contents
    Structural,
}

impl From<EqualityMode> for sift_diff::Equality {
    fn from(mode: EqualityMode) -> Self {
        match mode {
            EqualityMode::Strict => sift_diff::Equality::Strict,
            EqualityMode::Structural => sift_diff::Equality::Structural,
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Command-line flags win over values from the config file
fn apply_overrides(config: &mut SiftConfig, command: &Commands) {
    match command {
        Commands::Match {
            marker: Some(marker),
            ..
        } => {
            config.router.param_marker = *marker;
        }
        Commands::Diff {
            equality: Some(equality),
            ..
        } => {
            config.diff.equality = (*equality).into();
        }
        _ => {}
    }
}

/// Status 1 when a strict match fails
fn exit_code(matched: bool) -> ExitCode {
    if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Execute a parsed command line against a resolved config
fn run(cli: Cli, mut config: SiftConfig) -> Result<ExitCode> {
    apply_overrides(&mut config, &cli.command);

    let matched = match cli.command {
        Commands::Match {
            path,
            pattern,
            strict,
            ..
        } => commands::matching::execute(&path, &pattern, &config.router, strict, cli.pretty)?,
        Commands::Diff { source, target, .. } => {
            commands::diff::execute(&source, &target, &config.diff, cli.pretty)?;
            true
        }
    };

    Ok(exit_code(matched))
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let current_dir = std::env::current_dir()?;
    let config = SiftConfig::load(cli.config.as_deref(), &current_dir)?;

    // Execute command
    run(cli, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_diff::Equality;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sift").chain(args.iter().copied())).unwrap()
    }

    fn file_config(dir: &tempfile::TempDir) -> SiftConfig {
        std::fs::write(
            dir.path().join(config::DEFAULT_CONFIG_FILE),
            "[router]\nparam_marker = \"$\"\n\n[diff]\nequality = \"structural\"\n",
        )
        .unwrap();
        SiftConfig::load(None, dir.path()).unwrap()
    }

    #[test]
    fn test_marker_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = file_config(&dir);
        assert_eq!(config.router.param_marker, '$');

        let cli = parse(&["match", "users/1", "users/@id", "--marker", "@"]);
        apply_overrides(&mut config, &cli.command);

        assert_eq!(config.router.param_marker, '@');
        assert_eq!(config.diff.equality, Equality::Structural);
    }

    #[test]
    fn test_equality_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = file_config(&dir);

        let cli = parse(&["diff", "a.json", "b.json", "--equality", "strict"]);
        apply_overrides(&mut config, &cli.command);

        assert_eq!(config.diff.equality, Equality::Strict);
        assert_eq!(config.router.param_marker, '$');
    }

    #[test]
    fn test_config_file_value_kept_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = file_config(&dir);

        let cli = parse(&["match", "users/1", "users/$id"]);
        apply_overrides(&mut config, &cli.command);

        assert_eq!(config.router.param_marker, '$');
    }

    #[test]
    fn test_strict_no_match_exits_with_failure() {
        let cli = parse(&["match", "teams/1", "users/:id", "--strict"]);
        assert_eq!(run(cli, SiftConfig::default()).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_strict_match_exits_with_success() {
        let cli = parse(&["match", "users/1", "users/:id", "--strict"]);
        assert_eq!(run(cli, SiftConfig::default()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_lenient_no_match_still_succeeds() {
        let cli = parse(&["match", "teams/1", "users/:id"]);
        assert_eq!(run(cli, SiftConfig::default()).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_strict_uses_overridden_marker() {
        let cli = parse(&["match", "users/1", "users/@id", "--strict", "--marker", "@"]);
        assert_eq!(run(cli, SiftConfig::default()).unwrap(), ExitCode::SUCCESS);
    }
}
