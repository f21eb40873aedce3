//! # cesr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cesr_cli::check::{run_check, CheckArgs};
use cesr_cli::generate::{run_generate, GenerateArgs};
use cesr_cli::list::{run_list, ListArgs};
use cesr_cli::resolve_output_dir;

/// CESR schema compiler
///
/// Compiles the CESR code tables into the names, codex, sizes and
/// counter-state JSON artifacts consumed by downstream code generators.
#[derive(Parser, Debug)]
#[command(name = "cesr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the generated artifacts (defaults to the current directory).
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the codex source and write all four artifacts.
    Generate(GenerateArgs),

    /// Verify the artifacts on disk match a fresh compilation.
    Check(CheckArgs),

    /// Summarise the codex families and size tables.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let output_dir = resolve_output_dir(cli.output_dir.as_deref(), &cwd);
    tracing::debug!(output_dir = %output_dir.display(), "resolved output directory");

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, &output_dir),
        Commands::Check(args) => run_check(&args, &output_dir),
        Commands::List(args) => run_list(&args, &output_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_generate() {
        let cli = Cli::try_parse_from(["cesr", "generate"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
        assert_eq!(cli.verbose, 0);
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn cli_parse_generate_quiet() {
        let cli = Cli::try_parse_from(["cesr", "generate", "--quiet"]).unwrap();
        if let Commands::Generate(args) = cli.command {
            assert!(args.quiet);
        } else {
            panic!("expected generate");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cesr", "check", "-vv", "--output-dir", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(_)));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output_dir, Some(PathBuf::from("schema")));
    }

    #[test]
    fn cli_parse_list_with_codex() {
        let cli = Cli::try_parse_from(["cesr", "list", "--codex", "Counter"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.codex.as_deref(), Some("Counter"));
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["cesr", "emit"]).is_err());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["cesr"]).is_err());
    }
}
