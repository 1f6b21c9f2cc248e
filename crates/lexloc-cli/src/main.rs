//! # lexloc CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers. Results go to stdout, logs to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lexloc_cli::check::{run_check, CheckArgs};
use lexloc_cli::context::{run_context, ContextArgs};
use lexloc_cli::resolve::{run_path, run_resolve, PathArgs, ResolveArgs};

/// Deterministic jurisdiction resolution over a spatial domain table.
#[derive(Parser, Debug)]
#[command(name = "lexloc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Without it, `RUST_LOG` is honoured when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the jurisdictions in force at one point.
    Resolve(ResolveArgs),

    /// Resolve the union of jurisdictions along a path of points.
    Path(PathArgs),

    /// Resolve and print the law context for an authority.
    Context(ContextArgs),

    /// Load and validate a world file.
    Check(CheckArgs),
}

fn env_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = env_filter(cli.verbose);
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "lexloc starting");

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Resolve(args) => run_resolve(args, &mut stdout),
        Commands::Path(args) => run_path(args, &mut stdout),
        Commands::Context(args) => run_context(args, &mut stdout),
        Commands::Check(args) => run_check(args, &mut stdout),
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
    use lexloc_core::Point3;

    #[test]
    fn parse_resolve() {
        let cli =
            Cli::try_parse_from(["lexloc", "resolve", "--world", "w.yaml", "--point", "1,2,3"])
                .unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.point, Point3::new(1, 2, 3));
        assert!(args.world.context.is_empty());
    }

    #[test]
    fn parse_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["lexloc", "resolve", "--world", "w.yaml", "--point", "-5,0,-1"])
                .unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.point, Point3::new(-5, 0, -1));
    }

    #[test]
    fn parse_context_list() {
        let cli = Cli::try_parse_from([
            "lexloc", "resolve", "--world", "w.yaml", "--point", "0,0,0", "--context", "7,3,9",
        ])
        .unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.world.context, vec![7, 3, 9]);
    }

    #[test]
    fn parse_path_with_repeated_points() {
        let cli = Cli::try_parse_from([
            "lexloc", "path", "--world", "w.yaml", "--point", "0,0,0", "--point", "4,0,0",
        ])
        .unwrap();
        let Commands::Path(args) = cli.command else {
            panic!("expected path");
        };
        assert_eq!(args.points, vec![Point3::ORIGIN, Point3::new(4, 0, 0)]);
    }

    #[test]
    fn path_requires_a_point() {
        assert!(Cli::try_parse_from(["lexloc", "path", "--world", "w.yaml"]).is_err());
    }

    #[test]
    fn parse_context_command() {
        let cli = Cli::try_parse_from([
            "lexloc",
            "-vv",
            "context",
            "--world",
            "w.yaml",
            "--point",
            "0,0,0",
            "--authority-id",
            "42",
            "--authority-kind",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Context(args) = cli.command else {
            panic!("expected context");
        };
        assert_eq!(args.authority_id, 42);
        assert_eq!(args.authority_kind, 3);
    }

    #[test]
    fn rejects_malformed_point() {
        assert!(
            Cli::try_parse_from(["lexloc", "resolve", "--world", "w.yaml", "--point", "1,2"])
                .is_err()
        );
    }

    #[test]
    fn parse_check_with_log_json() {
        let cli = Cli::try_parse_from(["lexloc", "--log-json", "check", "--world", "w.json"])
            .unwrap();
        assert!(cli.log_json);
        assert!(matches!(cli.command, Commands::Check(_)));
    }
}
