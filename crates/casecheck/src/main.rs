//! casecheck - Java identifier naming-convention checker.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod check;
mod report;

#[derive(Parser)]
#[command(name = "casecheck")]
#[command(about = "Check Java identifiers against naming conventions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check Java files for naming convention violations
    Check(CheckArgs),

    /// Print the casing style of each name
    Classify {
        /// Identifiers to classify
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Files or directories to check (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Path to casecheck.toml (searched upwards from the current directory if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the expected style for a role, e.g. `method=camelCase` or `class=off`
    #[arg(long = "rule", value_name = "ROLE=STYLE")]
    rules: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Process outcome, mapped to the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitStatus {
    /// No violations.
    Clean,
    /// At least one violation.
    Violations,
    /// Bad arguments, bad config or unreadable input.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Clean => ExitCode::SUCCESS,
            ExitStatus::Violations => ExitCode::from(1),
            ExitStatus::Failure => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitStatus::Failure.into()
        }
    }
}

fn run(cli: Cli) -> Result<ExitStatus> {
    match cli.command {
        Command::Check(args) => check::run(&args),
        Command::Classify { names } => {
            report::print_classifications(&names)?;
            Ok(ExitStatus::Clean)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` picks the level unless `--verbose` is set.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_args() {
        let cli = Cli::try_parse_from([
            "casecheck",
            "check",
            "src",
            "--rule",
            "method=snake_case",
            "--rule",
            "class=off",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();

        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.paths, vec![PathBuf::from("src")]);
        assert_eq!(args.rules, vec!["method=snake_case", "class=off"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["casecheck", "classify", "fooBar", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_classify_requires_names() {
        assert!(Cli::try_parse_from(["casecheck", "classify"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["casecheck", "check", "--format", "xml"]).is_err());
    }
}
