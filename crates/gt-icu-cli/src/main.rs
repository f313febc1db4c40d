//! gt-icu CLI entry point.
//!
//! Provides command-line tools for messages carrying variable placeholders:
//! - `gt-icu declare` - Build a placeholder from a value
//! - `gt-icu index` / `extract` - Split a message into a template and values
//! - `gt-icu decode` / `condense` - Inline or reduce placeholders
//! - `gt-icu check` - Validate syntax and lint placeholders
//! - `gt-icu parse` - Dump the message AST as JSON

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_condense, run_decode, run_declare, run_extract, run_index, run_parse,
    CheckArgs, DeclareArgs, ExtractArgs, InputArgs,
};
use miette::MietteHandlerOpts;
use output::MessageDiagnostic;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "GT_ICU_LOG";

/// Variable placeholder tools for ICU messages.
#[derive(Debug, Parser)]
#[command(name = "gt-icu")]
#[command(about = "Variable placeholder tools for ICU messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    #[arg(env = "GT_ICU_COLOR")]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a placeholder carrying a value
    Declare(DeclareArgs),
    /// Number placeholders and strip their values
    Index(InputArgs),
    /// Print the value of every placeholder
    Extract(ExtractArgs),
    /// Replace placeholders with their values
    Decode(InputArgs),
    /// Reduce numbered placeholders to bare arguments
    Condense(InputArgs),
    /// Check message syntax and lint placeholders
    Check(CheckArgs),
    /// Print the message AST as JSON
    Parse(InputArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `GT_ICU_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "gt_icu=debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .without_time()
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Declare(args) => run_declare(args),
        Commands::Index(args) => run_index(args),
        Commands::Extract(args) => run_extract(args),
        Commands::Decode(args) => run_decode(args),
        Commands::Condense(args) => run_condense(args),
        Commands::Check(args) => run_check(args),
        Commands::Parse(args) => run_parse(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            if e.downcast_ref::<MessageDiagnostic>().is_some() {
                exit(exitcode::DATAERR);
            }
            exit(exitcode::SOFTWARE);
        }
    }
}
