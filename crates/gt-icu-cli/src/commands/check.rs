//! Implementation of the `gt-icu check` command.

use gt_icu::lint_vars;
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::input::InputArgs;
use crate::output::WarningDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any placeholder warning is reported
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for a check.
#[derive(Debug, Serialize)]
struct CheckJson {
    valid: bool,
    error: Option<String>,
    warnings: Vec<WarningJson>,
}

#[derive(Debug, Serialize)]
struct WarningJson {
    message: String,
    start: Option<usize>,
    end: Option<usize>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let input = args.input.read()?;

    let warnings = match lint_vars(&input.text) {
        Ok(warnings) => warnings,
        Err(e) => {
            if args.json {
                let output = CheckJson {
                    valid: false,
                    error: Some(e.to_string()),
                    warnings: Vec::new(),
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{:?}", input.diagnose(&e));
            }
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        let output = CheckJson {
            valid: true,
            error: None,
            warnings: warnings
                .iter()
                .map(|w| WarningJson {
                    message: w.to_string(),
                    start: w.span().map(|s| s.start),
                    end: w.span().map(|s| s.end),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for warning in &warnings {
            let diagnostic = WarningDiagnostic::from_warning(&input.name, &input.text, warning);
            eprintln!("{:?}", Report::new(diagnostic));
        }
        if warnings.is_empty() {
            println!("{} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), input.name);
        } else {
            println!(
                "{} {}: {} warning(s)",
                "!".if_supports_color(Stream::Stdout, |t| t.yellow()),
                input.name,
                warnings.len()
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
