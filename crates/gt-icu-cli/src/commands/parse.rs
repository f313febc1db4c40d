//! Implementation of the `gt-icu parse` command.

use gt_icu::Message;
use miette::{IntoDiagnostic, Result};

use super::input::InputArgs;

/// Run the parse command.
pub fn run_parse(args: InputArgs) -> Result<i32> {
    let input = args.read()?;
    let message = Message::parse(&input.text).map_err(|e| input.diagnose(&e))?;
    println!("{}", serde_json::to_string_pretty(&message).into_diagnostic()?);
    Ok(exitcode::OK)
}
