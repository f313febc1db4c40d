//! Commands that rewrite a message and print the result.

use std::borrow::Cow;

use gt_icu::{condense_vars, decode_vars, index_vars, ParseError};
use miette::Result;

use super::input::InputArgs;

/// Run the index command.
pub fn run_index(args: InputArgs) -> Result<i32> {
    rewrite(&args, index_vars)
}

/// Run the decode command.
pub fn run_decode(args: InputArgs) -> Result<i32> {
    rewrite(&args, decode_vars)
}

/// Run the condense command.
pub fn run_condense(args: InputArgs) -> Result<i32> {
    rewrite(&args, condense_vars)
}

fn rewrite(args: &InputArgs, pass: fn(&str) -> Result<Cow<'_, str>, ParseError>) -> Result<i32> {
    let input = args.read()?;
    let output = pass(&input.text).map_err(|e| input.diagnose(&e))?;
    if matches!(output, Cow::Borrowed(_)) {
        tracing::info!("message unchanged");
    }
    println!("{}", output);
    Ok(exitcode::OK)
}
