//! Implementation of the `gt-icu extract` command.

use clap::Args;
use gt_icu::{extract_var_names, extract_vars, VarMap};
use miette::{IntoDiagnostic, Result};

use super::input::InputArgs;
use crate::output::table::{format_vars_table, VarRow};

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the extract command.
pub fn run_extract(args: ExtractArgs) -> Result<i32> {
    let input = args.input.read()?;
    let values = extract_vars(&input.text).map_err(|e| input.diagnose(&e))?;
    let mut names = extract_var_names(&input.text).map_err(|e| input.diagnose(&e))?;
    let rows = to_rows(values, &mut names);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else if rows.is_empty() {
        println!("No placeholders found.");
    } else {
        println!("{}", format_vars_table(&rows));
    }

    Ok(exitcode::OK)
}

/// Rows in placeholder order.
fn to_rows(values: VarMap, names: &mut VarMap) -> Vec<VarRow> {
    let mut rows: Vec<VarRow> = values
        .into_iter()
        .map(|(key, value)| VarRow {
            name: names.remove(&key),
            key,
            value,
        })
        .collect();
    rows.sort_by_key(|row| key_index(&row.key));
    rows
}

/// Numeric part of a `_gt_<N>` key.
fn key_index(key: &str) -> usize {
    key.trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .unwrap_or(usize::MAX)
}
