//! Implementation of the `gt-icu declare` command.

use gt_icu::{declare_var, DeclareOptions, VarValue};
use miette::Result;

/// Arguments for the declare command.
#[derive(Debug, clap::Args)]
pub struct DeclareArgs {
    /// Value to carry. Omit to declare an empty value
    pub value: Option<String>,

    /// Variable name shown to translators
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Run the declare command.
pub fn run_declare(args: DeclareArgs) -> Result<i32> {
    let options = DeclareOptions::builder().maybe_name(args.name).build();
    println!("{}", declare_var(VarValue::from(args.value), &options));
    Ok(exitcode::OK)
}
