//! CLI command implementations.

mod check;
mod declare;
mod extract;
mod input;
mod parse;
mod rewrite;

pub use check::{run_check, CheckArgs};
pub use declare::{run_declare, DeclareArgs};
pub use extract::{run_extract, ExtractArgs};
pub use input::InputArgs;
pub use parse::run_parse;
pub use rewrite::{run_condense, run_decode, run_index};
