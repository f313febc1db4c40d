mod value;
mod vars;

pub use value::VarValue;
pub use vars::{VarMap, var_key};
