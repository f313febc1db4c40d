use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value that can be declared as a message variable.
///
/// `VarValue` only exists to be turned into text: whatever the variant, the
/// declared placeholder carries its `Display` form. `Null` displays as the
/// empty string.
///
/// # Example
///
/// ```
/// use gt_icu::VarValue;
///
/// let count: VarValue = 42.into();
/// assert_eq!(count.to_string(), "42");
///
/// let missing: VarValue = None::<&str>.into();
/// assert_eq!(missing.to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VarValue {
    /// No value; declared as empty text.
    #[default]
    Null,

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean.
    Bool(bool),

    /// A string value.
    String(String),
}

impl VarValue {
    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            VarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for VarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VarValue::Null => Ok(()),
            VarValue::Number(n) => write!(f, "{n}"),
            VarValue::Float(n) => write_float(f, *n),
            VarValue::Bool(b) => write!(f, "{b}"),
            VarValue::String(s) => f.write_str(s),
        }
    }
}

/// Writes a float as `NaN`, `Infinity` or `-Infinity` when not finite, zero
/// without a sign, and in exponent form (`1e+21`) outside `[1e-6, 1e21)`.
fn write_float(f: &mut Formatter<'_>, n: f64) -> FmtResult {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&exponential),
    }
}

impl From<i32> for VarValue {
    fn from(n: i32) -> Self {
        VarValue::Number(i64::from(n))
    }
}

impl From<i64> for VarValue {
    fn from(n: i64) -> Self {
        VarValue::Number(n)
    }
}

impl From<u32> for VarValue {
    fn from(n: u32) -> Self {
        VarValue::Number(i64::from(n))
    }
}

impl From<f32> for VarValue {
    fn from(n: f32) -> Self {
        VarValue::Float(f64::from(n))
    }
}

impl From<f64> for VarValue {
    fn from(n: f64) -> Self {
        VarValue::Float(n)
    }
}

impl From<bool> for VarValue {
    fn from(b: bool) -> Self {
        VarValue::Bool(b)
    }
}

impl From<String> for VarValue {
    fn from(s: String) -> Self {
        VarValue::String(s)
    }
}

impl From<&str> for VarValue {
    fn from(s: &str) -> Self {
        VarValue::String(s.to_string())
    }
}

impl From<&String> for VarValue {
    fn from(s: &String) -> Self {
        VarValue::String(s.clone())
    }
}

impl<T: Into<VarValue>> From<Option<T>> for VarValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(VarValue::Null, Into::into)
    }
}
