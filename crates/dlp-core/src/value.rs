//! Scalar field values.

use std::fmt;

/// One field value: the only three scalar kinds a record may hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Decimal(f64),
}

impl Value {
    /// The string payload, if this is a `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view used by writers that distinguish numbers from text.
    /// Integers are widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::String(_) => None,
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(d) => Some(*d),
        }
    }
}

/// Textual rendering shared by every text-based writer.
///
/// Decimals always carry a fractional part (`2.0`, not `2`) so a decimal
/// column never looks like an integer column.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{d:?}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Decimal(d)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            // JSON has no NaN / infinity.
            Value::Decimal(d) if !d.is_finite() => serializer.serialize_unit(),
            Value::Decimal(d) => serializer.serialize_f64(*d),
        }
    }
}
