//! Interpolation variables
//!
//! A template is rendered against a [`Vars`] bag. Every element that needs a
//! particular type goes through an explicit conversion returning
//! [`ConversionError`], which the evaluator turns into the missing-variable
//! placeholder.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Variables for interpolation, keyed by name.
pub type Vars = HashMap<String, Value>;

/// Build a [`Vars`] bag.
///
/// ```
/// use inline_i18n_core::{vars, Value};
///
/// let vars = vars! { "name" => "Alice", "count" => 3 };
/// assert_eq!(vars["count"], Value::Number(3.0));
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Vars::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::Vars::new();
        $(
            vars.insert(::std::string::String::from($name), $crate::Value::from($value));
        )+
        vars
    }};
}

/// A single interpolation value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Date(DateTime<Utc>),
    List(Vec<String>),
}

/// Why a value could not be used where a typed value was needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a valid date")]
    InvalidDate(String),

    #[error("expected a list, found {0}")]
    NotAList(&'static str),
}

impl Value {
    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Date(_) => "date",
            Value::List(_) => "list",
        }
    }

    /// Coerce to a finite-or-infinite number; NaN and non-numeric text fail.
    ///
    /// Strings are trimmed and parsed; the empty string is rejected. Dates
    /// convert to epoch milliseconds.
    pub fn to_number(&self) -> Result<f64, ConversionError> {
        let n = match self {
            Value::Number(n) => *n,
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed {
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
                        return Err(ConversionError::NotANumber(s.clone()));
                    }
                    _ => trimmed
                        .parse::<f64>()
                        .map_err(|_| ConversionError::NotANumber(s.clone()))?,
                }
            }
            Value::Date(d) => d.timestamp_millis() as f64,
            Value::List(_) => return Err(ConversionError::NotANumber(self.to_display_string())),
        };

        if n.is_nan() {
            Err(ConversionError::NotANumber(self.to_display_string()))
        } else {
            Ok(n)
        }
    }

    /// Coerce to a UTC timestamp.
    ///
    /// Accepts dates, epoch milliseconds, RFC 3339 strings and
    /// `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM:SS` strings (read as UTC).
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, ConversionError> {
        match self {
            Value::Date(d) => Ok(*d),
            Value::Number(ms) if ms.is_finite() => Utc
                .timestamp_millis_opt(ms.round() as i64)
                .single()
                .ok_or_else(|| ConversionError::InvalidDate(self.to_display_string())),
            Value::String(s) => parse_date_string(s.trim())
                .ok_or_else(|| ConversionError::InvalidDate(s.clone())),
            _ => Err(ConversionError::InvalidDate(self.to_display_string())),
        }
    }

    /// Borrow the items of a list value.
    pub fn as_list(&self) -> Result<&[String], ConversionError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ConversionError::NotAList(other.kind())),
        }
    }

    /// Plain string form used for `{name}` arguments and select keys.
    ///
    /// Numbers print like JavaScript's `String(n)` (`5`, `1.5`, `NaN`,
    /// `Infinity`), lists join with `,`, dates use RFC 3339.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => number_to_string(*n),
            Value::Date(d) => d.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            Value::List(items) => items.join(","),
        }
    }
}

/// JavaScript-style `String(n)` for numbers.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(items: [&str; N]) -> Self {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Value::from(5).to_display_string(), "5");
        assert_eq!(Value::from(1.5).to_display_string(), "1.5");
        assert_eq!(Value::from(-0.0).to_display_string(), "0");
        assert_eq!(Value::from(f64::NAN).to_display_string(), "NaN");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_display_string(), "-Infinity");
    }

    #[test]
    fn test_list_display() {
        assert_eq!(Value::from(["a", "b"]).to_display_string(), "a,b");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Value::from(" 42 ").to_number(), Ok(42.0));
        assert_eq!(Value::from("1e3").to_number(), Ok(1000.0));
        assert_eq!(Value::from("-Infinity").to_number(), Ok(f64::NEG_INFINITY));
        assert!(Value::from("abc").to_number().is_err());
        assert!(Value::from("inf").to_number().is_err());
        assert!(Value::from("").to_number().is_err());
        assert!(Value::from(f64::NAN).to_number().is_err());
        assert!(Value::from(["1"]).to_number().is_err());
    }

    #[test]
    fn test_to_datetime() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();

        assert_eq!(Value::from("2024-03-15T10:30:00Z").to_datetime(), Ok(expected));
        assert_eq!(Value::from("2024-03-15T10:30:00").to_datetime(), Ok(expected));
        assert_eq!(
            Value::from(expected.timestamp_millis()).to_datetime(),
            Ok(expected)
        );
        assert_eq!(
            Value::from("2024-06-01").to_datetime(),
            Ok(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        );
        assert!(Value::from("yesterday").to_datetime().is_err());
        assert!(Value::from(f64::INFINITY).to_datetime().is_err());
    }

    #[test]
    fn test_as_list() {
        assert_eq!(Value::from(["x"]).as_list().unwrap(), ["x".to_string()]);
        assert_eq!(
            Value::from("x").as_list(),
            Err(ConversionError::NotAList("string"))
        );
    }

    #[test]
    fn test_vars_macro() {
        let vars = vars! { "name" => "Alice", "names" => ["A", "B"] };
        assert_eq!(vars["name"], Value::String("Alice".to_string()));
        assert_eq!(vars["names"].kind(), "list");
        assert!(vars!().is_empty());
    }
}
