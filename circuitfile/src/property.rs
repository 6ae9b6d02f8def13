//! Typed property values and the validator capability.
//!
//! Component properties in a circuit file are not plain JSON values: each
//! property name is associated with a validator that owns the conversion
//! between the typed value and its canonical string form. The load path never
//! calls a validator (raw document values pass through and are typed later,
//! when the component is constructed); the save path always renders values
//! through `format`.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid property value `{value}`: {reason}")]
pub struct PropertyParseError {
    pub value: String,
    pub reason: String,
}

impl PropertyParseError {
    pub fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// A typed property value as it appears in a circuit document.
///
/// Documents store property values as JSON primitives; everything else is
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a raw document value. Returns `None` for arrays, objects and
    /// null, which are not legal property values.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(PropertyValue::Text(s.clone())),
            serde_json::Value::Bool(b) => Some(PropertyValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(PropertyValue::Integer(i))
                } else {
                    n.as_f64().map(PropertyValue::Number)
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => write!(f, "{}", s),
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Integer(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

/// Converts a property value to and from its canonical string form.
///
/// Registered per property name by the host application; the serializer only
/// calls `format`.
pub trait PropertyValidator: fmt::Debug + Send + Sync {
    fn parse(&self, input: &str) -> Result<PropertyValue, PropertyParseError>;

    fn format(&self, value: &PropertyValue) -> String {
        value.to_string()
    }
}

/// Shared handle to a validator, cheap to attach to many properties.
pub type SharedValidator = Arc<dyn PropertyValidator>;

/// Accepts any string unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextValidator;

impl PropertyValidator for TextValidator {
    fn parse(&self, input: &str) -> Result<PropertyValue, PropertyParseError> {
        Ok(PropertyValue::Text(input.to_string()))
    }
}

/// Boolean flag rendered as `Yes`/`No`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNoValidator;

impl PropertyValidator for YesNoValidator {
    fn parse(&self, input: &str) -> Result<PropertyValue, PropertyParseError> {
        match input {
            "Yes" => Ok(PropertyValue::Bool(true)),
            "No" => Ok(PropertyValue::Bool(false)),
            _ => Err(PropertyParseError::new(input, "expected `Yes` or `No`")),
        }
    }

    fn format(&self, value: &PropertyValue) -> String {
        match value {
            PropertyValue::Bool(true) => "Yes".to_string(),
            PropertyValue::Bool(false) => "No".to_string(),
            other => other.to_string(),
        }
    }
}

/// Integer values, accepting decimal or hex with a `0x`, `x` or `#` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidator;

impl PropertyValidator for IntegerValidator {
    fn parse(&self, input: &str) -> Result<PropertyValue, PropertyParseError> {
        if let Ok(n) = input.parse::<i64>() {
            return Ok(PropertyValue::Integer(n));
        }

        let hex = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("x"))
            .or_else(|| input.strip_prefix("#"));
        if let Some(hex) = hex {
            if let Ok(n) = i64::from_str_radix(hex, 16) {
                return Ok(PropertyValue::Integer(n));
            }
        }

        Err(PropertyParseError::new(input, "not a valid integer"))
    }
}

/// Restricts a property to a fixed set of string choices.
#[derive(Debug, Clone)]
pub struct ListValidator {
    choices: Vec<String>,
}

impl ListValidator {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl PropertyValidator for ListValidator {
    fn parse(&self, input: &str) -> Result<PropertyValue, PropertyParseError> {
        if self.choices.iter().any(|c| c == input) {
            Ok(PropertyValue::Text(input.to_string()))
        } else {
            Err(PropertyParseError::new(
                input,
                format!("expected one of: {}", self.choices.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_validator_roundtrip() {
        let v = TextValidator;
        let value = v.parse("hello").unwrap();
        assert_eq!(value, PropertyValue::Text("hello".to_string()));
        assert_eq!(v.format(&value), "hello");
    }

    #[test]
    fn test_yesno_validator() {
        let v = YesNoValidator;
        assert_eq!(v.parse("Yes").unwrap(), PropertyValue::Bool(true));
        assert_eq!(v.parse("No").unwrap(), PropertyValue::Bool(false));
        assert!(v.parse("maybe").is_err());
        assert_eq!(v.format(&PropertyValue::Bool(true)), "Yes");
        assert_eq!(v.format(&PropertyValue::Bool(false)), "No");
    }

    #[test]
    fn test_integer_validator_decimal() {
        let v = IntegerValidator;
        assert_eq!(v.parse("42").unwrap(), PropertyValue::Integer(42));
        assert_eq!(v.parse("-7").unwrap(), PropertyValue::Integer(-7));
        assert_eq!(v.format(&PropertyValue::Integer(42)), "42");
    }

    #[test]
    fn test_integer_validator_hex() {
        let v = IntegerValidator;
        assert_eq!(v.parse("0xff").unwrap(), PropertyValue::Integer(255));
        assert_eq!(v.parse("xff").unwrap(), PropertyValue::Integer(255));
        assert_eq!(v.parse("#10").unwrap(), PropertyValue::Integer(16));
        assert!(v.parse("0xzz").is_err());
    }

    #[test]
    fn test_list_validator() {
        let v = ListValidator::new(["AND", "OR", "XOR"]);
        assert_eq!(v.parse("OR").unwrap(), PropertyValue::Text("OR".to_string()));
        assert!(v.parse("NAND").is_err());
    }

    #[test]
    fn test_from_json_primitives() {
        use serde_json::json;
        assert_eq!(
            PropertyValue::from_json(&json!("A")),
            Some(PropertyValue::Text("A".to_string()))
        );
        assert_eq!(PropertyValue::from_json(&json!(8)), Some(PropertyValue::Integer(8)));
        assert_eq!(PropertyValue::from_json(&json!(1.5)), Some(PropertyValue::Number(1.5)));
        assert_eq!(PropertyValue::from_json(&json!(true)), Some(PropertyValue::Bool(true)));
        assert_eq!(PropertyValue::from_json(&json!(null)), None);
        assert_eq!(PropertyValue::from_json(&json!([1, 2])), None);
    }
}
