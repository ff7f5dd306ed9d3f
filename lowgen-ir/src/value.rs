//! Prop and style values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered map of logical prop names to values.
pub type PropMap = IndexMap<String, PropValue>;

/// Ordered map of logical (camelCase) style attributes to values.
///
/// Values are plain JSON: numbers get a platform unit, strings may already
/// carry one, anything else passes through the style pipeline untouched.
pub type StyleMap = IndexMap<String, Value>;

/// A code expression carried verbatim into generated source.
///
/// Written in page JSON as `{"$expr": "() => navigate('/cart')"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expression {
    #[serde(rename = "$expr")]
    pub code: String,
}

/// Value of a component prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Callback or other code emitted as-is.
    Expression(Expression),
    /// Scalar, array or nested object.
    Literal(Value),
}

impl PropValue {
    /// Create an expression value.
    pub fn expr(code: impl Into<String>) -> Self {
        Self::Expression(Expression { code: code.into() })
    }

    /// Get the string content of a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Literal(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Check if this is a code expression.
    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    /// JavaScript truthiness of the value.
    ///
    /// Expressions are opaque and therefore considered truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Expression(_) => true,
            Self::Literal(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }

    /// Render the value the way it appears in source text.
    ///
    /// Literals are rendered as compact JSON, expressions verbatim.
    pub fn to_source(&self) -> String {
        match self {
            Self::Expression(expr) => expr.code.clone(),
            Self::Literal(value) => value.to_string(),
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::String(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Literal(Value::Bool(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Literal(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_expression() {
        let value: PropValue = serde_json::from_str(r#"{"$expr": "() => go()"}"#).unwrap();
        assert_eq!(value, PropValue::expr("() => go()"));
    }

    #[test]
    fn test_deserialize_object_with_extra_keys_is_literal() {
        let value: PropValue =
            serde_json::from_str(r#"{"$expr": "x", "other": 1}"#).unwrap();
        assert!(!value.is_expression());
    }

    #[test]
    fn test_deserialize_literals() {
        let value: PropValue = serde_json::from_str(r#""Hello""#).unwrap();
        assert_eq!(value.as_str(), Some("Hello"));

        let value: PropValue = serde_json::from_str(r#"{"uri": "a.png"}"#).unwrap();
        assert_eq!(value, PropValue::Literal(json!({"uri": "a.png"})));
    }

    #[test]
    fn test_truthiness() {
        assert!(PropValue::from(true).is_truthy());
        assert!(!PropValue::from(false).is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(!PropValue::from(0_i64).is_truthy());
        assert!(!PropValue::Literal(Value::Null).is_truthy());
        assert!(PropValue::Literal(json!([])).is_truthy());
        assert!(PropValue::expr("flag").is_truthy());
    }

    #[test]
    fn test_to_source() {
        assert_eq!(PropValue::from("a\"b").to_source(), r#""a\"b""#);
        assert_eq!(PropValue::from(3_i64).to_source(), "3");
        assert_eq!(PropValue::expr("onTap").to_source(), "onTap");
    }
}
