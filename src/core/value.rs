//! Dynamically-typed operand values
//!
//! Callers at the edge of the library (the CLI, the demo) may hand over
//! anything. `Value` carries that input until the validation gate has
//! confirmed it is a usable number.

use serde::Serialize;
use std::fmt;

/// An operand as received from an untyped caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    #[serde(serialize_with = "crate::utils::format::serialize_number")]
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Parse a command line token.
    ///
    /// JSON literals win (`5`, `"5"`, `true`, `null`, `[1, 2]`). Tokens JSON
    /// rejects are tried as float literals, which covers `NaN`, `inf` and
    /// `Infinity`. Anything else is kept as text.
    pub fn parse_token(token: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(token) {
            return Self::from_json(json, token);
        }

        match token.trim().parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(token.to_string()),
        }
    }

    fn from_json(json: serde_json::Value, raw: &str) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .unwrap_or_else(|| Value::Text(raw.to_string())),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|item| {
                        let raw = item.to_string();
                        Self::from_json(item, &raw)
                    })
                    .collect(),
            ),
            // Objects have no operand meaning; keep the source text
            serde_json::Value::Object(_) => Value::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::List(_) => "list",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", crate::utils::format::format_number(*n, None)),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
