use crate::core::operations::Operation;
use crate::core::value::Value;
use serde::Serializer;

/// Render a number the way results are shown to users.
///
/// Without a precision the shortest representation that round-trips is used
/// (`8`, `3.5`, `0.30000000000000004`). Non-finite values use the spelled-out
/// names so they read the same as the tokens the CLI accepts.
pub fn format_number(n: f64, precision: Option<usize>) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    match precision {
        Some(digits) => format!("{:.*}", digits, n),
        None => format!("{}", n),
    }
}

/// Serialize finite numbers as JSON numbers and the rest by name.
///
/// `serde_json` would otherwise write NaN and both infinities as `null`.
pub fn serialize_number<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if n.is_finite() {
        serializer.serialize_f64(*n)
    } else {
        serializer.serialize_str(&format_number(*n, None))
    }
}

pub fn serialize_option_number<S>(n: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match n {
        Some(n) => serialize_number(n, serializer),
        None => serializer.serialize_none(),
    }
}

/// `5 + 3`, `'5' + 3`, ...
pub fn format_expression(op: Operation, a: &Value, b: &Value, precision: Option<usize>) -> String {
    format!(
        "{} {} {}",
        format_operand(a, precision),
        op.symbol(),
        format_operand(b, precision)
    )
}

fn format_operand(value: &Value, precision: Option<usize>) -> String {
    match value {
        Value::Number(n) => format_number(*n, precision),
        other => other.to_string(),
    }
}
