//! The validation gate shared by every arithmetic operation

use crate::core::value::Value;
use crate::utils::error::{CalcError, CalcResult};

/// Check that both untyped operands are usable numbers.
///
/// Checks run in a fixed order and the first failure is reported:
/// type, then NaN, then finiteness.
pub fn validate_numbers(a: &Value, b: &Value) -> CalcResult<()> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => validate_pair(*a, *b),
        _ => Err(CalcError::NotNumbers),
    }
}

/// NaN and finiteness checks for operands that are already `f64`
pub fn validate_pair(a: f64, b: f64) -> CalcResult<()> {
    if a.is_nan() || b.is_nan() {
        return Err(CalcError::NotANumber);
    }

    if !a.is_finite() || !b.is_finite() {
        return Err(CalcError::NotFinite);
    }

    Ok(())
}
