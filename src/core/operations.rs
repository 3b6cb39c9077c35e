//! The four arithmetic operations
//!
//! Every operation passes its operands through the validation gate first and
//! returns the plain IEEE 754 result. No rounding is applied:
//! `add(0.1, 0.2)` is `0.30000000000000004`.

use crate::core::validate::{validate_numbers, validate_pair};
use crate::core::value::Value;
use crate::utils::error::{CalcError, CalcResult};
use serde::Serialize;
use std::fmt;

pub fn add(a: f64, b: f64) -> CalcResult<f64> {
    validate_pair(a, b)?;
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    validate_pair(a, b)?;
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    validate_pair(a, b)?;
    Ok(a * b)
}

/// Divide `a` by `b`. Fails on a zero divisor once both operands are valid.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    validate_pair(a, b)?;

    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    Ok(a / b)
}

/// Selects one of the four operations at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run the full gate on untyped operands, then dispatch to `op`
pub fn evaluate(op: Operation, a: &Value, b: &Value) -> CalcResult<f64> {
    validate_numbers(a, b)?;

    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => op.apply(a, b),
        _ => Err(CalcError::NotNumbers),
    }
}
