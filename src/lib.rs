//! Calcheus - validated four-function arithmetic
//!
//! Addition, subtraction, multiplication and division over `f64` operands.
//! Every operation goes through one validation gate that rejects
//! non-numeric, NaN and infinite operands; division also rejects a zero
//! divisor. Results follow IEEE 754 exactly and are never rounded.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types for easier use
pub use self::core::{
    operations::{add, divide, evaluate, multiply, subtract, Operation},
    validate::{validate_numbers, validate_pair},
    value::Value,
};
pub use utils::error::{CalcError, CalcResult, ErrorKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Calculator {
    config: config::Config,
}

impl Calculator {
    /// Create a new Calculator with the given configuration
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }

    pub fn calculate(&self, operation: Operation, a: f64, b: f64) -> CalcResult<f64> {
        operation.apply(a, b)
    }

    /// Evaluate untyped operands and render the outcome with the display settings
    pub fn describe(&self, operation: Operation, a: Value, b: Value) -> String {
        let outcome = evaluate(operation, &a, &b);
        utils::Evaluation::new(operation, a, b, outcome).render(&self.config.display)
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }
}
