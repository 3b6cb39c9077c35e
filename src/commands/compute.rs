use anyhow::Result;

use crate::cli::OperandArgs;
use crate::config::Config;
use crate::core::operations::{evaluate, Operation};
use crate::core::value::Value;
use crate::utils::{DisplayFormatter, Evaluation, OutputFormat};

/// Evaluate one operation over two command line tokens and print the outcome.
///
/// Returns whether the calculation succeeded so `main` can pick the exit code.
pub fn handle_compute_command(
    config: &Config,
    operation: Operation,
    args: &OperandArgs,
    format: OutputFormat,
) -> Result<bool> {
    let evaluation = compute(operation, &args.a, &args.b);

    match &evaluation.failure {
        Some(err) => tracing::debug!(
            operation = %operation,
            a = evaluation.a.type_name(),
            b = evaluation.b.type_name(),
            kind = ?err.kind(),
            "calculation rejected"
        ),
        None => tracing::debug!(operation = %operation, "calculation succeeded"),
    }

    DisplayFormatter::print_evaluation(&evaluation, format, &config.display)?;
    Ok(evaluation.is_ok())
}

pub fn compute(operation: Operation, a: &str, b: &str) -> Evaluation {
    let a = Value::parse_token(a);
    let b = Value::parse_token(b);
    let outcome = evaluate(operation, &a, &b);
    Evaluation::new(operation, a, b, outcome)
}
