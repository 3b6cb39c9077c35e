use colored::*;
use serde::Serialize;
use anyhow::Result;

use crate::config::DisplayConfig;
use crate::core::operations::Operation;
use crate::core::value::Value;
use crate::utils::error::{format_error, CalcError, CalcResult};
use crate::utils::format::{format_expression, format_number};

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn result(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!();
    }

    pub fn print_section(title: &str) {
        println!("{}", Self::header(title));
    }

    /// Toggle ANSI colors for everything printed through `colored`
    pub fn apply_color_setting(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// One evaluated (or rejected) calculation, ready to be displayed
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub a: Value,
    pub b: Value,
    pub ok: bool,
    #[serde(serialize_with = "crate::utils::format::serialize_option_number")]
    pub result: Option<f64>,
    pub error: Option<String>,
    #[serde(skip)]
    pub failure: Option<CalcError>,
}

impl Evaluation {
    pub fn new(operation: Operation, a: Value, b: Value, outcome: CalcResult<f64>) -> Self {
        let (result, failure) = match outcome {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };

        Self {
            operation,
            a,
            b,
            ok: failure.is_none(),
            result,
            error: failure.map(|err| err.to_string()),
            failure,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }

    /// The single line shown for this calculation, without colors
    pub fn render(&self, display: &DisplayConfig) -> String {
        match (self.result, self.failure) {
            (Some(value), _) => {
                let value = format_number(value, display.precision);
                if display.show_expression {
                    format!(
                        "{} = {}",
                        format_expression(self.operation, &self.a, &self.b, display.precision),
                        value
                    )
                } else {
                    value
                }
            }
            (None, Some(err)) => format_error(&err),
            (None, None) => String::new(),
        }
    }
}

/// Output formats for calculation results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Display formatter for different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn print_evaluation(evaluation: &Evaluation, format: OutputFormat, display: &DisplayConfig) -> Result<()> {
        match format {
            OutputFormat::Text => Self::print_text(evaluation, display),
            OutputFormat::Json => Self::print_json(evaluation)?,
        }
        Ok(())
    }

    fn print_text(evaluation: &Evaluation, display: &DisplayConfig) {
        let line = evaluation.render(display);
        if evaluation.is_ok() {
            println!("{}", OutputStyle::result(&line));
        } else {
            println!("{}", OutputStyle::error(&line));
        }
    }

    fn print_json(evaluation: &Evaluation) -> Result<()> {
        let json = serde_json::to_string_pretty(evaluation)
            .map_err(|e| anyhow::anyhow!("Failed to serialize evaluation to JSON: {}", e))?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn test_render_success_with_expression() {
        let eval = Evaluation::new(Operation::Add, Value::from(0.1), Value::from(0.2), Ok(0.1 + 0.2));
        assert_eq!(eval.render(&display()), "0.1 + 0.2 = 0.30000000000000004");
    }

    #[test]
    fn test_render_without_expression() {
        let mut display = display();
        display.show_expression = false;
        display.precision = Some(2);

        let eval = Evaluation::new(Operation::Divide, Value::from(7), Value::from(2), Ok(3.5));
        assert_eq!(eval.render(&display), "3.50");
    }

    #[test]
    fn test_render_failure() {
        let eval = Evaluation::new(
            Operation::Divide,
            Value::from(10),
            Value::from(0),
            Err(CalcError::DivisionByZero),
        );
        assert!(!eval.is_ok());
        assert_eq!(eval.render(&display()), "Error: Division by zero is not allowed");
    }

    #[test]
    fn test_json_shape() {
        let eval = Evaluation::new(Operation::Add, Value::from("5"), Value::from(3), Err(CalcError::NotNumbers));
        let json = serde_json::to_value(&eval).unwrap();

        assert_eq!(json["operation"], "add");
        assert_eq!(json["a"], "5");
        assert_eq!(json["b"], 3.0);
        assert_eq!(json["ok"], false);
        assert!(json["result"].is_null());
        assert_eq!(json["error"], "Both arguments must be numbers");
    }

    #[test]
    fn test_json_names_non_finite_operands() {
        let nan = Evaluation::new(Operation::Multiply, Value::from(f64::NAN), Value::from(5), Err(CalcError::NotANumber));
        let json = serde_json::to_value(&nan).unwrap();
        assert_eq!(json["a"], "NaN");
        assert_eq!(json["b"], 5.0);

        let inf = Evaluation::new(Operation::Add, Value::from(f64::NEG_INFINITY), Value::from(5), Err(CalcError::NotFinite));
        assert_eq!(serde_json::to_value(&inf).unwrap()["a"], "-Infinity");

        let null = Evaluation::new(Operation::Add, Value::Null, Value::from(5), Err(CalcError::NotNumbers));
        assert!(serde_json::to_value(&null).unwrap()["a"].is_null());
    }

    #[test]
    fn test_json_overflowing_result_is_a_success() {
        let eval = Evaluation::new(Operation::Multiply, Value::from(f64::MAX), Value::from(2), Ok(f64::INFINITY));
        let json = serde_json::to_value(&eval).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["result"], "Infinity");
        assert!(json["error"].is_null());
    }
}
