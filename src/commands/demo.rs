//! Walkthrough of the four operations and of every rejection path

use anyhow::Result;

use crate::config::Config;
use crate::core::operations::{evaluate, Operation};
use crate::core::value::Value;
use crate::utils::{DisplayFormatter, Evaluation, OutputFormat, OutputStyle};

/// A single example calculation, optionally introduced by a caption
pub struct Scenario {
    pub caption: Option<&'static str>,
    pub operation: Operation,
    pub a: Value,
    pub b: Value,
}

impl Scenario {
    fn plain(operation: Operation, a: impl Into<Value>, b: impl Into<Value>) -> Self {
        Self {
            caption: None,
            operation,
            a: a.into(),
            b: b.into(),
        }
    }

    fn captioned(caption: &'static str, operation: Operation, a: impl Into<Value>, b: impl Into<Value>) -> Self {
        Self {
            caption: Some(caption),
            ..Self::plain(operation, a, b)
        }
    }

    pub fn run(&self) -> Evaluation {
        let outcome = evaluate(self.operation, &self.a, &self.b);
        Evaluation::new(self.operation, self.a.clone(), self.b.clone(), outcome)
    }
}

pub struct Section {
    pub title: &'static str,
    pub heading: Option<&'static str>,
    pub scenarios: Vec<Scenario>,
}

pub const EXAMPLES_BANNER: &str = "=== Calculator Examples ===";
pub const ERRORS_BANNER: &str = "=== Error Handling Examples ===";

/// Every calculation the demo runs, in display order
pub fn scenarios() -> Vec<Section> {
    vec![
        Section {
            title: "Addition:",
            heading: Some(EXAMPLES_BANNER),
            scenarios: vec![
                Scenario::plain(Operation::Add, 5, 3),
                Scenario::plain(Operation::Add, -10, 25),
                Scenario::plain(Operation::Add, 0.1, 0.2),
            ],
        },
        Section {
            title: "Subtraction:",
            heading: None,
            scenarios: vec![
                Scenario::plain(Operation::Subtract, 10, 4),
                Scenario::plain(Operation::Subtract, 5, 12),
            ],
        },
        Section {
            title: "Multiplication:",
            heading: None,
            scenarios: vec![
                Scenario::plain(Operation::Multiply, 6, 7),
                Scenario::plain(Operation::Multiply, -3, 4),
            ],
        },
        Section {
            title: "Division:",
            heading: None,
            scenarios: vec![
                Scenario::plain(Operation::Divide, 20, 4),
                Scenario::plain(Operation::Divide, 7, 2),
            ],
        },
        Section {
            title: "Rejected input:",
            heading: Some(ERRORS_BANNER),
            scenarios: vec![
                Scenario::captioned("Attempting to divide by zero:", Operation::Divide, 10, 0),
                Scenario::captioned("Attempting to add string and number:", Operation::Add, "5", 3),
                Scenario::captioned("Attempting to use NaN:", Operation::Multiply, f64::NAN, 5),
                Scenario::captioned("Attempting to use Infinity:", Operation::Add, f64::INFINITY, 5),
            ],
        },
    ]
}

pub fn handle_demo_command(config: &Config, format: OutputFormat) -> Result<()> {
    let sections = scenarios();

    if format == OutputFormat::Json {
        let evaluations: Vec<Evaluation> = sections
            .iter()
            .flat_map(|section| section.scenarios.iter().map(Scenario::run))
            .collect();
        let json = serde_json::to_string_pretty(&evaluations)
            .map_err(|e| anyhow::anyhow!("Failed to serialize demo results to JSON: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    for section in &sections {
        if let Some(heading) = section.heading {
            println!();
            OutputStyle::print_header(heading);
        }

        // The rejection examples carry their own captions
        if section.heading != Some(ERRORS_BANNER) {
            OutputStyle::print_section(section.title);
        }

        for scenario in &section.scenarios {
            if let Some(caption) = scenario.caption {
                println!("{}", OutputStyle::muted(caption));
            }

            let evaluation = scenario.run();
            DisplayFormatter::print_evaluation(&evaluation, format, &config.display)?;

            if scenario.caption.is_some() {
                println!();
            }
        }

        if section.heading != Some(ERRORS_BANNER) {
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::utils::error::CalcError;

    fn rendered() -> Vec<String> {
        let display = DisplayConfig::default();
        scenarios()
            .iter()
            .flat_map(|section| section.scenarios.iter().map(Scenario::run))
            .map(|evaluation| evaluation.render(&display))
            .collect()
    }

    #[test]
    fn test_demo_lines() {
        assert_eq!(
            rendered(),
            vec![
                "5 + 3 = 8",
                "-10 + 25 = 15",
                "0.1 + 0.2 = 0.30000000000000004",
                "10 - 4 = 6",
                "5 - 12 = -7",
                "6 * 7 = 42",
                "-3 * 4 = -12",
                "20 / 4 = 5",
                "7 / 2 = 3.5",
                "Error: Division by zero is not allowed",
                "Error: Both arguments must be numbers",
                "Error: Arguments cannot be NaN",
                "Error: Arguments must be finite numbers",
            ]
        );
    }

    #[test]
    fn test_every_rejection_scenario_fails() {
        let sections = scenarios();
        let errors = sections
            .iter()
            .find(|section| section.heading == Some(ERRORS_BANNER))
            .unwrap();

        let failures: Vec<Option<CalcError>> = errors.scenarios.iter().map(|s| s.run().failure).collect();
        assert_eq!(
            failures,
            vec![
                Some(CalcError::DivisionByZero),
                Some(CalcError::NotNumbers),
                Some(CalcError::NotANumber),
                Some(CalcError::NotFinite),
            ]
        );
        assert!(errors.scenarios.iter().all(|s| s.caption.is_some()));
    }
}
