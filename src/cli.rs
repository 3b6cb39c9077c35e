use clap::{Parser, Subcommand, Args};
use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::config::Config;
use crate::commands::{compute, configure, demo};
use crate::core::operations::Operation;
use crate::utils::OutputFormat;

#[derive(Parser)]
#[command(name = "calcheus")]
#[command(about = "Validated four-function arithmetic")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The config file in effect: `--config` if given, else the per-user default
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file_path)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Commands {
    /// Run the command. Returns `false` when a calculation was rejected.
    pub fn execute(self, config: Config, config_path: &Path, format: OutputFormat) -> Result<bool> {
        match self {
            Commands::Add(args) => compute::handle_compute_command(&config, Operation::Add, &args, format),
            Commands::Subtract(args) => compute::handle_compute_command(&config, Operation::Subtract, &args, format),
            Commands::Multiply(args) => compute::handle_compute_command(&config, Operation::Multiply, &args, format),
            Commands::Divide(args) => compute::handle_compute_command(&config, Operation::Divide, &args, format),
            Commands::Demo => {
                demo::handle_demo_command(&config, format)?;
                Ok(true)
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, config_path, args.command)?;
                Ok(true)
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two numbers
    Add(OperandArgs),

    /// Subtract the second number from the first
    Subtract(OperandArgs),

    /// Multiply two numbers
    Multiply(OperandArgs),

    /// Divide the first number by the second
    Divide(OperandArgs),

    /// Run the example calculations, including the rejected ones
    Demo,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct OperandArgs {
    #[arg(help = "First operand (JSON literal, NaN, Infinity or text)", allow_negative_numbers = true)]
    pub a: String,

    #[arg(help = "Second operand", allow_negative_numbers = true)]
    pub b: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
