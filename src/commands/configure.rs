use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::print_success;
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    mut config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config, config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Calcheus Configuration");
    println!("========================");

    println!("Display:");
    println!("  Color: {}", config.display.color);
    match config.display.precision {
        Some(digits) => println!("  Precision: {} digits", digits),
        None => println!("  Precision: shortest"),
    }
    println!("  Show expression: {}", config.display.show_expression);

    Ok(())
}

fn handle_path_command(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  calcheus config show    - Show current configuration");
    println!("  calcheus config path    - Print the configuration file location");
    println!("  calcheus config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config: &mut Config, config_path: &Path) -> Result<()> {
    *config = Config::default();
    config.save_to(config_path)?;
    print_success("Configuration reset to defaults!");
    Ok(())
}
