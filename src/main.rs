use anyhow::Result;
use clap::Parser;

use calcheus::cli::Cli;
use calcheus::config::Config;
use calcheus::utils::{logger, OutputStyle};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.debug);

    let config_path = cli.config_path();
    let config = Config::load_custom(&config_path)?;
    tracing::debug!(path = %config_path.display(), ?config, "configuration loaded");

    OutputStyle::apply_color_setting(config.display.color);

    let format = cli.output_format();
    let succeeded = cli.command.execute(config, &config_path, format)?;

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
