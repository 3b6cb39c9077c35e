use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the console subscriber for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug level for
/// this crate and warnings for everything else.
pub fn init_cli_logger(debug: bool) {
    let default_filter = if debug { "calcheus=debug,warn" } else { "calcheus=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
