//! Pippin binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing (logs go to stderr, never into the chat)
//! 4. Run the terminal chat loop

mod cli;
mod repl;
mod term;

use std::io;

use clap::Parser;

use pippin_brain::ResponseSelector;
use pippin_core::PippinConfig;

use crate::cli::CliArgs;
use crate::term::Presenter;

fn main() -> pippin_core::Result<()> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config = PippinConfig::load_or_default(&config_file);

    // Tracing. RUST_LOG wins over the resolved level, matching the usual
    // env-filter convention.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting Pippin v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let presenter = Presenter::new(
        config.ui.color && !args.no_color,
        config.ui.clear_screen && !args.no_clear,
        args.resolve_delay_ms(config.ui.thinking_delay_ms),
    );
    let selector = ResponseSelector::new();

    repl::run(io::stdin().lock(), &selector, &presenter)
}
