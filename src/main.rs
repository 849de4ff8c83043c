//! ezbp CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use ezbp::cli::{Cli, CommandDispatcher, Commands};
use ezbp::config::{load_config, resolve_config_dir, EzbpConfig};
use ezbp::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so expanded text on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ezbp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ezbp=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load(cli: &Cli) -> ezbp::Result<EzbpConfig> {
    if matches!(cli.command, Some(Commands::Completions(_))) {
        return Ok(EzbpConfig::default());
    }
    let dir = resolve_config_dir(cli.config.as_deref())?;
    tracing::debug!("Using config directory {}", dir.display());
    load_config(&dir)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ezbp starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let kind = cli.ui.unwrap_or_else(|| config.ui_kind());
    let mut ui = create_ui(kind, !cli.non_interactive, output_mode, &config.rofi);

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
