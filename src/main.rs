use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::{ContextKind, ErrorKind};
use clap::Parser;

use repo_tree::cli::Cli;
use repo_tree::commands;
use repo_tree::config::Config;
use repo_tree::TreeError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<TreeError>()
                .map(TreeError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        commands::completions::run(shell, &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    tracing::info!(?cli, "Rendering tree");
    let report = commands::render::run(&cli, &config)?;
    tracing::debug!(?report, "Delivered tree");

    Ok(())
}

/// Help and version exit 0; anything else is an unrecognized argument.
fn parse_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => {
            let arg = err
                .get(ContextKind::InvalidArg)
                .map(|value| value.to_string())
                .unwrap_or_default();
            let err = TreeError::UnrecognizedArgument(arg);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("repo_tree={}", level)));

    // stdout is reserved for the document
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
