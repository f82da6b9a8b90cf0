//! Render command implementation

use std::io;

use crate::cli::Cli;
use crate::clipboard::{select_sink, ClipboardBackend, Platform};
use crate::config::Config;
use crate::error::Result;
use crate::output::{deliver, DeliveryReport};
use crate::repo::{FileIndex, GitIndex};
use crate::render::{render_document, RenderOptions};

/// Resolve the clipboard backend: flags win over the config file
pub fn resolve_backend(cli: &Cli, config: &Config) -> Result<ClipboardBackend> {
    if cli.no_clipboard {
        return Ok(ClipboardBackend::None);
    }

    let backend = match &cli.clipboard {
        Some(name) => name.parse::<ClipboardBackend>()?,
        None => config.clipboard.backend()?,
    };
    Ok(backend)
}

/// Resolve render options: `--all`/`--no-hidden` win over the config file
pub fn resolve_options(cli: &Cli, config: &Config) -> RenderOptions {
    let include_hidden = if cli.all {
        true
    } else if cli.no_hidden {
        false
    } else {
        config.render.include_hidden
    };
    RenderOptions::new().with_hidden(include_hidden)
}

/// Run the render command
pub fn run(cli: &Cli, config: &Config) -> Result<DeliveryReport> {
    let options = resolve_options(cli, config);
    let backend = resolve_backend(cli, config)?;

    let index = GitIndex::open(&cli.directory)?;
    tracing::info!(dir = %index.dir().display(), source = index.name(), "Listing tracked files");

    let paths = index.tracked_paths()?;
    let document = render_document(&paths, &options);

    let sink = match select_sink(backend, Platform::detect()) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::warn!("Clipboard copy skipped: {}", e);
            None
        }
    };

    let mut stdout = io::stdout().lock();
    deliver(&document, cli.output.as_deref(), &mut stdout, sink.as_deref())
}
