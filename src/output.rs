//! Delivery of the rendered document to stdout, a file and the clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardSink;
use crate::error::{Result, TreeError};
use crate::render::RenderedDocument;

/// Which sinks received the document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub stdout: bool,
    pub file: Option<PathBuf>,
    /// Name of the clipboard backend that took the text
    pub clipboard: Option<&'static str>,
}

/// Write `document` to `output` (or `stdout` when no path is given) and copy
/// it to the clipboard if a sink is selected.
///
/// Clipboard failures are logged and never fail the delivery.
pub fn deliver<W: Write>(
    document: &RenderedDocument,
    output: Option<&Path>,
    stdout: &mut W,
    clipboard: Option<&dyn ClipboardSink>,
) -> Result<DeliveryReport> {
    let mut report = DeliveryReport::default();
    let text = document.to_string();

    let clip_text = match output {
        Some(path) => {
            write_file(path, &text)?;
            tracing::info!(path = %path.display(), paths = document.path_count(), "Wrote tree");
            report.file = Some(path.to_path_buf());

            // The clipboard gets what actually landed on disk
            if clipboard.is_some() {
                Some(read_file(path)?)
            } else {
                None
            }
        }
        None => {
            match stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                Ok(()) => report.stdout = true,
                // Reader went away (e.g. `| head`); nothing more to print
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!("stdout closed early");
                }
                Err(source) => {
                    return Err(TreeError::Io {
                        path: PathBuf::from("<stdout>"),
                        source,
                    })
                }
            }
            Some(text)
        }
    };

    if let (Some(sink), Some(text)) = (clipboard, clip_text) {
        match sink.send(&text) {
            Ok(()) => {
                tracing::info!(backend = sink.name(), "Copied tree to clipboard");
                report.clipboard = Some(sink.name());
            }
            Err(e) => tracing::warn!("Clipboard copy skipped: {}", e),
        }
    }

    Ok(report)
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
