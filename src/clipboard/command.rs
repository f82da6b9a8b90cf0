use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ClipboardUnavailable;

/// Locate an executable on `PATH`
pub fn find_binary(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;

    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Run `program` with `args` and write `text` to its stdin.
pub fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardUnavailable> {
    let spawn_err = |source| ClipboardUnavailable::Spawn {
        program: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_err)?;

    // stdin is dropped after the write so the child sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait().map_err(spawn_err)?;
    if !status.success() {
        return Err(ClipboardUnavailable::Failed {
            program: program.to_string(),
            status: status.to_string(),
        });
    }
    written.map_err(spawn_err)?;

    tracing::debug!(program, bytes = text.len(), "Copied to clipboard");
    Ok(())
}
