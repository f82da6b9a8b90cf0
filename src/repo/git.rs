use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::{sort_paths, FileIndex};
use crate::error::{Result, TreeError};

/// Tracked files of the git working tree containing `dir`.
#[derive(Debug, Clone)]
pub struct GitIndex {
    dir: PathBuf,
}

impl GitIndex {
    /// Open the working tree containing `dir`.
    ///
    /// Fails with `NotARepository` when `dir` is not inside a working tree,
    /// or when git itself cannot be run.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let index = Self { dir: dir.into() };

        match index.git(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(output)
                if output.status.success()
                    && String::from_utf8_lossy(&output.stdout).trim() == "true" =>
            {
                tracing::debug!(dir = %index.dir.display(), "Found git working tree");
                Ok(index)
            }
            Ok(output) => {
                tracing::debug!(
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "git rev-parse rejected directory"
                );
                Err(TreeError::NotARepository(index.dir))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to run git");
                Err(TreeError::NotARepository(index.dir))
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git").arg("-C").arg(&self.dir).args(args).output()
    }
}

impl FileIndex for GitIndex {
    fn name(&self) -> &'static str {
        "git"
    }

    fn tracked_paths(&self) -> Result<Vec<String>> {
        let output = self
            .git(&["ls-files", "-z"])
            .map_err(|e| TreeError::Command(format!("git ls-files: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TreeError::Command(format!(
                "git ls-files failed: {}",
                stderr.trim()
            )));
        }

        let paths = parse_nul_separated(&output.stdout);
        tracing::debug!(count = paths.len(), "Listed tracked files");

        Ok(sort_paths(paths))
    }
}

/// Split `ls-files -z` output into paths.
fn parse_nul_separated(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| match std::str::from_utf8(chunk) {
            Ok(path) => path.to_string(),
            Err(_) => {
                let lossy = String::from_utf8_lossy(chunk).into_owned();
                tracing::warn!(path = %lossy, "Tracked path is not valid UTF-8, rendering it lossily");
                lossy
            }
        })
        .collect()
}
