use std::fmt;

use super::filter::filter_hidden;
use super::options::RenderOptions;
use super::tree::render_tree;

pub const OPEN_TAG: &str = "<context name=\"directoryStructure\" description=\"Below is a snapshot of this project's file structure at the start of the session. This snapshot will NOT update during the session. It only lists files tracked by git.\">";

pub const CLOSE_TAG: &str = "</context>";

/// Body line used when no tracked path survives filtering
pub const EMPTY_PLACEHOLDER: &str = "# No tracked files found";

/// The final text handed to the output sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    lines: Vec<String>,
    path_count: usize,
}

impl RenderedDocument {
    fn wrap(body: Vec<String>, path_count: usize) -> Self {
        let mut lines = Vec::with_capacity(body.len() + 3);
        lines.push(OPEN_TAG.to_string());
        lines.push(String::new());
        lines.extend(body);
        lines.push(CLOSE_TAG.to_string());

        Self { lines, path_count }
    }

    /// All lines, tags included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Tree lines between the blank line and the close tag
    pub fn body(&self) -> &[String] {
        &self.lines[2..self.lines.len() - 1]
    }

    /// Number of file paths rendered
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    pub fn is_empty(&self) -> bool {
        self.path_count == 0
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Filter, fold and wrap a sorted path list.
pub fn render_document(paths: &[String], options: &RenderOptions) -> RenderedDocument {
    let filtered = filter_hidden(paths, options.include_hidden);

    tracing::debug!(
        total = paths.len(),
        kept = filtered.len(),
        include_hidden = options.include_hidden,
        "Rendering tree"
    );

    if filtered.is_empty() {
        return RenderedDocument::wrap(vec![EMPTY_PLACEHOLDER.to_string()], 0);
    }

    let body = render_tree(filtered.as_slice());
    RenderedDocument::wrap(body, filtered.len())
}
