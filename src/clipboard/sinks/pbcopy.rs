use crate::clipboard::{find_binary, pipe_to, ClipboardSink};
use crate::error::ClipboardUnavailable;

/// macOS pasteboard
pub struct PbcopySink;

impl PbcopySink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PbcopySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for PbcopySink {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn is_available(&self) -> bool {
        find_binary("pbcopy").is_some()
    }

    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable> {
        pipe_to("pbcopy", &[], text)
    }
}
