use crate::clipboard::{find_binary, pipe_to, ClipboardSink};
use crate::error::ClipboardUnavailable;

pub struct XselSink;

impl XselSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XselSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for XselSink {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn is_available(&self) -> bool {
        find_binary("xsel").is_some()
    }

    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable> {
        pipe_to("xsel", &["--clipboard", "--input"], text)
    }
}
