use crate::clipboard::{find_binary, pipe_to, ClipboardSink};
use crate::error::ClipboardUnavailable;

/// X11 CLIPBOARD selection via xclip
pub struct XclipSink;

impl XclipSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XclipSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for XclipSink {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        find_binary("xclip").is_some()
    }

    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable> {
        pipe_to("xclip", &["-selection", "clipboard"], text)
    }
}
