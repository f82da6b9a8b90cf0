use crate::clipboard::{find_binary, pipe_to, ClipboardSink};
use crate::error::ClipboardUnavailable;

/// Wayland clipboard via wl-clipboard
pub struct WlCopySink;

impl WlCopySink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WlCopySink {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for WlCopySink {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn is_available(&self) -> bool {
        // wl-copy hangs without a compositor to talk to
        std::env::var_os("WAYLAND_DISPLAY").is_some() && find_binary("wl-copy").is_some()
    }

    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable> {
        pipe_to("wl-copy", &[], text)
    }
}
