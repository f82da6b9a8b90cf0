use crate::clipboard::{find_binary, pipe_to, ClipboardSink};
use crate::error::ClipboardUnavailable;

/// Windows clipboard, also reachable from WSL
pub struct ClipExeSink;

impl ClipExeSink {
    pub fn new() -> Self {
        Self
    }

    fn find_program() -> Option<&'static str> {
        ["clip.exe", "clip"]
            .into_iter()
            .find(|name| find_binary(name).is_some())
    }
}

impl Default for ClipExeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for ClipExeSink {
    fn name(&self) -> &'static str {
        "clip"
    }

    fn is_available(&self) -> bool {
        Self::find_program().is_some()
    }

    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable> {
        let program =
            Self::find_program().ok_or_else(|| ClipboardUnavailable::BackendMissing("clip".into()))?;
        pipe_to(program, &[], text)
    }
}
