//! Clipboard sinks backed by platform copy commands.
//!
//! Every sink pipes the document into an external program's stdin. The sink
//! is picked once at startup: either the backend named in the configuration,
//! or the first available entry of the platform's preference list.

mod command;
pub mod sinks;

pub use command::{find_binary, pipe_to};

use std::fmt;
use std::str::FromStr;

use crate::error::{ClipboardUnavailable, ConfigError};
use sinks::{ClipExeSink, PbcopySink, WlCopySink, XclipSink, XselSink};

/// Trait for clipboard backends
pub trait ClipboardSink {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Check if this backend is usable on the current system
    fn is_available(&self) -> bool;

    /// Place `text` in the clipboard
    fn send(&self, text: &str) -> Result<(), ClipboardUnavailable>;
}

/// Host operating system, as far as clipboard commands are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Wsl,
    Windows,
    Other,
}

impl Platform {
    /// Sniff the current host
    pub fn detect() -> Self {
        let platform = Self::from_os(std::env::consts::OS, is_wsl());
        tracing::debug!(?platform, "Detected platform");
        platform
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str, wsl: bool) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" if wsl => Platform::Wsl,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    /// Backends to probe, in order
    pub fn preference(&self) -> &'static [ClipboardBackend] {
        use ClipboardBackend::*;

        match self {
            Platform::MacOs => &[Pbcopy],
            Platform::Linux => &[WlCopy, Xclip, Xsel],
            Platform::Wsl => &[Clip, WlCopy, Xclip, Xsel],
            Platform::Windows => &[Clip],
            Platform::Other => &[Xclip, Xsel],
        }
    }
}

fn is_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() {
        return true;
    }

    std::fs::read_to_string("/proc/version")
        .map(|v| v.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    #[default]
    Auto,
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
    Clip,
    None,
}

impl ClipboardBackend {
    pub const NAMES: &'static [&'static str] =
        &["auto", "pbcopy", "wl-copy", "xclip", "xsel", "clip", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::Pbcopy => "pbcopy",
            ClipboardBackend::WlCopy => "wl-copy",
            ClipboardBackend::Xclip => "xclip",
            ClipboardBackend::Xsel => "xsel",
            ClipboardBackend::Clip => "clip",
            ClipboardBackend::None => "none",
        }
    }

    /// Concrete sink for a named backend. `Auto` and `None` have none.
    pub fn sink(&self) -> Option<Box<dyn ClipboardSink>> {
        match self {
            ClipboardBackend::Pbcopy => Some(Box::new(PbcopySink::new())),
            ClipboardBackend::WlCopy => Some(Box::new(WlCopySink::new())),
            ClipboardBackend::Xclip => Some(Box::new(XclipSink::new())),
            ClipboardBackend::Xsel => Some(Box::new(XselSink::new())),
            ClipboardBackend::Clip => Some(Box::new(ClipExeSink::new())),
            ClipboardBackend::Auto | ClipboardBackend::None => None,
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipboardBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ClipboardBackend::Auto),
            "pbcopy" => Ok(ClipboardBackend::Pbcopy),
            "wl-copy" | "wl_copy" | "wayland" => Ok(ClipboardBackend::WlCopy),
            "xclip" => Ok(ClipboardBackend::Xclip),
            "xsel" => Ok(ClipboardBackend::Xsel),
            "clip" | "clip.exe" => Ok(ClipboardBackend::Clip),
            "none" | "off" => Ok(ClipboardBackend::None),
            other => Err(ConfigError::Invalid(format!(
                "unknown clipboard backend '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            ))),
        }
    }
}

/// Pick the clipboard sink to use for this run.
///
/// `Ok(None)` means the clipboard is switched off.
pub fn select_sink(
    backend: ClipboardBackend,
    platform: Platform,
) -> Result<Option<Box<dyn ClipboardSink>>, ClipboardUnavailable> {
    match backend {
        ClipboardBackend::None => Ok(None),
        ClipboardBackend::Auto => {
            let candidates = platform
                .preference()
                .iter()
                .filter_map(|b| b.sink())
                .collect();
            first_available(candidates).map(Some)
        }
        named => match named.sink() {
            Some(sink) if sink.is_available() => Ok(Some(sink)),
            _ => Err(ClipboardUnavailable::BackendMissing(named.to_string())),
        },
    }
}

/// First sink whose probe succeeds, in the given order
pub fn first_available(
    candidates: Vec<Box<dyn ClipboardSink>>,
) -> Result<Box<dyn ClipboardSink>, ClipboardUnavailable> {
    let tried = candidates
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ");

    for sink in candidates {
        if sink.is_available() {
            tracing::debug!(backend = sink.name(), "Selected clipboard backend");
            return Ok(sink);
        }
        tracing::trace!(backend = sink.name(), "Clipboard backend not available");
    }

    Err(ClipboardUnavailable::NotFound { tried })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSink {
        name: &'static str,
        available: bool,
    }

    impl ClipboardSink for FakeSink {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn send(&self, _text: &str) -> Result<(), ClipboardUnavailable> {
            Ok(())
        }
    }

    fn fake(name: &'static str, available: bool) -> Box<dyn ClipboardSink> {
        Box::new(FakeSink { name, available })
    }

    #[test]
    fn test_platform_from_os() {
        assert_eq!(Platform::from_os("macos", false), Platform::MacOs);
        assert_eq!(Platform::from_os("linux", false), Platform::Linux);
        assert_eq!(Platform::from_os("linux", true), Platform::Wsl);
        assert_eq!(Platform::from_os("windows", false), Platform::Windows);
        assert_eq!(Platform::from_os("freebsd", false), Platform::Other);
    }

    #[test]
    fn test_preference_order() {
        use ClipboardBackend::*;

        assert_eq!(Platform::MacOs.preference(), &[Pbcopy]);
        assert_eq!(Platform::Linux.preference(), &[WlCopy, Xclip, Xsel]);
        assert_eq!(Platform::Wsl.preference()[0], Clip);
        assert_eq!(Platform::Windows.preference(), &[Clip]);
    }

    #[test]
    fn test_preference_lists_only_real_sinks() {
        for platform in [
            Platform::MacOs,
            Platform::Linux,
            Platform::Wsl,
            Platform::Windows,
            Platform::Other,
        ] {
            for backend in platform.preference() {
                assert!(backend.sink().is_some(), "{backend} has no sink");
            }
        }
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!("auto".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Auto);
        assert_eq!("AUTO".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Auto);
        assert_eq!("wl-copy".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::WlCopy);
        assert_eq!("clip.exe".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Clip);
        assert_eq!("none".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::None);
        assert!("invalid".parse::<ClipboardBackend>().is_err());
    }

    #[test]
    fn test_backend_names_round_trip() {
        for name in ClipboardBackend::NAMES {
            let backend: ClipboardBackend = name.parse().unwrap();
            assert_eq!(backend.as_str(), *name);
        }
    }

    #[test]
    fn test_first_available_respects_order() {
        let sink = first_available(vec![
            fake("first", false),
            fake("second", true),
            fake("third", true),
        ])
        .unwrap();
        assert_eq!(sink.name(), "second");
    }

    #[test]
    fn test_first_available_none_found() {
        let err = first_available(vec![fake("a", false), fake("b", false)])
            .err()
            .unwrap();
        match err {
            ClipboardUnavailable::NotFound { tried } => assert_eq!(tried, "a, b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_select_none_disables_clipboard() {
        let sink = select_sink(ClipboardBackend::None, Platform::Linux).unwrap();
        assert!(sink.is_none());
    }

    #[test]
    fn test_select_auto_does_not_panic() {
        // Depends on what is installed; only the shape of the result matters
        match select_sink(ClipboardBackend::Auto, Platform::detect()) {
            Ok(sink) => assert!(sink.is_some()),
            Err(err) => assert!(matches!(err, ClipboardUnavailable::NotFound { .. })),
        }
    }
}
