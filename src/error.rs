use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Not inside a git working tree: {0}")]
    NotARepository(PathBuf),

    #[error("Unsupported runtime: {0}")]
    UnsupportedRuntime(String),

    #[error("Unrecognized argument: {0}")]
    UnrecognizedArgument(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardUnavailable),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {0}")]
    Command(String),
}

impl TreeError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TreeError::NotARepository(_)
            | TreeError::UnsupportedRuntime(_)
            | TreeError::UnrecognizedArgument(_)
            | TreeError::Clipboard(_)
            | TreeError::Config(_)
            | TreeError::Io { .. }
            | TreeError::Command(_) => 1,
        }
    }
}

/// No clipboard mechanism could take the document. Never fatal.
#[derive(Error, Debug)]
pub enum ClipboardUnavailable {
    #[error("no clipboard command found (tried: {tried})")]
    NotFound { tried: String },

    #[error("clipboard backend '{0}' is not available")]
    BackendMissing(String),

    #[error("failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
