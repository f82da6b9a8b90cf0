//! repo-tree - render the tracked file tree of a git repository
//!
//! This crate provides functionality for:
//! - Listing tracked files from the git index
//! - Folding sorted paths into an indented, tagged tree document
//! - Delivering the document to stdout, a file and the OS clipboard

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod repo;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use render::{render_document, RenderOptions, RenderedDocument};
