//! Repository file index providers.

mod git;

pub use git::GitIndex;

use crate::error::Result;

/// Source of the tracked file list.
pub trait FileIndex {
    /// Get the name of this provider
    fn name(&self) -> &'static str;

    /// Tracked paths, `/`-separated, sorted byte-wise
    fn tracked_paths(&self) -> Result<Vec<String>>;
}

/// Sort byte-wise and drop duplicates
pub fn sort_paths(mut paths: Vec<String>) -> Vec<String> {
    paths.sort_unstable();
    paths.dedup();
    paths
}
