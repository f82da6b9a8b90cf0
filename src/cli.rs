use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Render the tracked file tree of a git repository as a context block
#[derive(Parser, Debug)]
#[command(name = "repo-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Include hidden paths (any segment starting with '.')
    #[arg(short, long)]
    pub all: bool,

    /// Exclude hidden paths even if the config file includes them
    #[arg(long, conflicts_with = "all")]
    pub no_hidden: bool,

    /// Write the tree to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Clipboard backend (auto, pbcopy, wl-copy, xclip, xsel, clip, none)
    #[arg(long, value_name = "BACKEND")]
    pub clipboard: Option<String>,

    /// Don't copy the tree to the clipboard
    #[arg(long, conflicts_with = "clipboard")]
    pub no_clipboard: bool,

    /// Path to configuration file
    #[arg(short, long, env = "REPO_TREE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
