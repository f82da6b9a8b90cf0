pub mod completions;
pub mod render;
