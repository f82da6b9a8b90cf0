mod document;
mod filter;
mod options;
mod tree;

pub use document::{
    render_document, RenderedDocument, CLOSE_TAG, EMPTY_PLACEHOLDER, OPEN_TAG,
};
pub use filter::{filter_hidden, is_hidden};
pub use options::RenderOptions;
pub use tree::{render_tree, INDENT_WIDTH};
