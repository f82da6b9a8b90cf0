mod clip_exe;
mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use clip_exe::ClipExeSink;
pub use pbcopy::PbcopySink;
pub use wl_copy::WlCopySink;
pub use xclip::XclipSink;
pub use xsel::XselSink;
