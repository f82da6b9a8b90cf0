/// Options controlling a single render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Include paths with a segment starting with `.`
    pub include_hidden: bool,
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include hidden paths
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}
