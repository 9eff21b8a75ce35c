//! Shared context passed to modules

use crate::data::Catalog;

/// Shared context available to all modules
#[derive(Debug, Default)]
pub struct Context {
    /// Loaded records; modules only read from it
    pub catalog: Catalog,

    /// Last text copied with `y`
    pub clipboard: Option<String>,

    /// Where the catalog came from, for display
    pub source: String,
}

impl Context {
    pub fn new(catalog: Catalog, source: impl Into<String>) -> Self {
        Self {
            catalog,
            clipboard: None,
            source: source.into(),
        }
    }

    /// Set clipboard content
    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }
}
