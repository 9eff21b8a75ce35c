//! Actions that modules can return to communicate with the app

use crate::app::Screen;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to another screen
    Navigate(Screen),

    /// Put text on the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Write the visible rows of the active screen to disk
    Export,

    /// Ask the catalog source for fresh data
    Reload,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

impl Action {
    pub fn info(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Info)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Action::Notify(text.into(), NotifyLevel::Warn)
    }
}
