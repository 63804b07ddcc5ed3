//! Top-level message enum.

use super::{ContentMessage, DataMessage, ModalMessage, NavigationMessage};

/// Application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application.
    Quit,

    /// Toggle focus between the navigation and content panels.
    ToggleFocus,

    /// Navigation panel messages.
    Navigation(NavigationMessage),

    /// Content panel messages.
    Content(ContentMessage),

    /// Modal dialog messages.
    Modal(ModalMessage),

    /// Async completion from the backend layer.
    Data(DataMessage),

    /// Re-fetch the current page.
    Refresh,

    /// Show the help overlay.
    ShowHelp,

    /// Clear the status-bar notice (Esc outside a dialog).
    ClearNotice,

    /// No-op (unhandled event).
    Noop,
}
