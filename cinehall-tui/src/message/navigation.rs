//! Navigation panel messages.

/// Navigation message.
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Move the highlight up.
    SelectPrevious,
    /// Move the highlight down.
    SelectNext,
    /// Enter the highlighted page.
    Confirm,
    /// Jump to the first entry.
    SelectFirst,
    /// Jump to the last entry.
    SelectLast,
}
