//! Content panel messages: list navigation and CRUD triggers.

/// Content panel message.
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== List navigation ==========
    /// Move the cursor up.
    SelectPrevious,
    /// Move the cursor down.
    SelectNext,
    /// Jump to the first row.
    SelectFirst,
    /// Jump to the last row.
    SelectLast,

    // ========== CRUD ==========
    /// Open the create dialog.
    Add,
    /// Open the edit dialog for the highlighted row.
    Edit,
    /// Open the delete confirmation for the highlighted row.
    Delete,
}
