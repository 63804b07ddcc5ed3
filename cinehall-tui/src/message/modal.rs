//! Modal dialog messages.

/// Modal message.
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the dialog, discarding any in-progress edits.
    Close,

    /// Focus the next input field.
    NextField,

    /// Focus the previous input field.
    PrevField,

    /// Submit / confirm.
    Confirm,

    /// Toggle cancel/confirm focus in the delete prompt.
    ToggleDeleteFocus,

    /// Type a character into the focused field.
    Input(char),

    /// Delete the character before the cursor.
    Backspace,
}
