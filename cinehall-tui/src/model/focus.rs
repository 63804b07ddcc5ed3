//! Focus state.

/// Which panel owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left navigation panel.
    #[default]
    Navigation,
    /// Right content panel.
    Content,
}

impl FocusPanel {
    /// Switches to the other panel.
    #[must_use]
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
