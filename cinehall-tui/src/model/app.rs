//! Main application state.

use crate::notice::{ActiveNotice, Notice, NoticeLevel};

use super::{
    FocusPanel, ModalState, MoviesState, NavigationState, OrdersState, Page, UsersState,
};

/// The whole application state: the single source of truth read by the view
/// layer and mutated only by the update layer.
pub struct App {
    /// Exit flag.
    pub should_quit: bool,

    /// Which panel owns keyboard input.
    pub focus: FocusPanel,

    /// Navigation menu state.
    pub navigation: NavigationState,

    /// Page shown in the content panel.
    pub current_page: Page,

    /// Transient status-bar toast.
    pub notice: Option<ActiveNotice>,

    // === Per-page state ===
    /// Ticket orders page.
    pub orders: OrdersState,
    /// Movie catalogue page.
    pub movies: MoviesState,
    /// Registered users page.
    pub users: UsersState,

    /// Modal dialog state.
    pub modal: ModalState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Orders,
            notice: None,
            orders: OrdersState::new(),
            movies: MoviesState::new(),
            users: UsersState::new(),
            modal: ModalState::new(),
        }
    }

    /// Raises the catalog notice for `key`. Unknown keys are a no-op.
    pub fn notify_key(&mut self, key: &str) {
        if let Some(notice) = crate::notice::lookup(key) {
            self.notice = Some(ActiveNotice::new(notice));
        }
    }

    /// Raises a free-text error notice (guard messages outside the catalog).
    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(ActiveNotice::new(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Drops the notice once its display window has passed.
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(ActiveNotice::is_expired) {
            self.notice = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
