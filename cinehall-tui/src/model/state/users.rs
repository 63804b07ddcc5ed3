//! Registered users page state.

use cinehall_api::User;

/// State of the read-only users page.
#[derive(Debug, Default)]
pub struct UsersState {
    pub rows: Vec<User>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Fetch generation, see `MoviesState::epoch`.
    pub epoch: u64,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
    }

    pub fn set_rows(&mut self, rows: Vec<User>) {
        self.rows = rows;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        self.loading = false;
        self.error = None;
    }
}
