//! Ticket orders page state.

use cinehall_api::Movie;

/// State of the read-only orders page.
///
/// The order feed is the movie collection annotated with sold-ticket
/// counts; there is no separate order entity.
#[derive(Debug, Default)]
pub struct OrdersState {
    /// Rows from the last successful fetch.
    pub rows: Vec<Movie>,
    /// Index of the highlighted row.
    pub selected: usize,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last fetch error, if any.
    pub error: Option<String>,
    /// Fetch generation, see `MoviesState::epoch`.
    pub epoch: u64,
}

impl OrdersState {
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

    pub fn set_rows(&mut self, rows: Vec<Movie>) {
        self.rows = rows;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        self.loading = false;
        self.error = None;
    }
}
