//! Backend layer: the async bridge between the UI and the admin API.
//!
//! The main loop is synchronous; every network call is spawned onto the
//! tokio runtime and finishes by posting a [`DataMessage`] into the loop's
//! channel. Fetches carry the generation tag handed out by the page state
//! so stale completions can be told apart from current ones.

mod api;

use std::sync::Arc;

use cinehall_api::MovieDraft;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, DataMessage, SaveMode};

pub use api::AdminApi;
#[cfg(test)]
pub(crate) use api::mock::MockAdminApi;

/// Dispatches admin API calls and routes their completions back to the
/// main loop.
pub struct Backend {
    api: Arc<dyn AdminApi>,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    pub fn new(api: Arc<dyn AdminApi>, tx: UnboundedSender<AppMessage>) -> Self {
        Self { api, tx }
    }

    /// Fetches the movie collection for the catalogue page.
    pub fn fetch_movies(&self, epoch: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_movies().await;
            if let Err(e) = &result {
                log::warn!("movie fetch failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::MoviesLoaded { epoch, result }));
        });
    }

    /// Fetches the ticket order feed (the movie collection annotated with
    /// sold-ticket counts).
    pub fn fetch_orders(&self, epoch: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_movies().await;
            if let Err(e) = &result {
                log::warn!("order fetch failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::OrdersLoaded { epoch, result }));
        });
    }

    /// Fetches all registered users.
    pub fn fetch_users(&self, epoch: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_users().await;
            if let Err(e) = &result {
                log::warn!("user fetch failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::UsersLoaded { epoch, result }));
        });
    }

    /// Creates a movie listing.
    pub fn create_movie(&self, draft: MovieDraft) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.create_movie(draft).await;
            if let Err(e) = &result {
                log::warn!("movie create failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::MovieSaved {
                mode: SaveMode::Create,
                result,
            }));
        });
    }

    /// Replaces the movie listing with the given id.
    pub fn update_movie(&self, id: String, draft: MovieDraft) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.update_movie(id, draft).await;
            if let Err(e) = &result {
                log::warn!("movie update failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::MovieSaved {
                mode: SaveMode::Update,
                result,
            }));
        });
    }

    /// Deletes the movie listing with the given id.
    pub fn delete_movie(&self, id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.delete_movie(id).await;
            if let Err(e) = &result {
                log::warn!("movie delete failed: {e}");
            }
            let _ = tx.send(AppMessage::Data(DataMessage::MovieDeleted { result }));
        });
    }
}
