//! Cinehall Admin TUI
//!
//! Terminal dashboard for cinema administrators: browse ticket orders,
//! manage the movie catalogue, and inspect registered users against the
//! Cinehall REST backend.
//!
//! ## Architecture
//!
//! The Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: async bridge to `cinehall-api` (`backend/`)
//!
//! Network calls are spawned onto the tokio runtime; their completions come
//! back into the loop as `Data` messages through an unbounded channel.

mod app;
mod backend;
mod config;
mod event;
mod message;
mod model;
mod notice;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::Backend;
use cinehall_api::AdminClient;
use config::AppConfig;
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration (file, then env override).
    let config = AppConfig::load()?;
    view::theme::set_theme_index(config.theme.index());

    // 2. Backend bridge.
    let client = AdminClient::new(config.api_base_url.clone());
    let (tx, mut completions) = mpsc::unbounded_channel();
    let backend = Backend::new(Arc::new(client), tx);

    // 3. Terminal and application state.
    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    // 4. Initial fetch for the landing page.
    let landing_page = app.current_page;
    update::refresh_page(&mut app, &backend, landing_page);

    // 5. Main loop; restore the terminal whatever the outcome.
    let result = app::run(&mut terminal, &mut app, &backend, &mut completions).await;

    restore_terminal(&mut terminal)?;

    result
}
