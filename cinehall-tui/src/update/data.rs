//! Async completion handling.
//!
//! Applies backend results to the model. Fetch completions are accepted
//! only when their generation tag matches the page's current one: the view
//! keeps whatever it showed before, and a late response belonging to an
//! abandoned fetch (overlapping refresh, page re-entered) is dropped on the
//! floor.

use crate::backend::Backend;
use crate::message::{DataMessage, SaveMode};
use crate::model::App;
use crate::model::domain::MovieRow;
use crate::model::state::Modal;

/// Applies a backend completion to the model.
pub fn update(app: &mut App, backend: &Backend, msg: DataMessage) {
    match msg {
        DataMessage::MoviesLoaded { epoch, result } => {
            if epoch != app.movies.epoch {
                log::debug!("discarding stale movie fetch (epoch {epoch})");
                return;
            }
            match result {
                Ok(movies) => {
                    app.movies.set_records(MovieRow::with_keys(movies));
                }
                Err(e) => {
                    // Prior records stay on screen untouched.
                    app.movies.loading = false;
                    app.movies.error = Some(e.to_string());
                    app.notify_key("err-fetch-movies");
                }
            }
        }

        DataMessage::OrdersLoaded { epoch, result } => {
            if epoch != app.orders.epoch {
                log::debug!("discarding stale order fetch (epoch {epoch})");
                return;
            }
            match result {
                Ok(rows) => {
                    app.orders.set_rows(rows);
                }
                Err(e) => {
                    app.orders.loading = false;
                    app.orders.error = Some(e.to_string());
                    app.notify_key("err-fetch-orders");
                }
            }
        }

        DataMessage::UsersLoaded { epoch, result } => {
            if epoch != app.users.epoch {
                log::debug!("discarding stale user fetch (epoch {epoch})");
                return;
            }
            match result {
                Ok(rows) => {
                    app.users.set_rows(rows);
                }
                Err(e) => {
                    app.users.loading = false;
                    app.users.error = Some(e.to_string());
                    app.notify_key("err-fetch-users");
                }
            }
        }

        DataMessage::MovieSaved { mode, result } => match result {
            Ok(()) => {
                // Dialog closes, the form with it; the fresh list comes
                // from a single full re-fetch.
                app.modal.close();
                app.notify_key(match mode {
                    SaveMode::Create => "add-movie",
                    SaveMode::Update => "update-movie",
                });
                refresh_movies(app, backend);
            }
            Err(_) => {
                // Dialog stays open with the operator's input intact; no
                // rollback is needed since nothing was applied locally.
                if let Some(Modal::MovieForm {
                    ref mut submitting, ..
                }) = app.modal.active
                {
                    *submitting = false;
                }
                app.notify_key(match mode {
                    SaveMode::Create => "err-add-movie",
                    SaveMode::Update => "err-update-movie",
                });
            }
        },

        DataMessage::MovieDeleted { result } => match result {
            Ok(()) => {
                app.notify_key("delete-movie");
                refresh_movies(app, backend);
            }
            Err(_) => {
                // The stale entry stays visible until a manual refresh.
                app.notify_key("err-delete-movie");
            }
        },
    }
}

fn refresh_movies(app: &mut App, backend: &Backend) {
    let epoch = app.movies.begin_fetch();
    backend.fetch_movies(epoch);
}
