//! Update layer: state update logic.
//!
//! The only place the model is mutated. Simple messages are handled in the
//! dispatch below; navigation, content, modal, and data completions are
//! delegated to submodules. Operations that need the network hand off to
//! the backend layer, whose completions come back as
//! [`DataMessage`](crate::message::DataMessage)s through the same dispatch.

mod content;
mod data;
mod modal;
mod navigation;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::{App, Page};

/// Handles one application message.
pub fn update(app: &mut App, backend: &Backend, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // Focus stays put while a dialog is open.
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, backend, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, backend, modal_msg);
        }

        AppMessage::Data(data_msg) => {
            data::update(app, backend, data_msg);
        }

        AppMessage::Refresh => {
            refresh_page(app, backend, app.current_page);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearNotice => {
            app.clear_notice();
        }

        AppMessage::Noop => {}
    }
}

/// Starts a fetch for the given page's collection.
pub fn refresh_page(app: &mut App, backend: &Backend, page: Page) {
    match page {
        Page::Orders => {
            let epoch = app.orders.begin_fetch();
            backend.fetch_orders(epoch);
        }
        Page::Movies => {
            let epoch = app.movies.begin_fetch();
            backend.fetch_movies(epoch);
        }
        Page::Users => {
            let epoch = app.users.begin_fetch();
            backend.fetch_users(epoch);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use cinehall_api::{ApiError, Movie};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use crate::backend::{AdminApi, Backend, MockAdminApi};
    use crate::message::{
        AppMessage, ContentMessage, DataMessage, ModalMessage, NavigationMessage, SaveMode,
    };
    use crate::model::domain::MovieRow;
    use crate::model::state::Modal;
    use crate::model::{App, FormMode, Page};
    use crate::notice::NoticeLevel;

    use super::{refresh_page, update};

    fn test_backend() -> (Backend, Arc<MockAdminApi>, UnboundedReceiver<AppMessage>) {
        let api = Arc::new(MockAdminApi::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Backend::new(Arc::clone(&api) as Arc<dyn AdminApi>, tx);
        (backend, api, rx)
    }

    fn movies_app() -> App {
        let mut app = App::new();
        app.current_page = Page::Movies;
        app
    }

    fn movie(id: Option<&str>, title: &str) -> Movie {
        Movie {
            id: id.map(str::to_string),
            title: title.to_string(),
            ..Movie::default()
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }
    }

    async fn recv(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for a backend completion")
            .expect("backend channel closed")
    }

    fn notice_text(app: &App) -> &str {
        &app.notice.as_ref().expect("expected a notice").notice.text
    }

    #[tokio::test]
    async fn create_submit_success_closes_dialog_and_refreshes_once() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();

        app.modal.show_create_movie();
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Input('U')));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Input('p')));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));

        let saved = recv(&mut rx).await;
        assert!(matches!(
            saved,
            AppMessage::Data(DataMessage::MovieSaved {
                mode: SaveMode::Create,
                result: Ok(()),
            })
        ));
        update(&mut app, &backend, saved);

        // Dialog closed, success toast raised, one refresh dispatched.
        assert!(!app.modal.is_open());
        assert_eq!(notice_text(&app), "Movie successfully saved.");
        assert!(app.movies.loading);

        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);
        assert!(!app.movies.loading);

        assert_eq!(api.call_count("create_movie"), 1);
        assert_eq!(api.call_count("update_movie"), 0);
        assert_eq!(api.call_count("list_movies"), 1);
    }

    #[tokio::test]
    async fn create_failure_keeps_dialog_and_input() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        *api.create_result.lock().unwrap() = Err(server_error());

        app.modal.show_create_movie();
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Input('X')));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));

        let saved = recv(&mut rx).await;
        update(&mut app, &backend, saved);

        // Dialog stays open with the typed input intact; no refresh fires.
        match app.modal.active {
            Some(Modal::MovieForm {
                ref form,
                submitting,
                ..
            }) => {
                assert_eq!(form.title, "X");
                assert!(!submitting);
            }
            ref other => panic!("expected the form to stay open, got {other:?}"),
        }
        assert_eq!(notice_text(&app), "An error occurred while saving.");
        assert!(app.movies.records.is_empty());
        assert_eq!(api.call_count("list_movies"), 0);
    }

    #[tokio::test]
    async fn submit_without_required_fields_is_rejected_locally() {
        let (backend, api, _rx) = test_backend();
        let mut app = movies_app();

        app.modal.show_create_movie();
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));

        match app.modal.active {
            Some(Modal::MovieForm { ref error, .. }) => assert!(error.is_some()),
            ref other => panic!("expected the form to stay open, got {other:?}"),
        }
        assert_eq!(api.call_count("create_movie"), 0);
    }

    #[tokio::test]
    async fn edit_submit_targets_update_by_id_and_never_creates() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        app.movies
            .set_records(MovieRow::with_keys(vec![movie(Some("42"), "Old Title")]));

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Edit));
        match app.modal.active {
            Some(Modal::MovieForm {
                ref mode, ref form, ..
            }) => {
                assert_eq!(*mode, FormMode::Edit { id: "42".to_string() });
                assert_eq!(form.title, "Old Title");
            }
            ref other => panic!("expected the edit form, got {other:?}"),
        }

        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));
        let saved = recv(&mut rx).await;
        update(&mut app, &backend, saved);

        assert!(!app.modal.is_open());
        assert_eq!(notice_text(&app), "Movie updated successfully.");
        assert_eq!(api.call_count("update_movie:42"), 1);
        assert_eq!(api.call_count("create_movie"), 0);
    }

    #[tokio::test]
    async fn edit_failure_leaves_records_and_dialog_untouched() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        *api.update_result.lock().unwrap() = Err(server_error());
        let rows = MovieRow::with_keys(vec![movie(Some("42"), "Old Title")]);
        app.movies.set_records(rows.clone());

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Edit));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Input('!')));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));
        let saved = recv(&mut rx).await;
        update(&mut app, &backend, saved);

        assert_eq!(app.movies.records, rows);
        match app.modal.active {
            Some(Modal::MovieForm { ref form, .. }) => {
                assert_eq!(form.title, "Old Title!");
            }
            ref other => panic!("expected the form to stay open, got {other:?}"),
        }
        assert_eq!(api.call_count("list_movies"), 0);
    }

    #[tokio::test]
    async fn edit_without_server_id_is_refused() {
        let (backend, _api, _rx) = test_backend();
        let mut app = movies_app();
        app.movies
            .set_records(MovieRow::with_keys(vec![movie(None, "Orphan")]));

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Edit));

        assert!(!app.modal.is_open());
        let notice = &app.notice.as_ref().unwrap().notice;
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn declined_delete_issues_no_call() {
        let (backend, api, _rx) = test_backend();
        let mut app = movies_app();
        let rows = MovieRow::with_keys(vec![movie(Some("9"), "Doomed")]);
        app.movies.set_records(rows.clone());

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Delete));
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { focus: 0, .. })
        ));

        // Confirm with the focus still on Cancel.
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));

        assert!(!app.modal.is_open());
        assert_eq!(api.call_count("delete_movie"), 0);
        assert_eq!(app.movies.records, rows);
    }

    #[tokio::test]
    async fn confirmed_delete_fires_call_then_refreshes() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        app.movies
            .set_records(MovieRow::with_keys(vec![movie(Some("9"), "Doomed")]));

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Delete));
        update(
            &mut app,
            &backend,
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus),
        );
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));

        let deleted = recv(&mut rx).await;
        assert!(matches!(
            deleted,
            AppMessage::Data(DataMessage::MovieDeleted { result: Ok(()) })
        ));
        update(&mut app, &backend, deleted);

        assert_eq!(notice_text(&app), "Movie deleted.");
        assert_eq!(api.call_count("delete_movie:9"), 1);

        // The success is followed by a list call.
        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);
        assert_eq!(api.call_count("list_movies"), 1);
    }

    #[tokio::test]
    async fn delete_failure_keeps_stale_entry_visible() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        *api.delete_result.lock().unwrap() = Err(server_error());
        let rows = MovieRow::with_keys(vec![movie(Some("9"), "Doomed")]);
        app.movies.set_records(rows.clone());

        update(&mut app, &backend, AppMessage::Content(ContentMessage::Delete));
        update(
            &mut app,
            &backend,
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus),
        );
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Confirm));
        let deleted = recv(&mut rx).await;
        update(&mut app, &backend, deleted);

        assert_eq!(notice_text(&app), "An error occurred while deleting.");
        assert_eq!(app.movies.records, rows);
        assert_eq!(api.call_count("list_movies"), 0);
    }

    #[tokio::test]
    async fn fetch_success_replaces_records_with_keyed_rows() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        *api.movies_result.lock().unwrap() =
            Ok(vec![movie(Some("1"), "A"), movie(None, "B")]);

        refresh_page(&mut app, &backend, Page::Movies);
        assert!(app.movies.loading);

        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);

        assert!(!app.movies.loading);
        assert_eq!(app.movies.records.len(), 2);
        assert_eq!(app.movies.records[0].key, "1");
        assert_eq!(app.movies.records[0].movie.title, "A");
        assert_eq!(app.movies.records[1].key, "movie-1");
        assert_eq!(app.movies.records[1].movie.title, "B");
    }

    #[tokio::test]
    async fn fetch_failure_keeps_prior_records_and_raises_notice() {
        let (backend, api, mut rx) = test_backend();
        let mut app = movies_app();
        let rows = MovieRow::with_keys(vec![movie(Some("1"), "A")]);
        app.movies.set_records(rows.clone());
        *api.movies_result.lock().unwrap() = Err(server_error());

        refresh_page(&mut app, &backend, Page::Movies);
        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);

        assert!(!app.movies.loading);
        assert_eq!(app.movies.records, rows);
        assert_eq!(notice_text(&app), "Could not load the movie list.");
    }

    #[tokio::test]
    async fn stale_epoch_completion_is_discarded() {
        let (backend, _api, _rx) = test_backend();
        let mut app = movies_app();
        let _superseded = app.movies.begin_fetch();
        let current = app.movies.begin_fetch();
        assert!(current > 1);

        // A completion from the superseded fetch arrives late.
        update(
            &mut app,
            &backend,
            AppMessage::Data(DataMessage::MoviesLoaded {
                epoch: current - 1,
                result: Ok(vec![movie(Some("z"), "Late")]),
            }),
        );

        // Neither the records nor the loading flag of the newer fetch move.
        assert!(app.movies.records.is_empty());
        assert!(app.movies.loading);
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn read_only_pages_raise_notices_on_fetch_failure() {
        let (backend, api, mut rx) = test_backend();
        let mut app = App::new();
        *api.movies_result.lock().unwrap() = Err(server_error());
        *api.users_result.lock().unwrap() = Err(server_error());

        refresh_page(&mut app, &backend, Page::Orders);
        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);
        assert_eq!(notice_text(&app), "Could not load the ticket list.");

        refresh_page(&mut app, &backend, Page::Users);
        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);
        assert_eq!(notice_text(&app), "Could not load the user list.");
    }

    #[tokio::test]
    async fn entering_a_page_triggers_its_fetch() {
        let (backend, api, mut rx) = test_backend();
        let mut app = App::new();
        *api.users_result.lock().unwrap() = Ok(vec![cinehall_api::User {
            id: Some("u1".to_string()),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phonenumber: "+1555".to_string(),
        }]);

        // Navigate down to Users and confirm.
        update(
            &mut app,
            &backend,
            AppMessage::Navigation(NavigationMessage::SelectNext),
        );
        update(
            &mut app,
            &backend,
            AppMessage::Navigation(NavigationMessage::SelectNext),
        );
        update(
            &mut app,
            &backend,
            AppMessage::Navigation(NavigationMessage::Confirm),
        );

        assert_eq!(app.current_page, Page::Users);
        assert!(app.users.loading);

        let loaded = recv(&mut rx).await;
        update(&mut app, &backend, loaded);
        assert_eq!(app.users.rows.len(), 1);
        assert_eq!(app.users.rows[0].name, "Ada");
        assert_eq!(api.call_count("list_users"), 1);
    }

    #[tokio::test]
    async fn closing_the_dialog_discards_edits() {
        let (backend, _api, _rx) = test_backend();
        let mut app = movies_app();

        app.modal.show_create_movie();
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Input('Z')));
        update(&mut app, &backend, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());

        // Reopening starts from the all-defaults template.
        app.modal.show_create_movie();
        match app.modal.active {
            Some(Modal::MovieForm { ref form, .. }) => assert!(form.title.is_empty()),
            ref other => panic!("expected a fresh form, got {other:?}"),
        }
    }
}
