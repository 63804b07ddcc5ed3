//! Content panel update logic.

use crate::message::ContentMessage;
use crate::model::{App, Page};

/// Handles content panel messages.
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== List navigation ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
        }

        // ========== CRUD ==========
        ContentMessage::Add => {
            handle_add(app);
        }
        ContentMessage::Edit => {
            handle_edit(app);
        }
        ContentMessage::Delete => {
            handle_delete(app);
        }
    }
}

// ========== List navigation ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Orders => app.orders.select_previous(),
        Page::Movies => app.movies.select_previous(),
        Page::Users => app.users.select_previous(),
    }
}

fn handle_select_next(app: &mut App) {
    match app.current_page {
        Page::Orders => app.orders.select_next(),
        Page::Movies => app.movies.select_next(),
        Page::Users => app.users.select_next(),
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Orders => app.orders.select_first(),
        Page::Movies => app.movies.select_first(),
        Page::Users => app.users.select_first(),
    }
}

fn handle_select_last(app: &mut App) {
    match app.current_page {
        Page::Orders => app.orders.select_last(),
        Page::Movies => app.movies.select_last(),
        Page::Users => app.users.select_last(),
    }
}

// ========== CRUD ==========

fn handle_add(app: &mut App) {
    match app.current_page {
        Page::Movies => {
            app.modal.show_create_movie();
        }
        _ => {
            app.notify_error("Adding is only available on the Movies page");
        }
    }
}

fn handle_edit(app: &mut App) {
    if app.current_page != Page::Movies {
        app.notify_error("Editing is only available on the Movies page");
        return;
    }

    let Some(row) = app.movies.selected_record() else {
        app.notify_error("No movie selected");
        return;
    };

    // A row without a server id has nothing to address the update at;
    // editing it would target an undefined resource path.
    let Some(id) = row.movie.id.clone() else {
        app.notify_error("Selected movie has no server id; refresh and try again");
        return;
    };

    let movie = row.movie.clone();
    app.modal.show_edit_movie(id, &movie);
}

fn handle_delete(app: &mut App) {
    if app.current_page != Page::Movies {
        app.notify_error("Deleting is only available on the Movies page");
        return;
    }

    let Some(row) = app.movies.selected_record() else {
        app.notify_error("No movie selected");
        return;
    };

    let Some(id) = row.movie.id.clone() else {
        app.notify_error("Selected movie has no server id; refresh and try again");
        return;
    };

    let title = row.movie.title.clone();
    app.modal.show_confirm_delete(&title, &id);
}
