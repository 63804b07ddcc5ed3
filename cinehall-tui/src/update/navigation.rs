//! Navigation update logic.

use crate::backend::Backend;
use crate::message::NavigationMessage;
use crate::model::{App, NavItemId, Page};

/// Handles navigation messages.
pub fn update(app: &mut App, backend: &Backend, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.current_page = page_from_nav_id(id);
                app.clear_notice();
                // Entering a page re-fetches its collection, like the
                // web dashboard's on-mount fetch.
                super::refresh_page(app, backend, app.current_page);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}

/// Maps a navigation entry to its page.
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Orders => Page::Orders,
        NavItemId::Movies => Page::Movies,
        NavItemId::Users => Page::Users,
    }
}
