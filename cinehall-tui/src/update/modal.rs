//! Modal dialog update logic.

use crate::backend::Backend;
use crate::message::ModalMessage;
use crate::model::state::{MOVIE_FIELDS, Modal};
use crate::model::{App, FormMode};

/// Handles modal messages, dispatching on the active dialog.
pub fn update(app: &mut App, backend: &Backend, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::MovieForm { .. } => handle_movie_form(app, backend, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, backend, msg),
        Modal::Help | Modal::Error { .. } => handle_simple_modal(app, msg),
    }
}

/// Handles the create/edit movie dialog.
fn handle_movie_form(app: &mut App, backend: &Backend, msg: ModalMessage) {
    let Some(Modal::MovieForm {
        ref mode,
        ref mut form,
        ref mut focus,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    let total_fields = MOVIE_FIELDS.len();

    match msg {
        ModalMessage::Close => {
            // In-progress edits are discarded; nothing was applied locally.
            app.modal.close();
            app.clear_notice();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % total_fields;
        }

        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = total_fields - 1;
            } else {
                *focus -= 1;
            }
        }

        ModalMessage::Input(ch) => {
            form.input_char(MOVIE_FIELDS[*focus].key, ch);
            *error = None;
        }

        ModalMessage::Backspace => {
            form.backspace(MOVIE_FIELDS[*focus].key);
        }

        ModalMessage::Confirm => {
            if *submitting {
                return;
            }

            // Required fields, nothing more: the form accepts whatever the
            // operator typed everywhere else.
            if form.title.is_empty() || form.age_restriction.is_empty() {
                *error =
                    Some("Please fill in the required fields (title, age restriction)".to_string());
                return;
            }

            let draft = form.to_draft();
            *submitting = true;

            // Exactly one request kind fires per submit.
            match mode {
                FormMode::Edit { id } => backend.update_movie(id.clone(), draft),
                FormMode::Create => backend.create_movie(draft),
            }
        }

        ModalMessage::ToggleDeleteFocus => {
            // Not applicable to this dialog.
        }
    }
}

/// Handles the delete confirmation prompt.
fn handle_confirm_delete(app: &mut App, backend: &Backend, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref movie_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                // Confirmed: the destructive call fires only from here.
                let id = movie_id.clone();
                app.modal.close();
                backend.delete_movie(id);
            } else {
                // Declined: no network call, records untouched.
                app.modal.close();
            }
        }

        _ => {}
    }
}

/// Handles the help and error dialogs.
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        _ => {}
    }
}
