//! Event layer: turns keyboard input into messages.
//!
//! The handler never mutates state; it reads the model only to decide where
//! a keystroke should go (open dialog first, then global shortcuts, then
//! the focused panel).

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
