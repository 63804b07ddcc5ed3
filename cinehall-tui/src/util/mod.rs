//! Infrastructure helpers: terminal initialization and restore.

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
