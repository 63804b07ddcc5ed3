//! Model layer: application state.
//!
//! The model is the single source of truth. It holds pure data structures
//! and no business logic; all mutation goes through the update layer, all
//! reads through the view layer.
//!
//! `Page` is the room number — it only identifies which page is on screen.
//! The structs under `state/` are the rooms' contents: rows, cursors,
//! loading flags, the open modal.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub mod domain;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    FormMode, MOVIE_FIELDS, Modal, ModalState, MovieForm, MoviesState, OrdersState, UsersState,
};
