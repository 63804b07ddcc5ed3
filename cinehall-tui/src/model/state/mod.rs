//! Per-page data state.
//!
//! `Page` says which page is on screen; these structs hold what each page
//! shows: rows, cursor position, loading flags, fetch generations.

mod modal;
mod movies;
mod orders;
mod users;

pub use modal::{FormMode, MOVIE_FIELDS, Modal, ModalState, MovieField, MovieForm};
pub use movies::MoviesState;
pub use orders::OrdersState;
pub use users::UsersState;
