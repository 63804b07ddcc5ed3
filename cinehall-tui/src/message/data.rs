//! Async completion messages.
//!
//! Every backend call finishes by posting one of these into the main loop's
//! channel. Fetch completions carry the generation tag of the request that
//! started them; the update layer discards completions whose tag no longer
//! matches the view, so a late response cannot mutate state it no longer
//! owns.

use cinehall_api::{ApiError, Movie, User};

/// Which save operation a [`DataMessage::MovieSaved`] completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

/// Backend completion message.
#[derive(Debug, Clone)]
pub enum DataMessage {
    /// The movie list fetch finished.
    MoviesLoaded {
        epoch: u64,
        result: Result<Vec<Movie>, ApiError>,
    },

    /// The ticket order fetch finished.
    OrdersLoaded {
        epoch: u64,
        result: Result<Vec<Movie>, ApiError>,
    },

    /// The user list fetch finished.
    UsersLoaded {
        epoch: u64,
        result: Result<Vec<User>, ApiError>,
    },

    /// A create or update call finished.
    MovieSaved {
        mode: SaveMode,
        result: Result<(), ApiError>,
    },

    /// A delete call finished.
    MovieDeleted { result: Result<(), ApiError> },
}
