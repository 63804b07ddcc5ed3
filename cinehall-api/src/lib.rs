//! # cinehall-api
//!
//! Typed async client for the Cinehall cinema-ticketing admin API.
//!
//! Covers the five admin endpoints:
//!
//! | Action | Method | Path |
//! |--------|--------|------|
//! | List movies | GET | `/admin/get-movies` |
//! | Create movie | POST | `/admin/add-movie` |
//! | Update movie | PATCH | `/admin/edit-movie/{id}` |
//! | Delete movie | DELETE | `/admin/delete-movie/{id}` |
//! | List users | GET | `/user/get-all-users` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — use the platform's native TLS backend.
//! - **`rustls`** — use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cinehall_api::AdminClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdminClient::new("http://localhost:5000");
//!     for movie in client.list_movies().await? {
//!         println!("{} ({})", movie.title, movie.year);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod types;

pub use client::AdminClient;
pub use error::{ApiError, Result};
pub use types::{ApiEnvelope, Movie, MovieDraft, User, join_genre, split_genre};
