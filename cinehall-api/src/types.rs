//! Wire types for the Cinehall admin API.
//!
//! The backend is a Node-style JSON API: collections are wrapped in a
//! `{ "data": [...] }` envelope, entities carry a Mongo-style `_id`, and
//! field names are camelCase.

use serde::{Deserialize, Serialize};

/// Generic response envelope used by the collection endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload; the backend omits it on some error responses.
    pub data: Option<T>,
}

fn default_genre() -> Vec<String> {
    vec![String::new()]
}

/// One movie listing as returned by the backend.
///
/// `id` is `None` for a record the backend returned without `_id`; list
/// consumers must substitute a position-based row key in that case so every
/// rendered row stays uniquely addressable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub age_restriction: u32,
    /// Poster URL.
    pub image: String,
    pub target_audience: String,
    /// Ordered genre tags; always at least one element (`[""]` when unset).
    #[serde(default = "default_genre")]
    pub genre: Vec<String>,
    /// Screening date (ISO date string).
    pub available_date: String,
    /// Screening time (HH:MM string).
    pub available_time: String,
    /// Projection format, e.g. "2D" / "3D".
    pub format: String,
    pub price: f64,
    pub hall_number: u32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub country: String,
    pub year: i32,
    pub description: String,
    /// Sold-ticket count; only present on the order feed.
    #[serde(rename = "ticket_count", skip_serializing_if = "Option::is_none")]
    pub ticket_count: Option<u64>,
}

/// Request body for creating or updating a movie listing.
///
/// Same shape as [`Movie`] minus the server-owned fields (`_id`,
/// `ticket_count`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub age_restriction: u32,
    pub image: String,
    pub target_audience: String,
    pub genre: Vec<String>,
    pub available_date: String,
    pub available_time: String,
    pub format: String,
    pub price: f64,
    pub hall_number: u32,
    pub director: String,
    pub duration: u32,
    pub country: String,
    pub year: i32,
    pub description: String,
}

/// Update request body: the full draft plus the id of the record to replace.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateMovieRequest<'a> {
    #[serde(flatten)]
    pub draft: &'a MovieDraft,
    pub id: &'a str,
}

/// One registered user as returned by `/user/get-all-users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phonenumber: String,
}

/// Joins genre tags into the comma-delimited form the edit form displays.
#[must_use]
pub fn join_genre(genre: &[String]) -> String {
    genre.join(",")
}

/// Splits raw comma-delimited form input back into ordered genre tags.
///
/// No trimming, no de-duplication: the empty input yields `[""]`, matching
/// the unset default. Joining and re-splitting round-trips any sequence
/// whose elements contain no comma.
#[must_use]
pub fn split_genre(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
