//! The admin API client.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http::{execute_request, expect_success, parse_json};
use crate::types::{ApiEnvelope, Movie, MovieDraft, UpdateMovieRequest, User};

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared `reqwest` client with sane timeouts.
fn create_http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client for the Cinehall admin REST API.
///
/// One instance per backend; cheap to clone the underlying connection pool
/// is shared. All methods are cancel-safe: dropping the future abandons the
/// request without side effects on this side.
pub struct AdminClient {
    client: Client,
    base_url: String,
}

impl AdminClient {
    /// Creates a client against the given base URL
    /// (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Lists all movie listings.
    ///
    /// The backend wraps the collection in a `{ data: [...] }` envelope; a
    /// missing `data` field is treated as an empty collection.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let path = "/admin/get-movies";
        let (status, body) =
            execute_request(self.client.get(self.url(path)), "GET", path).await?;
        let body = expect_success(status, body, "GET", path)?;
        let envelope: ApiEnvelope<Vec<Movie>> = parse_json(&body, path)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Creates a new movie listing. The response body is ignored.
    pub async fn create_movie(&self, draft: &MovieDraft) -> Result<()> {
        let path = "/admin/add-movie";
        let (status, body) = execute_request(
            self.client.post(self.url(path)).json(draft),
            "POST",
            path,
        )
        .await?;
        expect_success(status, body, "POST", path)?;
        Ok(())
    }

    /// Replaces all fields of the movie listing with the given id.
    pub async fn update_movie(&self, id: &str, draft: &MovieDraft) -> Result<()> {
        let path = format!("/admin/edit-movie/{}", urlencoding::encode(id));
        let request = UpdateMovieRequest { draft, id };
        let (status, body) = execute_request(
            self.client.patch(self.url(&path)).json(&request),
            "PATCH",
            &path,
        )
        .await?;
        expect_success(status, body, "PATCH", &path)?;
        Ok(())
    }

    /// Deletes the movie listing with the given id.
    pub async fn delete_movie(&self, id: &str) -> Result<()> {
        let path = format!("/admin/delete-movie/{}", urlencoding::encode(id));
        let (status, body) =
            execute_request(self.client.delete(self.url(&path)), "DELETE", &path).await?;
        expect_success(status, body, "DELETE", &path)?;
        Ok(())
    }

    /// Lists all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let path = "/user/get-all-users";
        let (status, body) =
            execute_request(self.client.get(self.url(path)), "GET", path).await?;
        let body = expect_success(status, body, "GET", path)?;
        let envelope: ApiEnvelope<Vec<User>> = parse_json(&body, path)?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AdminClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.url("/admin/get-movies"),
            "http://localhost:5000/admin/get-movies"
        );
    }

    #[test]
    fn ids_are_url_encoded() {
        let encoded = urlencoding::encode("we ird/id");
        assert_eq!(encoded, "we%20ird%2Fid");
    }
}
