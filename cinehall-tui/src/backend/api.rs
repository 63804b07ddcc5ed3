//! The API seam between the dashboard and `cinehall-api`.
//!
//! The trait exists so the update layer can be exercised against a scripted
//! double; production wires in [`AdminClient`] unchanged.

use async_trait::async_trait;
use cinehall_api::{AdminClient, Movie, MovieDraft, Result as ApiResult, User};

/// Admin backend operations used by the dashboard.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetches the full movie collection.
    async fn list_movies(&self) -> ApiResult<Vec<Movie>>;

    /// Creates a movie listing.
    async fn create_movie(&self, draft: MovieDraft) -> ApiResult<()>;

    /// Replaces the movie listing with the given id.
    async fn update_movie(&self, id: String, draft: MovieDraft) -> ApiResult<()>;

    /// Deletes the movie listing with the given id.
    async fn delete_movie(&self, id: String) -> ApiResult<()>;

    /// Fetches all registered users.
    async fn list_users(&self) -> ApiResult<Vec<User>>;
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        AdminClient::list_movies(self).await
    }

    async fn create_movie(&self, draft: MovieDraft) -> ApiResult<()> {
        AdminClient::create_movie(self, &draft).await
    }

    async fn update_movie(&self, id: String, draft: MovieDraft) -> ApiResult<()> {
        AdminClient::update_movie(self, &id, &draft).await
    }

    async fn delete_movie(&self, id: String) -> ApiResult<()> {
        AdminClient::delete_movie(self, &id).await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        AdminClient::list_users(self).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted API double for update-layer tests.

    use std::sync::Mutex;

    use super::*;

    /// Records every call and answers from pre-scripted results.
    pub(crate) struct MockAdminApi {
        pub movies_result: Mutex<ApiResult<Vec<Movie>>>,
        pub users_result: Mutex<ApiResult<Vec<User>>>,
        pub create_result: Mutex<ApiResult<()>>,
        pub update_result: Mutex<ApiResult<()>>,
        pub delete_result: Mutex<ApiResult<()>>,
        /// Call log: `list_movies`, `create_movie`, `update_movie:{id}`, ...
        pub calls: Mutex<Vec<String>>,
    }

    impl MockAdminApi {
        pub fn new() -> Self {
            Self {
                movies_result: Mutex::new(Ok(Vec::new())),
                users_result: Mutex::new(Ok(Vec::new())),
                create_result: Mutex::new(Ok(())),
                update_result: Mutex::new(Ok(())),
                delete_result: Mutex::new(Ok(())),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        pub fn call_count(&self, prefix: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.starts_with(prefix))
                .count()
        }
    }

    #[async_trait]
    impl AdminApi for MockAdminApi {
        async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
            self.record("list_movies".to_string());
            self.movies_result.lock().unwrap().clone()
        }

        async fn create_movie(&self, _draft: MovieDraft) -> ApiResult<()> {
            self.record("create_movie".to_string());
            self.create_result.lock().unwrap().clone()
        }

        async fn update_movie(&self, id: String, _draft: MovieDraft) -> ApiResult<()> {
            self.record(format!("update_movie:{id}"));
            self.update_result.lock().unwrap().clone()
        }

        async fn delete_movie(&self, id: String) -> ApiResult<()> {
            self.record(format!("delete_movie:{id}"));
            self.delete_result.lock().unwrap().clone()
        }

        async fn list_users(&self) -> ApiResult<Vec<User>> {
            self.record("list_users".to_string());
            self.users_result.lock().unwrap().clone()
        }
    }
}
