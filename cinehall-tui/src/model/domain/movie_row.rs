//! Keyed movie rows for the catalogue table.

use cinehall_api::Movie;

/// One table row: a movie plus its guaranteed-unique row key.
///
/// The key is the server `_id` when present. When the backend omits `_id`,
/// a `movie-{index}` key derived from the record's position in the fetched
/// batch is substituted so no two rows collapse onto the same key. A
/// position-derived key is not stable across re-fetches; rows without an id
/// therefore cannot be edited or deleted, only displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub key: String,
    pub movie: Movie,
}

impl MovieRow {
    /// Attaches row keys to a fetched batch.
    pub fn with_keys(movies: Vec<Movie>) -> Vec<MovieRow> {
        movies
            .into_iter()
            .enumerate()
            .map(|(index, movie)| {
                let key = movie
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("movie-{index}"));
                MovieRow { key, movie }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: Option<&str>, title: &str) -> Movie {
        Movie {
            id: id.map(str::to_string),
            title: title.to_string(),
            ..Movie::default()
        }
    }

    #[test]
    fn server_id_wins_as_key() {
        let rows = MovieRow::with_keys(vec![movie(Some("1"), "A")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "1");
        assert_eq!(rows[0].movie.title, "A");
    }

    #[test]
    fn missing_id_gets_positional_key() {
        let rows = MovieRow::with_keys(vec![movie(None, "B")]);
        assert_eq!(rows[0].key, "movie-0");
        assert!(rows[0].movie.id.is_none());
    }

    #[test]
    fn keys_are_unique_in_mixed_batches() {
        let rows = MovieRow::with_keys(vec![
            movie(None, "A"),
            movie(Some("x"), "B"),
            movie(None, "C"),
            movie(Some("y"), "D"),
        ]);
        let mut keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), rows.len());
    }
}
