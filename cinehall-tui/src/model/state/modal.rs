//! Modal/dialog state.

use cinehall_api::{Movie, MovieDraft, join_genre, split_genre};

/// Form field definition for the movie dialog.
#[derive(Debug, Clone)]
pub struct MovieField {
    /// Field key (matches the backend's camelCase field name).
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Placeholder text shown while the field is empty.
    pub placeholder: &'static str,
}

/// The movie dialog's fields, in form order.
pub const MOVIE_FIELDS: &[MovieField] = &[
    MovieField {
        key: "title",
        label: "Title",
        placeholder: "Movie title",
    },
    MovieField {
        key: "ageRestriction",
        label: "Age restriction",
        placeholder: "Minimum age",
    },
    MovieField {
        key: "image",
        label: "Poster URL",
        placeholder: "Poster image URL",
    },
    MovieField {
        key: "targetAudience",
        label: "Target audience",
        placeholder: "Who is it for",
    },
    MovieField {
        key: "genre",
        label: "Genres",
        placeholder: "Genres (separate with commas)",
    },
    MovieField {
        key: "availableDate",
        label: "Screening date",
        placeholder: "YYYY-MM-DD",
    },
    MovieField {
        key: "availableTime",
        label: "Screening time",
        placeholder: "HH:MM",
    },
    MovieField {
        key: "format",
        label: "Format",
        placeholder: "Format (2D, 3D)",
    },
    MovieField {
        key: "price",
        label: "Ticket price",
        placeholder: "Price in dollars",
    },
    MovieField {
        key: "hallNumber",
        label: "Hall number",
        placeholder: "Hall number",
    },
    MovieField {
        key: "director",
        label: "Director",
        placeholder: "Director",
    },
    MovieField {
        key: "duration",
        label: "Duration (min)",
        placeholder: "Running time in minutes",
    },
    MovieField {
        key: "country",
        label: "Country",
        placeholder: "Production country",
    },
    MovieField {
        key: "year",
        label: "Year",
        placeholder: "Production year",
    },
    MovieField {
        key: "description",
        label: "Description",
        placeholder: "Short description of the movie",
    },
];

/// Working copy of one movie edited in the create/edit dialog.
///
/// Every field is kept as the raw string the operator typed; nothing is
/// coerced until the submit boundary. `genre` is the one exception in
/// shape: the raw comma-delimited input is re-split on every change, so an
/// empty input is `[""]`, matching the unset default.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieForm {
    pub title: String,
    pub age_restriction: String,
    pub image: String,
    pub target_audience: String,
    pub genre: Vec<String>,
    pub available_date: String,
    pub available_time: String,
    pub format: String,
    pub price: String,
    pub hall_number: String,
    pub director: String,
    pub duration: String,
    pub country: String,
    pub year: String,
    pub description: String,
}

impl Default for MovieForm {
    /// The all-defaults template used by the create dialog.
    fn default() -> Self {
        Self {
            title: String::new(),
            age_restriction: "0".to_string(),
            image: String::new(),
            target_audience: String::new(),
            genre: vec![String::new()],
            available_date: String::new(),
            available_time: String::new(),
            format: String::new(),
            price: "0".to_string(),
            hall_number: "0".to_string(),
            director: String::new(),
            duration: "0".to_string(),
            country: String::new(),
            year: "2024".to_string(),
            description: String::new(),
        }
    }
}

impl MovieForm {
    /// Copies every field of an existing record into the form.
    pub fn from_movie(movie: &Movie) -> Self {
        let genre = if movie.genre.is_empty() {
            vec![String::new()]
        } else {
            movie.genre.clone()
        };
        Self {
            title: movie.title.clone(),
            age_restriction: movie.age_restriction.to_string(),
            image: movie.image.clone(),
            target_audience: movie.target_audience.clone(),
            genre,
            available_date: movie.available_date.clone(),
            available_time: movie.available_time.clone(),
            format: movie.format.clone(),
            price: movie.price.to_string(),
            hall_number: movie.hall_number.to_string(),
            director: movie.director.clone(),
            duration: movie.duration.to_string(),
            country: movie.country.clone(),
            year: movie.year.to_string(),
            description: movie.description.clone(),
        }
    }

    fn plain_field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "title" => Some(&mut self.title),
            "ageRestriction" => Some(&mut self.age_restriction),
            "image" => Some(&mut self.image),
            "targetAudience" => Some(&mut self.target_audience),
            "availableDate" => Some(&mut self.available_date),
            "availableTime" => Some(&mut self.available_time),
            "format" => Some(&mut self.format),
            "price" => Some(&mut self.price),
            "hallNumber" => Some(&mut self.hall_number),
            "director" => Some(&mut self.director),
            "duration" => Some(&mut self.duration),
            "country" => Some(&mut self.country),
            "year" => Some(&mut self.year),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }

    /// The raw display value of a field; genres are shown comma-joined.
    pub fn value(&self, key: &str) -> String {
        if key == "genre" {
            return join_genre(&self.genre);
        }
        match key {
            "title" => self.title.clone(),
            "ageRestriction" => self.age_restriction.clone(),
            "image" => self.image.clone(),
            "targetAudience" => self.target_audience.clone(),
            "availableDate" => self.available_date.clone(),
            "availableTime" => self.available_time.clone(),
            "format" => self.format.clone(),
            "price" => self.price.clone(),
            "hallNumber" => self.hall_number.clone(),
            "director" => self.director.clone(),
            "duration" => self.duration.clone(),
            "country" => self.country.clone(),
            "year" => self.year.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    /// Stores a raw value. The genre field is split on commas verbatim (no
    /// trimming, no de-duplication); every other field keeps the input
    /// untouched. Unknown keys are ignored.
    pub fn set_value(&mut self, key: &str, raw: &str) {
        if key == "genre" {
            self.genre = split_genre(raw);
        } else if let Some(field) = self.plain_field_mut(key) {
            *field = raw.to_string();
        }
    }

    /// Appends one typed character to a field.
    pub fn input_char(&mut self, key: &str, ch: char) {
        let mut raw = self.value(key);
        raw.push(ch);
        self.set_value(key, &raw);
    }

    /// Removes the last character of a field.
    pub fn backspace(&mut self, key: &str) {
        let mut raw = self.value(key);
        raw.pop();
        self.set_value(key, &raw);
    }

    /// Converts the form into a request body.
    ///
    /// Numeric fields parse leniently: unparseable input falls back to
    /// zero instead of blocking the submit.
    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            age_restriction: self.age_restriction.trim().parse().unwrap_or_default(),
            image: self.image.clone(),
            target_audience: self.target_audience.clone(),
            genre: self.genre.clone(),
            available_date: self.available_date.clone(),
            available_time: self.available_time.clone(),
            format: self.format.clone(),
            price: self.price.trim().parse().unwrap_or_default(),
            hall_number: self.hall_number.trim().parse().unwrap_or_default(),
            director: self.director.clone(),
            duration: self.duration.trim().parse().unwrap_or_default(),
            country: self.country.clone(),
            year: self.year.trim().parse().unwrap_or_default(),
            description: self.description.clone(),
        }
    }
}

/// Whether the movie dialog creates a new record or replaces an existing
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Modal dialogs.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Create/edit movie dialog.
    MovieForm {
        mode: FormMode,
        form: MovieForm,
        /// Index into [`MOVIE_FIELDS`] of the focused input.
        focus: usize,
        /// A save request is in flight; further submits are ignored.
        submitting: bool,
        /// Validation error shown under the form.
        error: Option<String>,
    },
    /// Yes/no prompt gating a delete.
    ConfirmDelete {
        /// Title of the movie about to be deleted.
        title: String,
        /// Server id of the record.
        movie_id: String,
        /// 0 = cancel (default), 1 = delete.
        focus: usize,
    },
    /// Keybinding overview.
    Help,
    /// Error notice dialog.
    Error { title: String, message: String },
}

/// Container for the active modal, if any.
#[derive(Debug, Default)]
pub struct ModalState {
    /// `None` = no modal open.
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Opens the create dialog with the all-defaults template.
    pub fn show_create_movie(&mut self) {
        self.active = Some(Modal::MovieForm {
            mode: FormMode::Create,
            form: MovieForm::default(),
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    /// Opens the edit dialog pre-filled from an existing record.
    pub fn show_edit_movie(&mut self, id: String, movie: &Movie) {
        self.active = Some(Modal::MovieForm {
            mode: FormMode::Edit { id },
            form: MovieForm::from_movie(movie),
            focus: 0,
            submitting: false,
            error: None,
        });
    }

    /// Opens the delete confirmation prompt.
    pub fn show_confirm_delete(&mut self, title: &str, movie_id: &str) {
        self.active = Some(Modal::ConfirmDelete {
            title: title.to_string(),
            movie_id: movie_id.to_string(),
            focus: 0,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_matches_dialog_defaults() {
        let form = MovieForm::default();
        assert_eq!(form.genre, vec![String::new()]);
        assert_eq!(form.year, "2024");
        assert_eq!(form.price, "0");
        assert!(form.title.is_empty());
    }

    #[test]
    fn from_movie_copies_fields_and_defaults_genre() {
        let movie = Movie {
            id: Some("1".to_string()),
            title: "Up".to_string(),
            age_restriction: 6,
            price: 8.5,
            genre: Vec::new(),
            ..Movie::default()
        };
        let form = MovieForm::from_movie(&movie);
        assert_eq!(form.title, "Up");
        assert_eq!(form.age_restriction, "6");
        assert_eq!(form.price, "8.5");
        // Records without genre tags fall back to the one-empty-tag default.
        assert_eq!(form.genre, vec![String::new()]);
    }

    #[test]
    fn genre_input_splits_on_every_change() {
        let mut form = MovieForm::default();
        form.set_value("genre", "action, thriller");
        assert_eq!(form.genre, vec!["action", " thriller"]);

        form.input_char("genre", ',');
        assert_eq!(form.genre, vec!["action", " thriller", ""]);

        form.backspace("genre");
        assert_eq!(form.genre, vec!["action", " thriller"]);
    }

    #[test]
    fn genre_display_round_trips() {
        let mut form = MovieForm::default();
        form.set_value("genre", "a,b,c");
        assert_eq!(form.value("genre"), "a,b,c");
    }

    #[test]
    fn plain_fields_store_raw_values() {
        let mut form = MovieForm::default();
        form.set_value("price", "not-a-number");
        assert_eq!(form.price, "not-a-number");
        // Lenient parse at the submit boundary.
        assert!((form.to_draft().price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn to_draft_parses_numbers() {
        let mut form = MovieForm::default();
        form.set_value("ageRestriction", "16");
        form.set_value("price", "12.5");
        form.set_value("hallNumber", "3");
        form.set_value("duration", "120");
        form.set_value("year", "2019");
        let draft = form.to_draft();
        assert_eq!(draft.age_restriction, 16);
        assert!((draft.price - 12.5).abs() < f64::EPSILON);
        assert_eq!(draft.hall_number, 3);
        assert_eq!(draft.duration, 120);
        assert_eq!(draft.year, 2019);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut form = MovieForm::default();
        form.set_value("nope", "value");
        assert_eq!(form, MovieForm::default());
        assert_eq!(form.value("nope"), "");
    }
}
