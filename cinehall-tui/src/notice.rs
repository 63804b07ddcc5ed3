//! Transient toast notifications.
//!
//! A fixed catalog maps string keys to user-facing success/error texts;
//! unrecognized keys produce no visible effect. Callers fire and forget —
//! nothing branches on the outcome of raising a notice.

use std::time::{Duration, Instant};

/// How long a notice stays on the status bar.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Severity of a notice, used only for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One user-facing toast message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// A notice plus the moment it was raised, for expiry.
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub raised_at: Instant,
}

impl ActiveNotice {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() > NOTICE_TTL
    }
}

/// Looks up the fixed text for a notification key.
///
/// Returns `None` for keys outside the catalog; an unknown key is a no-op
/// at the call sites, never an error.
pub fn lookup(key: &str) -> Option<Notice> {
    match key {
        // Account flows (shared platform catalog).
        "register" => Some(Notice::success("Code sent to your email, please confirm.")),
        "error-register" => Some(Notice::error("This email is already registered.")),
        "otp" => Some(Notice::success(
            "Done! Your OTP has been verified successfully.",
        )),
        "error-otp" => Some(Notice::error("Invalid OTP. Please try again.")),
        "login" => Some(Notice::success("You're in! Logged in successfully.")),
        "error-login" => Some(Notice::error("Login failed. Please try again later.")),

        // Movie catalogue.
        "add-movie" => Some(Notice::success("Movie successfully saved.")),
        "err-add-movie" => Some(Notice::error("An error occurred while saving.")),
        "update-movie" => Some(Notice::success("Movie updated successfully.")),
        "err-update-movie" => Some(Notice::error("An error occurred while updating.")),
        "delete-movie" => Some(Notice::success("Movie deleted.")),
        "err-delete-movie" => Some(Notice::error("An error occurred while deleting.")),
        "err-fetch-movies" => Some(Notice::error("Could not load the movie list.")),

        // Read-only tables.
        "err-fetch-orders" => Some(Notice::error("Could not load the ticket list.")),
        "err-fetch-users" => Some(Notice::error("Could not load the user list.")),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let notice = lookup("add-movie").unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "Movie successfully saved.");

        let notice = lookup("err-delete-movie").unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn unknown_keys_resolve_to_nothing() {
        assert!(lookup("no-such-key").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn error_keys_are_error_level() {
        for key in [
            "error-register",
            "error-otp",
            "error-login",
            "err-add-movie",
            "err-update-movie",
            "err-delete-movie",
            "err-fetch-movies",
            "err-fetch-orders",
            "err-fetch-users",
        ] {
            assert_eq!(lookup(key).unwrap().level, NoticeLevel::Error, "{key}");
        }
    }

    #[test]
    fn fresh_notice_is_not_expired() {
        let active = ActiveNotice::new(Notice::success("ok"));
        assert!(!active.is_expired());
    }
}
