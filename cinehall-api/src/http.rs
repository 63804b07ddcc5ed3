//! Generic HTTP request plumbing.
//!
//! Unified processing for every endpoint call: sending the request, logging,
//! status handling, and response parsing. The admin dashboard never retries
//! on its own; a failed call surfaces to the operator, who can re-trigger
//! the action manually.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Maximum number of response-body bytes quoted in log lines.
const LOG_BODY_LIMIT: usize = 512;

/// Truncates a response body for logging.
pub(crate) fn truncate_for_log(text: &str) -> String {
    if text.len() <= LOG_BODY_LIMIT {
        text.to_string()
    } else {
        let mut end = LOG_BODY_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} bytes)", &text[..end], text.len())
    }
}

/// Performs an HTTP request and returns the status code and response text.
///
/// Transport failures map to [`ApiError::Network`] or [`ApiError::Timeout`];
/// the status code is returned untouched for the caller to judge.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<(u16, String)> {
    log::debug!("{method} {path}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("{method} {path} -> {status}");

    let body = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("Response body: {}", truncate_for_log(&body));

    Ok((status, body))
}

/// Rejects non-2xx responses with [`ApiError::Status`].
pub(crate) fn expect_success(status: u16, body: String, method: &str, path: &str) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        log::warn!("{method} {path} failed with HTTP {status}");
        Err(ApiError::Status {
            status,
            message: truncate_for_log(&body),
        })
    }
}

/// Parses a JSON response body.
pub(crate) fn parse_json<T>(body: &str, path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed for {path}: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}
