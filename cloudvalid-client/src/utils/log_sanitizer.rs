//! Log sanitization utilities
//!
//! Keeps the API key out of logs and error messages, and stops large
//! response bodies from flooding debug output.

use url::Url;

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written in place of the API key.
const REDACTED: &str = "REDACTED";

/// Query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "api_key";

/// Cut a response body down to at most [`TRUNCATE_LIMIT`] bytes for a log line.
///
/// The cut never splits a UTF-8 sequence. Shortened bodies end with the
/// original byte length.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        return body.to_string();
    }

    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// Render a URL with the value of every `api_key` parameter replaced.
///
/// Other parameters keep their order and values.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY_PARAM {
                (k.into_owned(), REDACTED.to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
