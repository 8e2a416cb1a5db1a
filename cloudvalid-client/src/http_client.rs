//! Shared request/response handling
//!
//! Every operation runs the same exchange: send, require `200 OK`, read the
//! body, decode it. Nothing here retries.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::CloudValidError;
use crate::types::Operation;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs the request and returns the body of a `200 OK` response.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, headers, body)
    /// * `operation` - the calling operation (for logs and errors)
    /// * `method_name` - HTTP method, for logs
    /// * `safe_url` - request URL with the API key redacted, for logs
    ///
    /// # Returns
    /// * `Ok(response_text)` on `200 OK`
    /// * `Err(CloudValidError::UnexpectedStatus)` on any other status; the body is not read
    /// * `Err(CloudValidError::Timeout | CloudValidError::NetworkError)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        operation: Operation,
        method_name: &str,
        safe_url: &str,
    ) -> Result<String, CloudValidError> {
        log::debug!("[{operation}] {method_name} {safe_url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        log::debug!("[{operation}] Response Status: {}", status.as_u16());

        if status != StatusCode::OK {
            log::warn!(
                "[{operation}] request failed: received status code {}",
                status.as_u16()
            );
            return Err(CloudValidError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(operation, e)
            } else {
                CloudValidError::NetworkError {
                    operation,
                    detail: format!("Failed to read response body: {}", e.without_url()),
                }
            }
        })?;

        log::debug!(
            "[{operation}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response body into the operation's decode target.
    pub fn parse_json<T>(response_text: &str, operation: Operation) -> Result<T, CloudValidError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{operation}] JSON parse failed: {e}");
            log::error!(
                "[{operation}] Raw response: {}",
                truncate_for_log(response_text)
            );
            CloudValidError::ParseError {
                operation,
                detail: e.to_string(),
            }
        })
    }
}

fn transport_error(operation: Operation, e: reqwest::Error) -> CloudValidError {
    let timed_out = e.is_timeout();
    // reqwest errors embed the request URL, which carries the key.
    let detail = e.without_url().to_string();
    if timed_out {
        CloudValidError::Timeout { operation, detail }
    } else {
        CloudValidError::NetworkError { operation, detail }
    }
}
