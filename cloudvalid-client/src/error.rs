use serde::Serialize;
use thiserror::Error;

use crate::types::Operation;

/// Unified error type for all CloudValid API operations.
///
/// Every variant raised while performing a call carries the [`Operation`] it
/// came from. Nothing is retried internally: whether a failure is worth
/// another attempt is the caller's decision.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum CloudValidError {
    /// The client could not be constructed (missing API key, bad transport settings).
    #[error("Invalid client configuration: {detail}")]
    Config {
        /// Error details.
        detail: String,
    },

    /// The request URL could not be built from the endpoint template.
    #[error("{operation} request failed: invalid URL '{url}': {detail}")]
    InvalidUrl {
        /// Operation that produced the error.
        operation: Operation,
        /// The templated URL (without the API key).
        url: String,
        /// Error details.
        detail: String,
    },

    /// The outbound payload could not be encoded as JSON.
    #[error("{operation} request failed: could not encode payload: {detail}")]
    SerializationError {
        /// Operation that produced the error.
        operation: Operation,
        /// Error details.
        detail: String,
    },

    /// A transport-level failure (DNS resolution, connection refused, TLS, ...).
    #[error("{operation} request failed: network error: {detail}")]
    NetworkError {
        /// Operation that produced the error.
        operation: Operation,
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for the server.
    #[error("{operation} request failed: timed out: {detail}")]
    Timeout {
        /// Operation that produced the error.
        operation: Operation,
        /// Error details.
        detail: String,
    },

    /// The server answered with anything other than `200 OK`.
    ///
    /// The response body is not inspected.
    #[error("{operation} request failed: received status code {status}")]
    UnexpectedStatus {
        /// Operation that produced the error.
        operation: Operation,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body was not the JSON shape the operation expects.
    #[error("{operation} request failed: could not decode response: {detail}")]
    ParseError {
        /// Operation that produced the error.
        operation: Operation,
        /// Error details.
        detail: String,
    },
}

impl CloudValidError {
    /// The operation this error was raised by, if it came from a call.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Config { .. } => None,
            Self::InvalidUrl { operation, .. }
            | Self::SerializationError { operation, .. }
            | Self::NetworkError { operation, .. }
            | Self::Timeout { operation, .. }
            | Self::UnexpectedStatus { operation, .. }
            | Self::ParseError { operation, .. } => Some(*operation),
        }
    }

    /// The HTTP status code, for [`UnexpectedStatus`](Self::UnexpectedStatus) errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CloudValidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unexpected_status() {
        let e = CloudValidError::UnexpectedStatus {
            operation: Operation::GetHostedPage,
            status: 404,
        };
        assert_eq!(
            e.to_string(),
            "get-hosted-page request failed: received status code 404"
        );
    }

    #[test]
    fn display_network_error() {
        let e = CloudValidError::NetworkError {
            operation: Operation::CreateDnsConfigurationLink,
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "create-dns-configuration-link request failed: network error: connection refused"
        );
    }

    #[test]
    fn display_config_error() {
        let e = CloudValidError::Config {
            detail: "api key is empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid client configuration: api key is empty"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = CloudValidError::ParseError {
            operation: Operation::GetPropagationStatus,
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "get-propagation-status request failed: could not decode response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn status_only_on_unexpected_status() {
        let e = CloudValidError::UnexpectedStatus {
            operation: Operation::CancelDnsConfigurationLink,
            status: 500,
        };
        assert_eq!(e.status(), Some(500));

        let e = CloudValidError::Timeout {
            operation: Operation::CancelDnsConfigurationLink,
            detail: "deadline elapsed".to_string(),
        };
        assert_eq!(e.status(), None);
    }

    #[test]
    fn operation_accessor() {
        let e = CloudValidError::SerializationError {
            operation: Operation::CreateDnsConfigurationLink,
            detail: "boom".to_string(),
        };
        assert_eq!(e.operation(), Some(Operation::CreateDnsConfigurationLink));

        let e = CloudValidError::Config {
            detail: "missing".to_string(),
        };
        assert_eq!(e.operation(), None);
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CloudValidError::UnexpectedStatus {
            operation: Operation::GetHostedPage,
            status: 403,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "UnexpectedStatus");
        assert_eq!(json["operation"], "get-hosted-page");
        assert_eq!(json["status"], 403);
    }
}
