//! Utility modules.

/// Date/time serialization helpers for the vendor's timestamps.
pub mod datetime;

/// Log sanitization utilities to keep the API key out of logs.
pub mod log_sanitizer;

/// `null`-tolerant field deserialization.
pub(crate) mod nullable;
