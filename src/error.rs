/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/2/26
******************************************************************************/

//! Error types for the InULearning client
//!
//! The platform reports failures as a non-2xx status with a JSON body of the
//! form `{"detail": "<message>"}`. When that body is present and parseable the
//! backend message is surfaced verbatim; otherwise the error degrades to a
//! status-line message. Transport and decoding failures keep their source
//! errors attached.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The backend rejected the request and supplied a `detail` message
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// Message extracted from the error body's `detail` field
        message: String,
    },
    /// Non-success status whose error body was missing or not valid JSON
    Status(StatusCode),
    /// Transport-level failure raised by the HTTP stack (network, DNS, TLS)
    Transport(reqwest::Error),
    /// A response body could not be decoded into the expected type
    Json(serde_json::Error),
    /// A query struct could not be serialized into a query string
    Query(serde_urlencoded::ser::Error),
    /// The durable token store could not be read or written
    Io(std::io::Error),
    /// The stored token cannot be used as an HTTP header value
    InvalidToken,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The backend message is the whole story; callers render it as-is.
            AppError::Api { message, .. } => write!(f, "{message}"),
            AppError::Status(status) => write!(
                f,
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Json(e) => write!(f, "deserialization error: {e}"),
            AppError::Query(e) => write!(f, "query serialization error: {e}"),
            AppError::Io(e) => write!(f, "storage error: {e}"),
            AppError::InvalidToken => write!(f, "invalid token"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Query(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<serde_urlencoded::ser::Error> for AppError {
    fn from(error: serde_urlencoded::ser::Error) -> Self {
        AppError::Query(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}
