use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Errors that can occur while serving prime checks
#[derive(Error, Debug)]
pub enum Error {
    /// Path parameter is not a positive base-10 integer
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Randomly injected server fault, unrelated to the input
    #[error("simulated failure")]
    SimulatedFailure,

    /// Worker thread could not be spawned or died before answering
    #[error("worker lost: {0}")]
    WorkerLost(String),

    /// Invalid service configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Listener or socket error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status reported to the caller for this error.
    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            Error::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Public message for the JSON error payload. Never carries internal detail.
    pub fn public_message(&self) -> &'static str {
        // ---
        match self {
            Error::InvalidNumber(_) => "Invalid number",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // ---
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;
