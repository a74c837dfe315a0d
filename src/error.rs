//! Pipeline Error Kinds
//!
//! Every fallible operation in the library returns one of the four error kinds
//! below, so callers branch on values instead of panicking or inspecting
//! message strings. The HTTP shell maps each kind to a status code and a
//! human-readable hint in exactly one place.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller-supplied query or reference failed pre-flight validation.
    /// No request has been issued when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An image reference does not contain a parseable identifier token.
    #[error("no identifier token in reference: {0}")]
    InvalidReference(String),

    /// Transport failure or non-success status from a remote call.
    #[error("remote call failed: {message}")]
    RemoteFailure {
        status: Option<u16>,
        message: String,
    },

    /// The remote call succeeded but the payload had an unexpected shape.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClientError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ClientError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ClientError::RemoteFailure { .. } => StatusCode::BAD_GATEWAY,
            ClientError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// One-line guidance shown next to the error message in the UI.
    /// Remote failures and malformed responses get different advice, since one
    /// is transient and the other usually means an API change.
    pub fn guidance(&self) -> &'static str {
        match self {
            ClientError::InvalidInput(_) => "Adjust the query or reference and try again.",
            ClientError::InvalidReference(_) => {
                "This image reference does not embed a URN identifier."
            }
            ClientError::RemoteFailure { .. } => {
                "The remote API did not answer successfully. Retry in a moment."
            }
            ClientError::MalformedResponse(_) => {
                "The remote API answered in an unexpected format. This usually means the API changed."
            }
        }
    }
}

/// Error body returned by every `/api` route on failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub guidance: &'static str,
}

/// Converts a pipeline error into an HTTP rejection.
pub fn reject(err: ClientError) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status_code();
    let body = ErrorResponse {
        guidance: err.guidance(),
        error: err.to_string(),
    };
    (status, Json(body))
}
