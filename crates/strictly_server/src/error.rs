//! Server error types.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

/// Code reported when a game id is unknown or expired.
pub const BOARD_NOT_FOUND: u8 = 1;

/// Repository error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Repository error: {} at {}:{}", message, file, line)]
pub struct RepositoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RepositoryError {
    /// Creates a new repository error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// JSON body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code, when the failure has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<u8>,
    /// Human-readable message.
    pub msg: String,
}

/// Failure of an API request.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// No live board under the requested id.
    #[display("Board not found")]
    NotFound,

    /// A path segment could not be parsed.
    #[display("{}", _0)]
    BadPath(PathRejection),

    /// The board store failed.
    #[display("{}", _0)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    err: Some(BOARD_NOT_FOUND),
                    msg: self.to_string(),
                },
            ),
            Self::BadPath(rejection) => {
                warn!(error = %rejection, "Malformed move path");
                (
                    rejection.status(),
                    ErrorBody {
                        err: None,
                        msg: rejection.body_text(),
                    },
                )
            }
            Self::Repository(e) => {
                error!(error = %e, "Repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        err: None,
                        msg: "Internal server error".to_string(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
