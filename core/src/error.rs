//! Error taxonomy for the gist client.
//!
//! # Design
//! Every failure the client can produce is exactly one variant of
//! [`GistError`], a closed set callers pattern-match on. `NotFound` and the
//! authentication kinds get dedicated variants because callers routinely
//! branch on them; everything uncategorized lands in `UnexpectedFailure`
//! with the original status code when one exists.

use thiserror::Error;

/// Errors returned by [`GistClient`] operations.
///
/// [`GistClient`]: crate::client::GistClient
#[derive(Debug, Error)]
pub enum GistError {
    /// The operation requires a token and none is configured. Raised before
    /// any request is built.
    #[error("GitHub credentials are required")]
    AuthenticationRequired,

    /// A precondition on the arguments failed (empty gist id, empty or
    /// non-object payload). Raised before any request is built.
    #[error("{0}")]
    InvalidArgument(String),

    /// The server returned 404. Either the gist does not exist or the token
    /// lacks permission to see it.
    #[error("the requested gist does not exist, or the token requires permissions")]
    NotFound,

    /// The server returned 401 or 403. The credentials are invalid or the
    /// token is missing a required scope.
    #[error("credentials invalid or token missing permissions")]
    AuthenticationFailed { status: u16 },

    /// The server returned 422: the payload was rejected.
    #[error("the provided data has errors")]
    UnprocessableData,

    /// The exchange could not be completed at the transport level (DNS,
    /// connection, TLS).
    #[error("network error: {0}")]
    NetworkFailure(String),

    /// Any other failure: an uncategorized status >= 300, or a serialize or
    /// decode error while performing the call.
    #[error("unexpected error: {message}")]
    UnexpectedFailure { message: String, status: Option<u16> },
}

impl GistError {
    /// The HTTP status code behind this error, when one exists. Local
    /// precondition and transport failures have none.
    pub fn status(&self) -> Option<u16> {
        match self {
            GistError::NotFound => Some(404),
            GistError::AuthenticationFailed { status } => Some(*status),
            GistError::UnprocessableData => Some(422),
            GistError::UnexpectedFailure { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GistError {
    fn from(err: serde_json::Error) -> Self {
        GistError::UnexpectedFailure {
            message: err.to_string(),
            status: None,
        }
    }
}
