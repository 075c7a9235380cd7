//! Top-level error type.

use super::{InvalidRequestError, TransportError};
use thiserror::Error;

/// Error returned by the verb operations of a [`RequestBuilder`](crate::RequestBuilder).
///
/// Either a complete [`Response`](crate::Response) is returned or one of these,
/// never both.
///
/// ## Examples
///
/// ```rust,ignore
/// use rest::{RequestBuilder, RestError};
///
/// match RequestBuilder::new().url("https://example.com").get() {
///     Ok(response) => println!("status {}", response.status()),
///     Err(RestError::InvalidRequest(e)) => eprintln!("fix the request: {e}"),
///     Err(RestError::Transport(e)) => eprintln!("network failure: {e}"),
///     Err(RestError::Json(e)) => eprintln!("bad JSON: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The request could not be built from the builder state.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The network exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not the JSON the caller asked for.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RestError {
    /// Returns `true` if the error was detected before any network I/O.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Returns `true` if the network exchange failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
