//! Network-level failures.

use thiserror::Error;

/// The HTTP exchange failed after the request was accepted as valid.
///
/// Covers DNS failures, refused connections, TLS handshake failures,
/// timeouts and connections dropped while reading. No retry is attempted.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not connect (DNS, refused, TLS handshake).
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The connect or read timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The response body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// Any other failure reported by the transport.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl TransportError {
    /// Returns `true` if a timeout aborted the exchange.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns `true` if no connection could be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect(_))
    }

    /// Returns the underlying transport error.
    pub fn source_error(&self) -> &reqwest::Error {
        match self {
            Self::Connect(e) | Self::Timeout(e) | Self::Body(e) | Self::Request(e) => e,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // timeouts are also reported as connect errors when they hit during connect
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else if err.is_body() || err.is_decode() {
            Self::Body(err)
        } else {
            Self::Request(err)
        }
    }
}
