//! Errors in the builder state, raised before any network I/O.

use thiserror::Error;

/// The request cannot be sent as configured.
///
/// Setters never validate; everything here is reported lazily when a verb
/// operation runs.
#[derive(Debug, Error)]
pub enum InvalidRequestError {
    /// No URL was set, or it was blank.
    #[error("Missing required URL")]
    MissingUrl,

    /// URL parsing failed (including relative URLs).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL is absolute but not HTTP(S).
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A timeout was set to zero.
    #[error("Invalid {field}: timeouts must be a positive number of seconds")]
    InvalidTimeout {
        /// Which timeout was rejected.
        field: &'static str,
    },

    /// A header name or value cannot be written on the wire.
    #[error("Invalid header {name:?}: {message}")]
    InvalidHeader {
        /// The header name as given to the builder.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// The trusted PEM certificate could not be loaded.
    #[error("Invalid PEM certificate: {0}")]
    InvalidCertificate(String),

    /// The transport refused the configuration.
    #[error("Failed to configure HTTP client: {0}")]
    ClientBuild(String),
}

impl InvalidRequestError {
    /// Creates an invalid timeout error.
    pub fn invalid_timeout(field: &'static str) -> Self {
        Self::InvalidTimeout { field }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the URL was missing or malformed.
    pub fn is_url_error(&self) -> bool {
        matches!(
            self,
            Self::MissingUrl | Self::InvalidUrl(_) | Self::UnsupportedScheme { .. }
        )
    }
}
