//! Transport options carried by a request.

use std::time::Duration;

use crate::error::InvalidRequestError;
use crate::tls::TrustPolicy;

/// Connection settings for a single execution.
///
/// Timeouts are whole seconds. `None` leaves the transport default in place;
/// zero is rejected by [`validate`](Self::validate) when the request runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout: Option<u64>,
    /// Seconds allowed for the request/response exchange once connected.
    pub read_timeout: Option<u64>,
    /// Certificate verification strategy.
    pub trust: TrustPolicy,
}

impl TransportOptions {
    /// Checks the options before any network I/O.
    ///
    /// ## Errors
    ///
    /// Returns an error if a timeout is zero or the trust policy is unusable.
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        if self.connect_timeout == Some(0) {
            return Err(InvalidRequestError::invalid_timeout("connect_timeout"));
        }
        if self.read_timeout == Some(0) {
            return Err(InvalidRequestError::invalid_timeout("read_timeout"));
        }
        self.trust.validate()
    }

    /// Connect timeout as a [`Duration`].
    pub fn connect_timeout_duration(&self) -> Option<Duration> {
        self.connect_timeout.map(Duration::from_secs)
    }

    /// Read timeout as a [`Duration`].
    pub fn read_timeout_duration(&self) -> Option<Duration> {
        self.read_timeout.map(Duration::from_secs)
    }
}
