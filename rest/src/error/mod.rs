//! Layered error types for request execution.
//!
//! Only two things can go wrong while executing a request:
//! - [`InvalidRequestError`] - the builder state is unusable; detected before any I/O
//! - [`TransportError`] - the network exchange itself failed
//!
//! [`RestError`] aggregates both, plus JSON decoding failures raised by
//! [`Response::json`](crate::Response::json). Non-2xx statuses are never errors.

mod request_error;
mod rest_error;
mod transport_error;

pub use request_error::InvalidRequestError;
pub use rest_error::RestError;
pub use transport_error::TransportError;
