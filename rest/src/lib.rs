//! Minimal blocking HTTP REST request builder.
//!
//! The `rest` crate assembles a request (method, URL, parameters, headers,
//! optional raw body, timeouts and TLS trust), sends it, and returns a
//! normalized [`Response`]. It is meant to sit under higher-level API clients
//! that should not hand-roll query strings, form bodies or response parsing.
//!
//! ## Parameter placement
//!
//! - **GET / DELETE**: parameters are form-encoded and appended to the URL's
//!   query string, after any query already present.
//! - **POST / PUT**: parameters become an `application/x-www-form-urlencoded`
//!   body and the URL is left alone. A raw [`body`](RequestBuilder::body)
//!   replaces the form body.
//!
//! Spaces encode as `+` everywhere. Header values are sent literally.
//!
//! ## Errors
//!
//! Only [`InvalidRequestError`] (caught before any I/O) and [`TransportError`]
//! are failures. A 4xx or 5xx status is a normal [`Response`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use rest::RequestBuilder;
//!
//! let response = RequestBuilder::new()
//!     .url("https://httpbin.org/post?hot=cold")
//!     .parameter("foo", "bar")
//!     .parameter("multi part", "has whitespace")
//!     .post()?;
//!
//! let echoed: serde_json::Value = response.json()?;
//! assert_eq!(echoed["url"], "https://httpbin.org/post?hot=cold");
//! assert_eq!(echoed["form"]["multi part"], "has whitespace");
//! # Ok::<(), rest::RestError>(())
//! ```

pub mod client;
pub mod encoding;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
pub mod tls;

// Re-exports for convenience
pub use client::Executor;
pub use encoding::{prepare, PreparedRequest};
pub use error::{InvalidRequestError, RestError, TransportError};
pub use method::{ParameterPlacement, RestMethod};
pub use request::{RequestBuilder, TransportOptions};
pub use response::Response;
pub use tls::TrustPolicy;
