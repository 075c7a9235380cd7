//! Blocking HTTP transport.
//!
//! [`Executor`] sends a [`PreparedRequest`](crate::encoding::PreparedRequest)
//! and normalizes what comes back into a [`Response`](crate::Response). Most
//! callers never touch it directly and use the verb operations on
//! [`RequestBuilder`](crate::RequestBuilder) instead.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use rest::client::Executor;
//! use rest::encoding::prepare;
//! use rest::{RestMethod, TransportOptions};
//!
//! let executor = Executor::new(&TransportOptions::default())?;
//! let prepared = prepare(RestMethod::Get, "https://httpbin.org/get", &[], None)?;
//! let response = executor.send(RestMethod::Get, prepared, &[])?;
//! println!("{}", response.status());
//! # Ok::<(), rest::RestError>(())
//! ```

mod executor;

pub use executor::Executor;
