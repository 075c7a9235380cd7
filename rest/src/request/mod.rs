//! Request accumulation.
//!
//! A [`RequestBuilder`] collects a URL, parameters, headers, an optional raw
//! body and [`TransportOptions`], then is consumed by one of the verb
//! operations. Setters never validate; problems surface as
//! [`InvalidRequestError`](crate::InvalidRequestError) when the request runs.

mod options;

pub use options::TransportOptions;

use bytes::Bytes;

use crate::client::Executor;
use crate::encoding;
use crate::error::RestError;
use crate::method::RestMethod;
use crate::response::Response;
use crate::tls::TrustPolicy;

/// Builder for a single HTTP request.
///
/// Every setter returns the builder so calls can be chained. Setting the same
/// parameter or header twice keeps only the last value. Verb operations take
/// the builder by value: a request is executed exactly once.
///
/// ## Examples
///
/// ```rust,no_run
/// use rest::RequestBuilder;
///
/// let response = RequestBuilder::new()
///     .url("https://httpbin.org/post")
///     .parameter("foo", "bar")
///     .header("X-Vault-Token", "s.abc123")
///     .read_timeout_seconds(10)
///     .post()?;
///
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.mime_type(), "application/json");
/// # Ok::<(), rest::RestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    url: String,
    parameters: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    options: TransportOptions,
}

/// Replaces the value of the first entry matching `name`, or appends a new one.
fn upsert(
    entries: &mut Vec<(String, String)>,
    name: String,
    value: String,
    same_name: impl Fn(&str, &str) -> bool,
) {
    match entries
        .iter_mut()
        .find(|(existing, _)| same_name(existing.as_str(), name.as_str()))
    {
        Some(entry) => entry.1 = value,
        None => entries.push((name, value)),
    }
}

impl RequestBuilder {
    /// Creates an empty builder with default transport options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target URL. It is stored verbatim and validated on execution.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Adds or replaces a parameter.
    ///
    /// GET and DELETE send parameters in the query string, POST and PUT as a
    /// form body. Names and values are encoded when the request runs.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        upsert(&mut self.parameters, name, value, |a, b| a == b);
        self
    }

    /// Adds or replaces a header. Names match case-insensitively.
    ///
    /// The value is sent as literal bytes, without any encoding.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        upsert(&mut self.headers, name, value, str::eq_ignore_ascii_case);
        self
    }

    /// Sets a raw POST/PUT payload, replacing the form body built from parameters.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the connect timeout in seconds. Zero fails at execution.
    pub fn connect_timeout_seconds(mut self, seconds: u64) -> Self {
        self.options.connect_timeout = Some(seconds);
        self
    }

    /// Sets the read timeout in seconds. Zero fails at execution.
    pub fn read_timeout_seconds(mut self, seconds: u64) -> Self {
        self.options.read_timeout = Some(seconds);
        self
    }

    /// Turns server certificate verification on or off.
    ///
    /// Passing `false` accepts any certificate. Passing `true` restores
    /// default verification, discarding any trusted PEM.
    pub fn ssl_verification(mut self, enabled: bool) -> Self {
        self.options.trust = if enabled {
            TrustPolicy::Verify
        } else {
            TrustPolicy::Disabled
        };
        self
    }

    /// Trusts a PEM-encoded certificate in addition to the default roots.
    pub fn ssl_pem_utf8(mut self, pem: impl Into<String>) -> Self {
        self.options.trust = TrustPolicy::Pem(pem.into());
        self
    }

    /// Sets the certificate trust strategy directly.
    pub fn trust_policy(mut self, policy: TrustPolicy) -> Self {
        self.options.trust = policy;
        self
    }

    /// Returns the URL as set.
    pub fn get_url(&self) -> &str {
        &self.url
    }

    /// Returns the parameters in insertion order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Returns the headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the raw body, if one was set.
    pub fn raw_body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns the transport options.
    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// Sends a GET request. Parameters go in the query string.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn get(self) -> Result<Response, RestError> {
        self.execute(RestMethod::Get)
    }

    /// Sends a POST request. Parameters go in a form body unless a raw body was set.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn post(self) -> Result<Response, RestError> {
        self.execute(RestMethod::Post)
    }

    /// Sends a PUT request. Parameters go in a form body unless a raw body was set.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn put(self) -> Result<Response, RestError> {
        self.execute(RestMethod::Put)
    }

    /// Sends a DELETE request. Parameters go in the query string.
    ///
    /// ## Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn delete(self) -> Result<Response, RestError> {
        self.execute(RestMethod::Delete)
    }

    /// Sends the request with the given method.
    ///
    /// Any status code, including 4xx and 5xx, is returned as a [`Response`].
    ///
    /// ## Errors
    ///
    /// - [`RestError::InvalidRequest`] if the URL, timeouts, trust policy or
    ///   headers are unusable; nothing is sent.
    /// - [`RestError::Transport`] if connecting, sending or reading fails.
    pub fn execute(self, method: RestMethod) -> Result<Response, RestError> {
        let prepared = encoding::prepare(method, &self.url, &self.parameters, self.body.as_ref())?;
        let executor = Executor::new(&self.options)?;
        executor.send(method, prepared, &self.headers)
    }
}
