//! Request execution with tracing instrumentation.
//!
//! The [`Executor`] owns a blocking transport client configured from
//! [`TransportOptions`] and performs exactly one exchange per call to
//! [`send`](Executor::send).

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, instrument, Span};
use url::Url;

use crate::encoding::PreparedRequest;
use crate::error::{InvalidRequestError, RestError, TransportError};
use crate::method::RestMethod;
use crate::request::TransportOptions;
use crate::response::Response;

/// Sends prepared requests over a blocking HTTP/1.1 transport.
///
/// An executor is built per request and shares nothing with other
/// executions. Its connection is released when it is dropped.
#[derive(Debug)]
pub struct Executor {
    client: reqwest::blocking::Client,
}

impl Executor {
    /// Builds a transport client from the given options.
    ///
    /// ## Errors
    ///
    /// Returns an error if the options are invalid or the TLS configuration
    /// cannot be loaded.
    pub fn new(options: &TransportOptions) -> Result<Self, InvalidRequestError> {
        options.validate()?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(connect_timeout) = options.connect_timeout_duration() {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(read_timeout) = options.read_timeout_duration() {
            builder = builder.timeout(read_timeout);
        }
        builder = options.trust.apply(builder)?;

        let client = builder
            .build()
            .map_err(|e| InvalidRequestError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Sends a prepared request and reads the whole response.
    ///
    /// `headers` are written as given. When the prepared request carries an
    /// implied `Content-Type` and the caller did not set one, it is added.
    ///
    /// ## Errors
    ///
    /// Returns [`RestError::InvalidRequest`] if a header cannot be written, and
    /// [`RestError::Transport`] if the exchange fails. Non-2xx statuses are
    /// returned as a normal [`Response`].
    #[instrument(
        name = "rest_request",
        skip(self, prepared, headers),
        fields(
            http.method = %method,
            http.url = span_url(&prepared.url),
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub fn send(
        &self,
        method: RestMethod,
        prepared: PreparedRequest,
        headers: &[(String, String)],
    ) -> Result<Response, RestError> {
        let header_map = build_headers(headers, prepared.content_type)?;

        let mut request = self
            .client
            .request(method.to_reqwest(), prepared.url)
            .headers(header_map);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }

        debug!(header_count = headers.len(), "Sending request");
        let response = request.send().map_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            TransportError::from(e)
        })?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.bytes().map_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            TransportError::from(e)
        })?;

        let otel_status = if status >= 500 { "ERROR" } else { "OK" };
        Span::current().record("otel.status_code", otel_status);
        debug!(
            http.status_code = status,
            content_length = body.len(),
            "Received response"
        );

        Ok(Response::new(status, response_headers, body))
    }
}

/// The URL recorded on the span: scheme, authority and path only.
///
/// Query strings of GET and DELETE requests carry caller parameters, which may
/// be secrets, so they are never recorded.
fn span_url(url: &Url) -> &str {
    &url[..url::Position::AfterPath]
}

/// Converts caller headers to wire headers, adding `content_type` unless the
/// caller already set `Content-Type`.
///
/// Values are written as their literal UTF-8 bytes.
fn build_headers(
    headers: &[(String, String)],
    content_type: Option<&'static str>,
) -> Result<HeaderMap, InvalidRequestError> {
    let mut header_map = HeaderMap::with_capacity(headers.len() + 1);

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| InvalidRequestError::invalid_header(name, e.to_string()))?;
        let header_value = HeaderValue::from_bytes(value.as_bytes())
            .map_err(|e| InvalidRequestError::invalid_header(name, e.to_string()))?;
        header_map.insert(header_name, header_value);
    }

    if let Some(content_type) = content_type {
        if !header_map.contains_key(CONTENT_TYPE) {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    Ok(header_map)
}
