//! Parameter encoding and method-dependent request preparation.
//!
//! [`prepare`] turns the builder's URL, parameters and body into the URL and
//! body that actually go on the wire. It does no I/O.
//!
//! Names and values are encoded with the `application/x-www-form-urlencoded`
//! byte serializer in both the query string and form bodies, so a space is
//! always written as `+`. Header values are never encoded.

use bytes::Bytes;
use url::{form_urlencoded, Url};

use crate::error::InvalidRequestError;
use crate::method::{ParameterPlacement, RestMethod};

/// `Content-Type` sent with form-encoded bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The wire form of a request, minus headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Final request URL.
    pub url: Url,
    /// Body bytes, if the method sends one.
    pub body: Option<Bytes>,
    /// `Content-Type` implied by the body, if any.
    pub content_type: Option<&'static str>,
}

/// Encodes pairs as `name=value&...`, spaces as `+`.
///
/// ## Examples
///
/// ```rust
/// let pairs = vec![("multi part".to_string(), "a&b".to_string())];
/// assert_eq!(rest::encoding::encode_pairs(&pairs), "multi+part=a%26b");
/// ```
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Parses and checks a request URL.
///
/// ## Errors
///
/// Returns an error if the URL is blank, relative, malformed, or not HTTP(S).
pub fn parse_url(raw: &str) -> Result<Url, InvalidRequestError> {
    if raw.trim().is_empty() {
        return Err(InvalidRequestError::MissingUrl);
    }
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InvalidRequestError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

/// Appends parameters to the URL's query string.
///
/// An existing query is kept as-is and new pairs follow it; duplicate names
/// are allowed.
pub fn append_query(mut url: Url, parameters: &[(String, String)]) -> Url {
    if !parameters.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in parameters {
            query.append_pair(name, value);
        }
    }
    url
}

/// Computes the final URL and body for `method`.
///
/// | Method     | Parameters               | URL       | Body                       |
/// |------------|--------------------------|-----------|----------------------------|
/// | GET/DELETE | appended to query string | extended  | none (raw body ignored)    |
/// | POST/PUT   | form-encoded body        | unchanged | raw body if set, else form |
///
/// ## Errors
///
/// Returns an error if the URL is unusable (see [`parse_url`]).
///
/// ## Examples
///
/// ```rust
/// use rest::encoding::prepare;
/// use rest::RestMethod;
///
/// let params = vec![("q".to_string(), "a b".to_string())];
/// let get = prepare(RestMethod::Get, "https://example.com/s?x=1", &params, None).unwrap();
/// assert_eq!(get.url.as_str(), "https://example.com/s?x=1&q=a+b");
/// assert!(get.body.is_none());
///
/// let post = prepare(RestMethod::Post, "https://example.com/s?x=1", &params, None).unwrap();
/// assert_eq!(post.url.as_str(), "https://example.com/s?x=1");
/// assert_eq!(post.body.unwrap().as_ref(), b"q=a+b");
/// ```
pub fn prepare(
    method: RestMethod,
    url: &str,
    parameters: &[(String, String)],
    body: Option<&Bytes>,
) -> Result<PreparedRequest, InvalidRequestError> {
    let url = parse_url(url)?;

    let prepared = match method.parameter_placement() {
        ParameterPlacement::Query => PreparedRequest {
            url: append_query(url, parameters),
            body: None,
            content_type: None,
        },
        ParameterPlacement::FormBody => match body {
            Some(raw) => PreparedRequest {
                url,
                body: Some(raw.clone()),
                content_type: None,
            },
            None => PreparedRequest {
                url,
                body: Some(Bytes::from(encode_pairs(parameters))),
                content_type: Some(FORM_CONTENT_TYPE),
            },
        },
    };

    Ok(prepared)
}
