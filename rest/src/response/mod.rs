//! Normalized HTTP responses.
//!
//! A [`Response`] is built once by the executor and never mutated. Status
//! codes are data: a 404 or 503 is an ordinary response.

mod content_type;

pub use content_type::{decode_text, ContentType};

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// The result of executing a request.
///
/// Header lookup is case-insensitive. When a header repeats, [`header`](Self::header)
/// returns the first value and [`header_all`](Self::header_all) returns all of them
/// in the order the transport reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    content_type: ContentType,
    body: Bytes,
    headers: Vec<(String, String)>,
}

impl Response {
    /// Assembles a response from what was read off the wire.
    pub(crate) fn new(status: u16, headers: Vec<(String, String)>, body: Bytes) -> Self {
        let content_type = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| ContentType::parse(value))
            .unwrap_or_default();

        Self {
            status,
            content_type,
            body,
            headers,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Media type of the body without parameters, or `""` if none was sent.
    pub fn mime_type(&self) -> &str {
        &self.content_type.mime_type
    }

    /// Declared charset of the body, if any.
    pub fn charset(&self) -> Option<&str> {
        self.content_type.charset.as_deref()
    }

    /// Raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as text using the declared charset.
    pub fn text(&self) -> String {
        decode_text(&self.body, self.charset())
    }

    /// Deserializes the body as JSON.
    ///
    /// ## Errors
    ///
    /// Returns [`RestError::Json`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// First value of the named header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Every value of the named header.
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// All headers, names as reported by the transport (lower-case).
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mime_type_from_header() {
        let response = Response::new(
            200,
            headers(&[("content-type", "application/json; charset=utf-8")]),
            Bytes::from_static(b"{}"),
        );
        assert_eq!(response.mime_type(), "application/json");
        assert_eq!(response.charset(), Some("utf-8"));
        assert!(response.is_success());
    }

    #[test]
    fn test_missing_content_type() {
        let response = Response::new(204, vec![], Bytes::new());
        assert_eq!(response.mime_type(), "");
        assert_eq!(response.charset(), None);
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_error_status_is_data() {
        let response = Response::new(503, vec![], Bytes::from_static(b"sealed"));
        assert_eq!(response.status(), 503);
        assert!(!response.is_success());
        assert_eq!(response.text(), "sealed");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = Response::new(200, headers(&[("two-part", "value")]), Bytes::new());
        assert_eq!(response.header("Two-Part"), Some("value"));
        assert_eq!(response.header("TWO-PART"), Some("value"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_repeated_header_first_value_wins() {
        let response = Response::new(
            200,
            headers(&[
                ("set-cookie", "a=1"),
                ("x-other", "y"),
                ("Set-Cookie", "b=2"),
            ]),
            Bytes::new(),
        );
        assert_eq!(response.header("set-cookie"), Some("a=1"));
        assert_eq!(response.header_all("set-cookie"), vec!["a=1", "b=2"]);
        assert_eq!(response.headers().len(), 3);
    }

    #[test]
    fn test_text_uses_declared_charset() {
        let response = Response::new(
            200,
            headers(&[("Content-Type", "text/plain; charset=ISO-8859-1")]),
            Bytes::from_static(&[0x63, 0x61, 0x66, 0xE9]),
        );
        assert_eq!(response.text(), "café");
    }

    #[test]
    fn test_json() {
        let response = Response::new(
            200,
            headers(&[("content-type", "application/json")]),
            Bytes::from_static(br#"{"url":"https://httpbin.org/post","form":{"a":"b"}}"#),
        );
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["url"], "https://httpbin.org/post");
        assert_eq!(value["form"]["a"], "b");
    }

    #[test]
    fn test_json_error() {
        let response = Response::new(200, vec![], Bytes::from_static(b"not json"));
        let result: Result<serde_json::Value, _> = response.json();
        assert!(matches!(result, Err(RestError::Json(_))));
    }
}
