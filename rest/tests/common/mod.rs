//! Shared fixtures for integration tests.
//!
//! [`EchoResponder`] answers like httpbin's `/anything` family: it reflects
//! the request URL, query arguments, form fields, headers and raw body as JSON.

#![allow(dead_code)]

use rest::{Response, RestError};
use serde_json::{json, Map, Value};
use wiremock::{Request, Respond, ResponseTemplate};

/// Reflects the incoming request as a JSON document.
pub struct EchoResponder;

impl Respond for EchoResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let args: Map<String, Value> = request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect();

        let is_form = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let form: Map<String, Value> = if is_form {
            url::form_urlencoded::parse(&request.body)
                .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
                .collect()
        } else {
            Map::new()
        };

        let headers: Map<String, Value> = request
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    canonical_header_name(name.as_str()),
                    Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
                )
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "method": request.method.as_str(),
            "url": echoed_url(request),
            "args": args,
            "form": form,
            "headers": headers,
            "data": String::from_utf8_lossy(&request.body),
        }))
    }
}

/// The URL as the client addressed it.
///
/// wiremock always reports the host as `localhost`, so the authority is taken
/// from the `Host` header the way httpbin does.
pub fn echoed_url(request: &Request) -> String {
    match request.headers.get("host").and_then(|v| v.to_str().ok()) {
        Some(host) => {
            let path = &request.url[url::Position::BeforePath..];
            format!("http://{host}{path}")
        }
        None => request.url.to_string(),
    }
}

/// `two-part` -> `Two-Part`, the casing httpbin reports.
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Runs a blocking request off the async test runtime.
pub async fn run_blocking<F>(f: F) -> Result<Response, RestError>
where
    F: FnOnce() -> Result<Response, RestError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking request task should not panic")
}

/// Parses an echoed response body.
pub fn echoed(response: &Response) -> Value {
    response.json().expect("echo response should be JSON")
}
