//! `Content-Type` parsing and charset decoding.

/// Media type and charset split out of a `Content-Type` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentType {
    /// Lower-cased media type without parameters, e.g. `application/json`.
    pub mime_type: String,
    /// Lower-cased `charset` parameter, if present.
    pub charset: Option<String>,
}

impl ContentType {
    /// Parses a header value such as `text/html; charset="UTF-8"`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use rest::response::ContentType;
    ///
    /// let ct = ContentType::parse("application/json; charset=utf-8");
    /// assert_eq!(ct.mime_type, "application/json");
    /// assert_eq!(ct.charset.as_deref(), Some("utf-8"));
    /// ```
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(';');
        let mime_type = parts
            .next()
            .map(|m| m.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let charset = parts.find_map(|param| {
            let (key, val) = param.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                let val = val.trim().trim_matches('"');
                (!val.is_empty()).then(|| val.to_ascii_lowercase())
            } else {
                None
            }
        });

        Self { mime_type, charset }
    }
}

/// Decodes `body` using the declared charset.
///
/// UTF-8 is assumed when no charset is declared. ISO-8859-1 maps each byte to
/// the same code point; every other charset is read as lossy UTF-8, which is
/// exact for US-ASCII.
pub fn decode_text(body: &[u8], charset: Option<&str>) -> String {
    match charset {
        Some("iso-8859-1" | "latin1" | "l1" | "iso_8859-1") => {
            body.iter().map(|&b| char::from(b)).collect()
        }
        _ => String::from_utf8_lossy(body).into_owned(),
    }
}
