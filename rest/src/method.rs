//! HTTP verbs supported by the request builder.

use strum::{Display, EnumString};

/// Where a verb places the builder's parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterPlacement {
    /// Appended to the URL's query string.
    Query,
    /// Written as an `application/x-www-form-urlencoded` request body.
    FormBody,
}

/// HTTP methods a [`RequestBuilder`](crate::RequestBuilder) can execute.
///
/// ## Examples
///
/// ```rust
/// use rest::{ParameterPlacement, RestMethod};
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
/// assert_eq!(method.parameter_placement(), ParameterPlacement::Query);
///
/// let parsed: RestMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method sends a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns where parameters go for this method.
    ///
    /// GET and DELETE extend the query string; POST and PUT encode them
    /// into the body and leave the URL alone.
    pub fn parameter_placement(&self) -> ParameterPlacement {
        if self.has_body() {
            ParameterPlacement::FormBody
        } else {
            ParameterPlacement::Query
        }
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
        assert_eq!("PUT".parse::<RestMethod>().unwrap(), RestMethod::Put);
        assert!("PATCH".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_parameter_placement() {
        use ParameterPlacement::{FormBody, Query};

        assert_eq!(RestMethod::Get.parameter_placement(), Query);
        assert_eq!(RestMethod::Delete.parameter_placement(), Query);
        assert_eq!(RestMethod::Post.parameter_placement(), FormBody);
        assert_eq!(RestMethod::Put.parameter_placement(), FormBody);
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Put.to_reqwest(), reqwest::Method::PUT);
        let method: reqwest::Method = RestMethod::Delete.into();
        assert_eq!(method, reqwest::Method::DELETE);
    }
}
