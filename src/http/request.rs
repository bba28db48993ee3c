/// HTTP request methods.
///
/// Only `GET` and `HEAD` are served; every other token, including an empty one
/// from a truncated request line, is kept verbatim in `Other` and answered
/// with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other token, matched case-sensitively
    Other(String),
}

impl Method {
    /// Returns the method token as it appeared on the request line.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(token) => token,
        }
    }

    /// Whether the response to this method should withhold its body.
    pub fn is_head(&self) -> bool {
        matches!(self, Method::HEAD)
    }
}

impl From<&str> for Method {
    /// Parses a method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use agartha::http::request::Method;
    /// assert_eq!(Method::from("GET"), Method::GET);
    /// assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    /// ```
    fn from(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }
}

/// The two fields read from the first line of a request.
///
/// Headers and body are never parsed. Both fields are empty when the request
/// line is missing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, HEAD or anything else)
    pub method: Method,
    /// The raw request path, neither decoded nor stripped of a query string
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<Method>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}
