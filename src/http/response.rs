use bytes::Bytes;

pub const TEXT_PLAIN: &str = "text/plain; charset=UTF-8";
pub const TEXT_HTML: &str = "text/html; charset=UTF-8";

/// HTTP status codes the server answers with.
///
/// - `Ok` (200): Request successful
/// - `NotFound` (404): Unknown path or missing file
/// - `MethodNotAllowed` (405): Anything but GET or HEAD
/// - `InternalServerError` (500): A file exists but could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use agartha::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A response ready to be written: status, content type and the full body.
///
/// Content-Length is always derived from `body`, so a HEAD response that
/// withholds the body still declares its real size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
}

impl Response {
    /// Creates a plain-text response.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN.to_string(),
            body: Bytes::from(body.into()),
        }
    }

    /// Creates a 200 OK HTML page.
    pub fn html(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: TEXT_HTML.to_string(),
            body: body.into(),
        }
    }

    /// Creates a 200 OK response carrying raw file bytes.
    pub fn binary(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Creates a 404 Not Found response with the given message.
    pub fn not_found(message: &str) -> Self {
        Self::text(StatusCode::NotFound, message)
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::text(StatusCode::MethodNotAllowed, "Method Not Allowed\n")
    }

    /// Creates a 500 Internal Server Error response with the given message.
    pub fn internal_error(message: &str) -> Self {
        Self::text(StatusCode::InternalServerError, message)
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
