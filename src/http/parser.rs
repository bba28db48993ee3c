use crate::http::request::{Method, Request};

/// Tokenizes the first two ASCII-whitespace-delimited fields as method and path.
///
/// Everything after the path (version, headers, body) is ignored. Input that
/// is empty, truncated or not valid UTF-8 yields empty fields instead of an
/// error, so it falls through to the 404 branch of the router.
pub fn parse_request_line(buf: &[u8]) -> Request {
    let text = String::from_utf8_lossy(buf);
    let mut parts = text.split_ascii_whitespace();

    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();

    Request {
        method: Method::from(method),
        path: path.to_string(),
    }
}
