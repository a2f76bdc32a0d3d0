use std::fmt;

use crate::http::writer::serialize_response;

/// HTTP status codes the server produces.
///
/// - `Ok` (200): File served
/// - `SeeOther` (303): Directory requested without a trailing slash
/// - `BadRequest` (400): Request line could not be parsed
/// - `NotFound` (404): Missing file, or a path outside the document root
/// - `MethodNotAllowed` (405): Anything but GET
/// - `InternalServerError` (500): File exists but could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 303 See Other
    SeeOther,
    /// 400 Bad Request
    BadRequest,
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
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::SeeOther.as_u16(), 303);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::SeeOther => 303,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::SeeOther => "See Other",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Response headers in insertion order.
///
/// A header may hold `None`; such entries keep their slot but are skipped
/// when the response is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Option<String>)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header. An existing key keeps its position and gets the new value.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Some(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headers that will actually go on the wire, in order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }
}

/// A complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Response {
    /// Creates an empty response. Every instance starts with its own
    /// `Content-Length: 0` header.
    pub fn new(status: StatusCode) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Length", "0");
        Self {
            status,
            headers,
            body: String::new(),
        }
    }

    /// Replaces the body and updates `Content-Length` to its byte length.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self.headers
            .insert("Content-Length", self.body.len().to_string());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        self.headers.set(key, value);
        self
    }

    pub fn status_line(&self) -> String {
        format!(
            "HTTP/1.1 {} {}",
            self.status.as_u16(),
            self.status.reason_phrase()
        )
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::Ok).with_body(body)
    }

    /// 303 pointing the client at `location`.
    pub fn see_other(location: impl Into<String>) -> Self {
        Self::new(StatusCode::SeeOther).with_header("Location", Some(location.into()))
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::MethodNotAllowed)
    }

    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&serialize_response(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_are_per_instance() {
        let mut first = Response::new(StatusCode::Ok);
        first.headers.insert("X-Leak", "yes");

        let second = Response::new(StatusCode::Ok);
        assert!(!second.headers.contains_key("X-Leak"));
        assert_eq!(second.headers.len(), 1);
    }
}
