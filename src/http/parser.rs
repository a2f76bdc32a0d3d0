use std::fmt;

use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The received bytes are not valid UTF-8
    InvalidEncoding,
    /// The request line did not split into method, path and version
    MalformedRequest { tokens: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidEncoding => write!(f, "request is not valid UTF-8"),
            ParseError::MalformedRequest { tokens } => {
                write!(f, "malformed request line: expected 3 tokens, got {}", tokens)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line out of whatever the client sent.
///
/// Only the first line matters. It is split on single spaces and must yield
/// exactly three tokens; an empty path token (two spaces in a row) is
/// recorded as an absent path.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let request_line = text.trim().lines().next().unwrap_or("");
    let parts: Vec<&str> = request_line.split(' ').collect();

    let [method, path, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequest { tokens: parts.len() });
    };

    Ok(Request {
        method: Method::from(*method),
        path: (!path.is_empty()).then(|| path.to_string()),
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path.as_deref(), Some("/"));
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        let parsed = parse_request(b"\r\n  GET /a.css HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(parsed.path.as_deref(), Some("/a.css"));
    }
}
