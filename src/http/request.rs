use std::fmt;

/// HTTP request methods.
///
/// Only GET is served. Any other token from the request line lands in
/// `Other`, verbatim, so the resolver can answer it with 405 instead of
/// failing the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Anything else, kept verbatim
    Other(String),
}

impl Method {
    /// Returns the method token as it appears on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::from("GET").as_str(), "GET");
    /// assert_eq!(Method::from("get").as_str(), "get");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(s) => s,
        }
    }
}

impl From<&str> for Method {
    /// Case-sensitive: `get` is not `GET`.
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request line. Headers and body are never looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, `None` when the token was empty
    pub path: Option<String>,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    pub fn new(method: impl Into<Method>, path: Option<&str>, version: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.map(str::to_string),
            version: version.into(),
        }
    }

    /// Shorthand for a `GET <path> HTTP/1.1` request.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, Some(path), "HTTP/1.1")
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }

    /// The request path, with an absent path read as `/`.
    pub fn path_or_root(&self) -> &str {
        self.path.as_deref().unwrap_or("/")
    }
}
