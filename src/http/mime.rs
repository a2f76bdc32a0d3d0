/// Content type for a file extension (without the dot).
///
/// Only HTML and CSS are known; anything else gets no `Content-Type` header.
pub fn content_type(extension: &str) -> Option<&'static str> {
    match extension {
        "css" => Some("text/css"),
        "html" => Some("text/html"),
        _ => None,
    }
}
