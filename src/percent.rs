//! Minimal percent-decoding for request paths.
//!
//! Only three escapes are understood; everything else passes through
//! untouched. Nothing in the request path calls this yet.

const ESCAPES: [(&str, &str); 3] = [("%20", " "), ("%3A", ":"), ("%2F", "/")];

/// Replaces `%20`, `%3A` and `%2F`, in that order.
///
/// ```
/// assert_eq!(docroot::percent::decode("page%20with%20space.html"), "page with space.html");
/// ```
pub fn decode(input: &str) -> String {
    ESCAPES
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}
