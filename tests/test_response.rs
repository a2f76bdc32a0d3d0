use docroot::http::response::{HeaderMap, Response, StatusCode};
use docroot::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::SeeOther.as_u16(), 303);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::SeeOther.reason_phrase(), "See Other");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_new_response_has_zero_content_length() {
    let response = Response::new(StatusCode::NotFound);

    assert_eq!(response.headers.get("Content-Length"), Some("0"));
    assert_eq!(response.headers.len(), 1);
    assert!(response.body.is_empty());
}

#[test]
fn test_with_body_updates_content_length() {
    let response = Response::ok("héllo");

    // byte length, not character count
    assert_eq!(response.headers.get("Content-Length"), Some("6"));
}

#[test]
fn test_header_map_keeps_insertion_order_on_update() {
    let mut headers = HeaderMap::new();
    headers.insert("A", "1");
    headers.insert("B", "2");
    headers.insert("A", "3");

    let present: Vec<_> = headers.present().collect();
    assert_eq!(present, vec![("A", "3"), ("B", "2")]);
}

#[test]
fn test_header_map_none_values_are_not_present() {
    let mut headers = HeaderMap::new();
    headers.insert("A", "1");
    headers.set("Content-Type", None);

    assert!(headers.contains_key("Content-Type"));
    assert_eq!(headers.get("Content-Type"), None);
    assert_eq!(headers.present().count(), 1);
}

#[test]
fn test_see_other_sets_location() {
    let response = Response::see_other("/docs/");

    assert_eq!(response.status, StatusCode::SeeOther);
    assert_eq!(response.headers.get("Location"), Some("/docs/"));
    assert_eq!(response.headers.get("Content-Length"), Some("0"));
}

#[test]
fn test_serialize_round_trip() {
    let response = Response::ok("<p>hi</p>")
        .with_header("Content-Type", Some("text/html".to_string()))
        .with_header("X-Skipped", None);

    let wire = String::from_utf8(serialize_response(&response)).unwrap();
    let lines: Vec<&str> = wire.split("\r\n").collect();

    assert_eq!(
        lines,
        vec![
            "HTTP/1.1 200 OK",
            "Content-Length: 9",
            "Content-Type: text/html",
            "",
            "<p>hi</p>",
        ]
    );
}

#[test]
fn test_serialize_empty_response() {
    let wire = serialize_response(&Response::method_not_allowed());
    assert_eq!(
        wire,
        b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n".to_vec()
    );
}

#[test]
fn test_display_matches_wire_text() {
    let response = Response::not_found();
    let wire = serialize_response(&response);
    assert_eq!(response.to_string().as_bytes(), wire.as_slice());
}
