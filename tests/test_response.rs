use bytes::Bytes;
use kiosk::http::rejection::Rejection;
use kiosk::http::response::{Body, FORBIDDEN_BODY, NOT_FOUND_BODY, Response, StatusCode};
use kiosk::http::writer::serialize_headers;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_forbidden_response_uses_fixed_body() {
    let response = Response::forbidden();

    assert_eq!(response.status, StatusCode::Forbidden);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.content_length(), FORBIDDEN_BODY.len() as u64);
    match response.body {
        Body::Bytes(bytes) => assert_eq!(&bytes[..], FORBIDDEN_BODY),
        other => panic!("expected a fixed body, got {other:?}"),
    }
}

#[test]
fn test_not_found_response_uses_fixed_body() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.content_length(), NOT_FOUND_BODY.len() as u64);
    match response.body {
        Body::Bytes(bytes) => assert_eq!(&bytes[..], NOT_FOUND_BODY),
        other => panic!("expected a fixed body, got {other:?}"),
    }
}

#[test]
fn test_fixed_bodies_name_their_status() {
    let forbidden = String::from_utf8_lossy(FORBIDDEN_BODY);
    assert!(forbidden.contains("403 Forbidden"));
    assert!(forbidden.contains("<h1>Forbidden</h1>"));

    let not_found = String::from_utf8_lossy(NOT_FOUND_BODY);
    assert!(not_found.contains("404 Not Found"));
    assert!(not_found.contains("<h1>Not Found</h1>"));
}

#[test]
fn test_rejections_map_to_their_fixed_responses() {
    let forbidden = Response::from_rejection(&Rejection::forbidden("nope", "/x"));
    assert_eq!(forbidden.status, StatusCode::Forbidden);

    let not_found = Response::from_rejection(&Rejection::not_found("/y"));
    assert_eq!(not_found.status, StatusCode::NotFound);
}

#[test]
fn test_html_response_content_length_matches_body() {
    let response = Response::html(Bytes::from_static(b"<p>listing</p>"));
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, "text/html");
    assert_eq!(response.content_length(), 14);
}

#[test]
fn test_header_serialization_order_and_framing() {
    let response = Response::html(Bytes::from_static(b"<p>x</p>"));
    let headers = String::from_utf8(serialize_headers(&response)).unwrap();

    assert!(headers.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(headers.ends_with("\r\n\r\n"));

    // Fixed order: Server, Content-Length, Connection, Content-Type.
    let server = headers.find("\r\nServer: kiosk/").unwrap();
    let length = headers.find("\r\nContent-Length: 8\r\n").unwrap();
    let connection = headers.find("\r\nConnection: close\r\n").unwrap();
    let content_type = headers.find("\r\nContent-Type: text/html\r\n").unwrap();
    assert!(server < length);
    assert!(length < connection);
    assert!(connection < content_type);
}

#[test]
fn test_error_header_serialization() {
    let headers = String::from_utf8(serialize_headers(&Response::not_found())).unwrap();

    assert!(headers.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(headers.contains(&format!("Content-Length: {}\r\n", NOT_FOUND_BODY.len())));
    assert!(headers.contains("Connection: close\r\n"));
}

#[test]
fn test_rejection_display_is_single_line() {
    let rejection = Rejection::forbidden("only simple GET operation supported", "POST /x*");
    let line = rejection.to_string();
    assert!(line.contains("only simple GET operation supported"));
    assert!(!line.contains('\n'));
}
