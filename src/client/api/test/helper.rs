use super::*;

use crate::client::{
    api::helper::{build_url, parse_response},
    model::error::ApiErrorKind,
};

/// Tests parsing a structured backend error body.
///
/// Expected: Err carrying the `msg` verbatim
#[test]
fn parses_structured_error_body() {
    let err = parse_response(400, r#"{"msg":"The game is already loaned that day"}"#).unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(
        err.backend_msg.as_deref(),
        Some("The game is already loaned that day")
    );
    assert_eq!(
        err.user_message("Could not create the loan"),
        "The game is already loaned that day"
    );
}

/// Tests an error status without a structured body.
///
/// Expected: Err without backend message, generic fallback shown
#[test]
fn falls_back_without_structured_body() {
    let err = parse_response(500, "").unwrap_err();

    assert_eq!(err.status, 500);
    assert!(err.backend_msg.is_none());
    assert_eq!(err.user_message("An error has occurred"), "An error has occurred");
}

/// Tests that empty success bodies are accepted.
///
/// Expected: Ok(None)
#[test]
fn accepts_empty_success_body() {
    assert_eq!(parse_response(200, "").unwrap(), None);
    assert_eq!(parse_response(204, "  ").unwrap(), None);
}

/// Tests rejecting malformed success bodies.
///
/// Expected: Err of kind Decode
#[test]
fn rejects_malformed_success_body() {
    let err = parse_response(200, "{not json").unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
}

/// Tests URL building with encoded query parameters.
///
/// Expected: base origin without double slash, encoded title
#[test]
fn builds_url_with_encoded_query() {
    let request = ApiRequest::get("/game").query(vec![
        ("title".to_string(), "Ticket to Ride".to_string()),
        ("idCategory".to_string(), "3".to_string()),
    ]);

    assert_eq!(
        build_url("http://localhost:8080/", &request),
        "http://localhost:8080/game?title=Ticket+to+Ride&idCategory=3"
    );
}

/// Tests URL building without query parameters.
///
/// Expected: no trailing question mark
#[test]
fn builds_url_without_query() {
    let request = ApiRequest::delete("loan/7");

    assert_eq!(
        build_url("http://localhost:8080", &request),
        "http://localhost:8080/loan/7"
    );
}
