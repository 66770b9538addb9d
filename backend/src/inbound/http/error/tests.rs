//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Extension not found"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn not_found_body_keeps_message_and_trace_id() {
    let error = Error::not_found("Extension not found").with_trace_id(TRACE_ID);

    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "not_found",
            "message": "Extension not found",
            "trace_id": TRACE_ID,
        })
    );
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("password column missing")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "sql": "select 1" }));

    let (status, _, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["trace_id"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn invalid_request_details_are_preserved() {
    let error =
        Error::invalid_request("bad").with_details(json!({ "field": "extension_uuid" }));

    let (_, header, body) = body_of(&error).await;

    assert!(header.is_none());
    assert_eq!(body["details"]["field"], "extension_uuid");
}
