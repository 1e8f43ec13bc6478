//! Tests for domain error construction and serde contracts.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let err = Error::try_new(ErrorCode::InternalError, message).expect_err("blank message");
    assert_eq!(err, ErrorValidationError::EmptyMessage);
}

#[rstest]
fn serialises_camel_case_without_empty_optionals() {
    let err = Error::invalid_request("missing required field: eid");
    let value = serde_json::to_value(&err).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "missing required field: eid" })
    );
}

#[rstest]
fn trace_id_and_details_are_serialised() {
    let err = Error::service_unavailable("search index unreachable")
        .with_trace_id("abc")
        .with_details(json!({ "store": "elasticsearch" }));
    let value = serde_json::to_value(&err).expect("serialise");
    assert_eq!(value["code"], "service_unavailable");
    assert_eq!(value["traceId"], "abc");
    assert_eq!(value["details"]["store"], "elasticsearch");
}

#[rstest]
fn deserialising_rejects_blank_trace_id() {
    let payload = json!({ "code": "not_found", "message": "gone", "traceId": " " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_id_alias() {
    let payload = json!({ "code": "conflict", "message": "stale", "trace_id": "t-1" });
    let err: Error = serde_json::from_value(payload).expect("deserialise");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.trace_id(), Some("t-1"));
}

#[tokio::test]
async fn constructors_capture_the_ambient_trace_id() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid uuid");
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}
