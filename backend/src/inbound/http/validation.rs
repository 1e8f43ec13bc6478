//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs declare every field optional so that a missing value becomes
//! a structured 400 naming the field, rather than a serde rejection.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    BookValidationError, CredentialsValidationError, EmptyChapterId, EmptyDocumentId, Error,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyValue,
    TooLong,
    InvalidInteger,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyValue => "empty_value",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const USERNAME: FieldName = FieldName::new("username");
pub(crate) const PASSWORD: FieldName = FieldName::new("password");
pub(crate) const USERID: FieldName = FieldName::new("userid");
pub(crate) const BOOKNAME: FieldName = FieldName::new("bookname");
pub(crate) const BOOKID: FieldName = FieldName::new("bookid");
pub(crate) const CHAPTERID: FieldName = FieldName::new("chapterid");
pub(crate) const EID: FieldName = FieldName::new("eid");

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn empty_value_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must not be empty"))
        .with_code(ErrorCode::EmptyValue)
}

pub(crate) fn too_long_error(field: FieldName, max: usize) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be at most {max} characters"))
        .with_code(ErrorCode::TooLong)
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be an integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

/// Unwrap a required field or report it missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Identifier accepted either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    pub(crate) fn parse(self, field: FieldName) -> Result<i64, Error> {
        match self {
            FlexibleId::Number(value) => Ok(value),
            FlexibleId::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid_integer_error(field, &raw)),
        }
    }

    /// Render the identifier as a string key; numbers use their decimal form.
    pub(crate) fn into_key(self) -> String {
        match self {
            FlexibleId::Number(value) => value.to_string(),
            FlexibleId::Text(raw) => raw,
        }
    }
}

/// Parse a required integer identifier.
pub(crate) fn parse_required_id(value: Option<FlexibleId>, field: FieldName) -> Result<i64, Error> {
    require(value, field)?.parse(field)
}

pub(crate) fn map_credentials_error(err: CredentialsValidationError) -> Error {
    match err {
        CredentialsValidationError::EmptyUsername => empty_value_error(USERNAME),
        CredentialsValidationError::UsernameTooLong { max } => too_long_error(USERNAME, max),
        CredentialsValidationError::EmptyPassword => empty_value_error(PASSWORD),
    }
}

pub(crate) fn map_book_name_error(err: BookValidationError) -> Error {
    match err {
        BookValidationError::EmptyName => empty_value_error(BOOKNAME),
        BookValidationError::NameTooLong { max } => too_long_error(BOOKNAME, max),
    }
}

pub(crate) fn map_chapter_id_error(_: EmptyChapterId) -> Error {
    empty_value_error(CHAPTERID)
}

pub(crate) fn map_document_id_error(_: EmptyDocumentId) -> Error {
    empty_value_error(EID)
}

/// `JsonConfig` error handler turning unreadable bodies into structured 400s.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request(format!("request body is not valid JSON: {err}"))
        .with_details(json!({ "code": ErrorCode::InvalidJson.as_str() }));
    let response = error.error_response();
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    fn missing_field_names_the_field() {
        let err = missing_field_error(EID);
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: eid");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "eid", "code": "missing_field" }))
        );
    }

    #[rstest]
    #[case(json!(42), Ok(42))]
    #[case(json!("42"), Ok(42))]
    #[case(json!(" 7 "), Ok(7))]
    #[case(json!("forty-two"), Err("invalid_integer"))]
    fn flexible_ids_accept_numbers_and_numeric_strings(
        #[case] raw: serde_json::Value,
        #[case] expected: Result<i64, &str>,
    ) {
        let id: FlexibleId = serde_json::from_value(raw).expect("number or string");
        let parsed = id.parse(USERID);
        match expected {
            Ok(value) => assert_eq!(parsed.expect("parses"), value),
            Err(code) => {
                let err = parsed.expect_err("rejected");
                assert_eq!(err.details().and_then(|d| d.get("code")), Some(&json!(code)));
            }
        }
    }

    #[rstest]
    fn flexible_ids_reject_other_json_types() {
        let result: Result<FlexibleId, _> = serde_json::from_value(json!({ "id": 1 }));
        assert!(result.is_err());
    }

    #[rstest]
    fn absent_ids_are_missing_fields() {
        let err = parse_required_id(None, BOOKID).expect_err("missing");
        assert_eq!(err.message(), "missing required field: bookid");
    }

    #[rstest]
    #[case(CredentialsValidationError::EmptyUsername, "username", "empty_value")]
    #[case(CredentialsValidationError::EmptyPassword, "password", "empty_value")]
    #[case(CredentialsValidationError::UsernameTooLong { max: 64 }, "username", "too_long")]
    fn credential_errors_name_the_offending_field(
        #[case] err: CredentialsValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = map_credentials_error(err);
        assert_eq!(mapped.details(), Some(&json!({ "field": field, "code": code })));
    }
}
