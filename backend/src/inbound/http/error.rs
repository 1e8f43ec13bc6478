//! Domain errors rendered as bookshelf HTTP responses.
//!
//! | code                  | status | logged | body                         |
//! |-----------------------|--------|--------|------------------------------|
//! | `invalid_request`     | 400    | no     | as raised, with field details |
//! | `not_found`           | 404    | no     | as raised                    |
//! | `conflict`            | 409    | no     | as raised                    |
//! | `service_unavailable` | 503    | yes    | as raised                    |
//! | `internal_error`      | 500    | yes    | `"Internal server error"`    |
//!
//! Every response carries the request's `trace-id` header when one is known.
//! Business rejections never come through here; handlers answer those with
//! a `code: 0` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by every bookshelf handler.
pub type ApiResult<T> = Result<T, Error>;

/// Message substituted for internal failures in client bodies.
pub(crate) const REDACTED_MESSAGE: &str = "Internal server error";

fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body sent to the client. Internal failures lose message and details but
/// keep the trace id.
fn client_payload(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    match error.trace_id() {
        Some(id) => Error::internal(REDACTED_MESSAGE).with_trace_id(id.to_owned()),
        None => Error::internal(REDACTED_MESSAGE),
    }
}

fn log_server_failure(error: &Error) {
    match error.code() {
        ErrorCode::ServiceUnavailable | ErrorCode::InternalError => error!(
            code = ?error.code(),
            message = error.message(),
            trace_id = error.trace_id(),
            "backing store or server failure"
        ),
        _ => {}
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_server_failure(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_payload(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced to a handler");
        Error::internal(REDACTED_MESSAGE)
    }
}
