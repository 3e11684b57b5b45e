//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn directory failures into consistent JSON responses and status
//! codes. Extractor failures (malformed JSON bodies) are folded into the same
//! envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        // Duplicate emails are reported as client errors, not conflicts.
        ErrorCode::AlreadyExists => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Translate a JSON extractor failure into an `invalid_request` error.
pub(crate) fn json_payload_error(err: &JsonPayloadError) -> Error {
    let (message, code) = match err {
        JsonPayloadError::ContentType => (
            "request body must be application/json".to_owned(),
            "invalid_content_type",
        ),
        JsonPayloadError::Deserialize(inner) => {
            (format!("request body is not valid JSON: {inner}"), "invalid_json")
        }
        other => (format!("request body could not be read: {other}"), "invalid_body"),
    };
    Error::invalid_request(message).with_details(json!({
        "field": "body",
        "code": code,
    }))
}

/// JSON extractor configuration reporting failures in the error envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cesa_backend::inbound::http::error::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let mapped = json_payload_error(&err);
        actix_web::error::InternalError::from_response(err, mapped.error_response()).into()
    })
}
