//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs keep every field optional so missing and malformed input is
//! reported through the standard error envelope with `details { field, code }`
//! rather than a bare extractor rejection.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::domain::{CustomerId, EmailAddress, EmployeeId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidEmail,
    InvalidDecimal,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidDecimal => "invalid_decimal",
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

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
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

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const PHONE: FieldName = FieldName::new("phone");
pub(crate) const ADDRESS: FieldName = FieldName::new("address");
pub(crate) const DEPARTMENT: FieldName = FieldName::new("department");
pub(crate) const POSITION: FieldName = FieldName::new("position");
pub(crate) const SALARY: FieldName = FieldName::new("salary");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn invalid_email_error(field: FieldName, reason: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} is invalid: {reason}"))
        .with_code(ErrorCode::InvalidEmail)
}

pub(crate) fn invalid_decimal_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a decimal number"))
        .with_value(ErrorCode::InvalidDecimal, value)
}

/// Require a field that the payload marks as optional.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_customer_id(value: &str) -> Result<CustomerId, Error> {
    CustomerId::new(value).map_err(|_| invalid_uuid_error(ID, value))
}

pub(crate) fn parse_employee_id(value: &str) -> Result<EmployeeId, Error> {
    EmployeeId::new(value).map_err(|_| invalid_uuid_error(ID, value))
}

pub(crate) fn parse_email(value: String) -> Result<EmailAddress, Error> {
    EmailAddress::new(value).map_err(|err| invalid_email_error(EMAIL, &err.to_string()))
}

pub(crate) fn parse_optional_email(value: Option<String>) -> Result<Option<EmailAddress>, Error> {
    value.map(parse_email).transpose()
}

/// Parse a salary given as a JSON number or a numeric string.
///
/// `serde_json` is built with `arbitrary_precision`, so a number keeps the
/// digits it was sent with: `85000.50` keeps its scale and long values are
/// never rounded through `f64`.
pub(crate) fn parse_salary(value: Value) -> Result<Decimal, Error> {
    let raw = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => return Err(invalid_decimal_error(SALARY, &other.to_string())),
    };
    Decimal::from_str(raw.trim())
        .or_else(|_| Decimal::from_scientific(raw.trim()))
        .map_err(|_| invalid_decimal_error(SALARY, &raw))
}

pub(crate) fn parse_optional_salary(value: Option<Value>) -> Result<Option<Decimal>, Error> {
    value.map(parse_salary).transpose()
}
