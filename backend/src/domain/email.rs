//! Email address value type shared by customers and employees.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted length for an email address (RFC 5321 path limit).
pub const EMAIL_MAX: usize = 254;

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailValidationError {
    /// Input was blank.
    #[error("email must not be empty")]
    Empty,
    /// Input had leading or trailing whitespace.
    #[error("email must not contain surrounding whitespace")]
    SurroundingWhitespace,
    /// Input exceeded [`EMAIL_MAX`] characters.
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    /// Input was not shaped like `local@domain.tld`.
    #[error("email must be a valid address")]
    Malformed,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated email address.
///
/// Comparison is exact string equality; no case folding is applied, so
/// `Ada@example.com` and `ada@example.com` are distinct addresses.
///
/// # Examples
/// ```
/// use cesa_backend::domain::EmailAddress;
///
/// let email = EmailAddress::new("john@example.com").expect("valid email");
/// assert_eq!(email.as_ref(), "john@example.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap `email`.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, EmailValidationError> {
        if email.trim().is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if email.trim() != email {
            return Err(EmailValidationError::SurroundingWhitespace);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&email) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
