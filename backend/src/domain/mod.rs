//! Domain primitives, aggregates and services.
//!
//! Purpose: define the customer and employee directories independently of
//! HTTP and storage. Types here are free of framework concerns; adapters
//! depend on the domain, never the other way round.
//!
//! Public surface:
//! - Customer / Employee: directory records, with `New*` drafts and
//!   `*Changes` sparse patches.
//! - EmailAddress, CustomerId, EmployeeId: validated value types.
//! - DirectoryService: generic service enforcing email uniqueness.
//! - Error (alias to `error::Error`): error payload with a stable code.
//! - TraceId: request-scoped correlation identifier.

pub mod customer;
mod directory_service;
pub mod email;
pub mod employee;
mod entity;
pub mod error;
mod identifier;
pub mod ports;
pub mod trace_id;

pub use self::customer::{Customer, CustomerChanges, CustomerId, NewCustomer};
pub use self::directory_service::{CustomerService, DirectoryService, EmployeeService};
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::employee::{Employee, EmployeeChanges, EmployeeId, NewEmployee};
pub use self::entity::DirectoryEntity;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::identifier::IdValidationError;
pub use self::trace_id::TraceId;

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use cesa_backend::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("Customer with id 'x' not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
