//! Driving port for directory mutations.

use async_trait::async_trait;

use crate::domain::{Customer, DirectoryEntity, Employee, Error};

/// Create, update and delete operations for one entity type.
///
/// Errors carry [`crate::domain::ErrorCode::NotFound`] or
/// [`crate::domain::ErrorCode::AlreadyExists`]; adapters map the code, not
/// the message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryCommand<E: DirectoryEntity>: Send + Sync {
    /// Register a new record under a freshly generated identifier.
    ///
    /// # Errors
    /// `AlreadyExists` when another record already holds the draft's email.
    async fn create(&self, draft: E::Draft) -> Result<E, Error>;

    /// Merge `changes` over the record for `id` and store the result.
    ///
    /// # Errors
    /// - `NotFound` when no record exists for `id`.
    /// - `AlreadyExists` when the email changes to one held by another record.
    async fn update(&self, id: E::Id, changes: E::Changes) -> Result<E, Error>;

    /// Remove the record for `id`.
    ///
    /// # Errors
    /// `NotFound` when no record exists for `id`.
    async fn delete(&self, id: E::Id) -> Result<(), Error>;
}

/// Customer mutations as a trait object.
pub type CustomerCommand = dyn DirectoryCommand<Customer>;

/// Employee mutations as a trait object.
pub type EmployeeCommand = dyn DirectoryCommand<Employee>;
