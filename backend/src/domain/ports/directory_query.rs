//! Driving port for directory reads.

use async_trait::async_trait;

use crate::domain::{Customer, DirectoryEntity, Employee, Error};

/// Read operations for one entity type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery<E: DirectoryEntity>: Send + Sync {
    /// Fetch the record for `id`.
    ///
    /// # Errors
    /// `NotFound` when no record exists for `id`.
    async fn get(&self, id: E::Id) -> Result<E, Error>;

    /// Every stored record; empty on a fresh store.
    async fn list(&self) -> Vec<E>;
}

/// Customer reads as a trait object.
pub type CustomerQuery = dyn DirectoryQuery<Customer>;

/// Employee reads as a trait object.
pub type EmployeeQuery = dyn DirectoryQuery<Employee>;
