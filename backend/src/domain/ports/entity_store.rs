//! Driven port for keyed entity storage.
//!
//! Every operation is total: absence is reported through `Option`/`bool`,
//! never through an error. Adapters own their records exclusively and hand
//! out clones.

use crate::domain::{DirectoryEntity, EmailAddress};

/// Keyed storage for one entity type.
///
/// `add` and `update` share overwrite semantics: the record is stored under
/// its own identifier, replacing whatever was there.
#[cfg_attr(test, mockall::automock)]
pub trait EntityStore<E: DirectoryEntity>: Send + Sync {
    /// Store `entity` under its identifier and return it.
    fn add(&self, entity: E) -> E;

    /// Fetch the record for `id`.
    fn get(&self, id: E::Id) -> Option<E>;

    /// Snapshot of every stored record. Ordering is not part of the contract.
    fn list(&self) -> Vec<E>;

    /// Replace the record stored under the entity's identifier.
    fn update(&self, entity: E) -> E;

    /// Remove the record for `id`; `true` when something was removed.
    fn delete(&self, id: E::Id) -> bool;

    /// Whether a record other than `exclude_id` holds `email`.
    ///
    /// Linear scan; the stores are not indexed by email.
    fn exists_by_email(&self, email: &EmailAddress, exclude_id: Option<E::Id>) -> bool;
}
