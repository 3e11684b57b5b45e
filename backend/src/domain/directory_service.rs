//! Directory service enforcing identity and email uniqueness over a store.
//!
//! One generic service backs both verticals; [`CustomerService`] and
//! [`EmployeeService`] are aliases. The service is the only place errors are
//! produced: the store reports absence through plain return values.
//!
//! Check-then-act sequences (uniqueness scan followed by insert, existence
//! check followed by overwrite or removal) run under a per-service write
//! lock, so two concurrent creates with the same email cannot both succeed.
//! Reads do not take the lock.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{DirectoryCommand, DirectoryQuery, EntityStore};
use crate::domain::{Customer, DirectoryEntity, EmailAddress, Employee, Error};

/// Service implementing the directory driving ports for entity type `E`.
pub struct DirectoryService<E, S: ?Sized> {
    store: Arc<S>,
    writes: Mutex<()>,
    _entity: PhantomData<fn() -> E>,
}

/// Customer directory backed by store `S`.
pub type CustomerService<S> = DirectoryService<Customer, S>;

/// Employee directory backed by store `S`.
pub type EmployeeService<S> = DirectoryService<Employee, S>;

impl<E, S: ?Sized> DirectoryService<E, S> {
    /// Create a service over an injected store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            writes: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        // The guard protects no data, so a poisoned lock is still usable.
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E, S> DirectoryService<E, S>
where
    E: DirectoryEntity,
    S: EntityStore<E> + ?Sized,
{
    fn not_found(id: E::Id) -> Error {
        Error::not_found(format!("{} with id '{id}' not found", E::LABEL))
    }

    fn already_exists(email: &EmailAddress) -> Error {
        Error::already_exists(format!("{} with email '{email}' already exists", E::LABEL))
    }

    /// Register a new record.
    ///
    /// # Errors
    /// `AlreadyExists` when the draft's email is already held.
    pub fn create_entity(&self, draft: E::Draft) -> Result<E, Error> {
        let _guard = self.write_guard();
        let email = E::draft_email(&draft);
        if self.store.exists_by_email(email, None) {
            debug!(entity = E::LABEL, %email, "create rejected: email taken");
            return Err(Self::already_exists(email));
        }

        let entity = E::from_draft(E::generate_id(), draft);
        let stored = self.store.add(entity);
        info!(entity = E::LABEL, id = %stored.id(), "record created");
        Ok(stored)
    }

    /// Fetch a record.
    ///
    /// # Errors
    /// `NotFound` when `id` is unknown.
    pub fn get_entity(&self, id: E::Id) -> Result<E, Error> {
        self.store.get(id).ok_or_else(|| Self::not_found(id))
    }

    /// Every stored record.
    pub fn list_entities(&self) -> Vec<E> {
        self.store.list()
    }

    /// Merge `changes` over the record for `id`.
    ///
    /// The email uniqueness scan runs only when the patch carries an email
    /// that differs from the stored one, and it skips the record itself.
    ///
    /// # Errors
    /// `NotFound` when `id` is unknown; `AlreadyExists` on an email clash.
    pub fn update_entity(&self, id: E::Id, changes: E::Changes) -> Result<E, Error> {
        let _guard = self.write_guard();
        let Some(current) = self.store.get(id) else {
            debug!(entity = E::LABEL, %id, "update rejected: unknown id");
            return Err(Self::not_found(id));
        };

        if let Some(email) = E::requested_email(&changes) {
            if email != current.email() && self.store.exists_by_email(email, Some(id)) {
                debug!(entity = E::LABEL, %id, %email, "update rejected: email taken");
                return Err(Self::already_exists(email));
            }
        }

        let stored = self.store.update(current.apply(changes));
        info!(entity = E::LABEL, %id, "record updated");
        Ok(stored)
    }

    /// Remove the record for `id`.
    ///
    /// # Errors
    /// `NotFound` when nothing was removed.
    pub fn delete_entity(&self, id: E::Id) -> Result<(), Error> {
        let _guard = self.write_guard();
        if !self.store.delete(id) {
            debug!(entity = E::LABEL, %id, "delete rejected: unknown id");
            return Err(Self::not_found(id));
        }
        info!(entity = E::LABEL, %id, "record deleted");
        Ok(())
    }
}

#[async_trait]
impl<E, S> DirectoryCommand<E> for DirectoryService<E, S>
where
    E: DirectoryEntity,
    S: EntityStore<E> + ?Sized,
{
    async fn create(&self, draft: E::Draft) -> Result<E, Error> {
        self.create_entity(draft)
    }

    async fn update(&self, id: E::Id, changes: E::Changes) -> Result<E, Error> {
        self.update_entity(id, changes)
    }

    async fn delete(&self, id: E::Id) -> Result<(), Error> {
        self.delete_entity(id)
    }
}

#[async_trait]
impl<E, S> DirectoryQuery<E> for DirectoryService<E, S>
where
    E: DirectoryEntity,
    S: EntityStore<E> + ?Sized,
{
    async fn get(&self, id: E::Id) -> Result<E, Error> {
        self.get_entity(id)
    }

    async fn list(&self) -> Vec<E> {
        self.list_entities()
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
