//! In-memory directory storage.
//!
//! [`InMemoryStore`] keeps records in a `HashMap` behind an `RwLock`. Each
//! record remembers the sequence number of its first insertion so `list`
//! returns records in insertion order; overwriting a record keeps its slot,
//! while deleting and re-adding appends it at the end.
//!
//! The store performs no validation. Uniqueness and existence checks belong
//! to the service that owns it.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::ports::EntityStore;
use crate::domain::{Customer, DirectoryEntity, EmailAddress, Employee};

/// Customer records held in process memory.
pub type InMemoryCustomerStore = InMemoryStore<Customer>;

/// Employee records held in process memory.
pub type InMemoryEmployeeStore = InMemoryStore<Employee>;

#[derive(Debug)]
struct Slot<E> {
    seq: u64,
    entity: E,
}

#[derive(Debug)]
struct Records<E: DirectoryEntity> {
    by_id: HashMap<E::Id, Slot<E>>,
    next_seq: u64,
}

impl<E: DirectoryEntity> Records<E> {
    fn upsert(&mut self, entity: E) {
        let id = entity.id();
        match self.by_id.get_mut(&id) {
            Some(slot) => slot.entity = entity,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.by_id.insert(id, Slot { seq, entity });
            }
        }
    }
}

/// Thread-safe in-memory [`EntityStore`].
///
/// A fresh store is empty. Stores are constructed by the caller and injected
/// into services; nothing here is global.
#[derive(Debug)]
pub struct InMemoryStore<E: DirectoryEntity> {
    records: RwLock<Records<E>>,
}

impl<E: DirectoryEntity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Records {
                by_id: HashMap::new(),
                next_seq: 0,
            }),
        }
    }
}

impl<E: DirectoryEntity> InMemoryStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation leaves the map consistent, so poisoned locks are
    // recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, Records<E>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records<E>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: DirectoryEntity> EntityStore<E> for InMemoryStore<E> {
    fn add(&self, entity: E) -> E {
        self.write().upsert(entity.clone());
        entity
    }

    fn get(&self, id: E::Id) -> Option<E> {
        self.read().by_id.get(&id).map(|slot| slot.entity.clone())
    }

    fn list(&self) -> Vec<E> {
        let records = self.read();
        let mut slots: Vec<&Slot<E>> = records.by_id.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| slot.entity.clone()).collect()
    }

    fn update(&self, entity: E) -> E {
        self.write().upsert(entity.clone());
        entity
    }

    fn delete(&self, id: E::Id) -> bool {
        self.write().by_id.remove(&id).is_some()
    }

    fn exists_by_email(&self, email: &EmailAddress, exclude_id: Option<E::Id>) -> bool {
        self.read().by_id.values().any(|slot| {
            slot.entity.email() == email && Some(slot.entity.id()) != exclude_id
        })
    }
}
