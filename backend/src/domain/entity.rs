//! Shape shared by every directory entity (customers, employees).
//!
//! Services and stores are generic over [`DirectoryEntity`], so each vertical
//! only describes its fields, its creation payload and its sparse patch.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::EmailAddress;

/// A record held in a directory store.
///
/// ## Invariants
/// - `id()` never changes for the lifetime of a record; [`apply`] keeps it.
/// - `email()` is unique among records of the same type in one store.
///
/// [`apply`]: DirectoryEntity::apply
pub trait DirectoryEntity: Clone + Debug + Send + Sync + 'static {
    /// Opaque identifier type.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;
    /// All-fields-required creation payload.
    type Draft: Debug + Send + 'static;
    /// Sparse patch; each absent field keeps its current value.
    type Changes: Debug + Send + 'static;

    /// Label used in messages, e.g. `"Customer"`.
    const LABEL: &'static str;

    /// Generate a fresh identifier for a new record.
    fn generate_id() -> Self::Id;

    /// Build a record from a draft under `id`.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Merge `changes` over `self`, returning the replacement record.
    fn apply(self, changes: Self::Changes) -> Self;

    /// Identifier of this record.
    fn id(&self) -> Self::Id;

    /// Email of this record.
    fn email(&self) -> &EmailAddress;

    /// Email carried by a creation payload.
    fn draft_email(draft: &Self::Draft) -> &EmailAddress;

    /// Email carried by a patch, when supplied.
    fn requested_email(changes: &Self::Changes) -> Option<&EmailAddress>;
}
