//! Customer entity.

use serde::{Deserialize, Serialize};

use super::identifier::define_entity_id;
use super::{DirectoryEntity, EmailAddress};

define_entity_id! {
    /// Stable customer identifier.
    pub struct CustomerId;
}

/// Fields required to register a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    /// Full name.
    pub name: String,
    /// Contact email; unique within the directory.
    pub email: EmailAddress,
    /// Phone number, free-form.
    pub phone: String,
    /// Postal address, free-form.
    pub address: String,
}

/// Partial customer update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email, checked for uniqueness.
    pub email: Option<EmailAddress>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement address.
    pub address: Option<String>,
}

/// Customer record.
///
/// ## Invariants
/// - `id` is assigned at creation and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: EmailAddress,
    phone: String,
    address: String,
}

impl Customer {
    /// Build a customer from a creation payload.
    ///
    /// # Examples
    /// ```
    /// use cesa_backend::domain::{Customer, CustomerId, EmailAddress, NewCustomer};
    ///
    /// let id = CustomerId::random();
    /// let customer = Customer::new(
    ///     id,
    ///     NewCustomer {
    ///         name: "John Doe".into(),
    ///         email: EmailAddress::new("john@example.com").expect("valid email"),
    ///         phone: "123-456-7890".into(),
    ///         address: "123 Main St".into(),
    ///     },
    /// );
    /// assert_eq!(customer.id(), id);
    /// ```
    pub fn new(id: CustomerId, draft: NewCustomer) -> Self {
        let NewCustomer {
            name,
            email,
            phone,
            address,
        } = draft;
        Self {
            id,
            name,
            email,
            phone,
            address,
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Merge `changes` over this record, field by field.
    #[must_use]
    pub fn with_changes(self, changes: CustomerChanges) -> Self {
        let CustomerChanges {
            name,
            email,
            phone,
            address,
        } = changes;
        Self {
            id: self.id,
            name: name.unwrap_or(self.name),
            email: email.unwrap_or(self.email),
            phone: phone.unwrap_or(self.phone),
            address: address.unwrap_or(self.address),
        }
    }
}

impl DirectoryEntity for Customer {
    type Id = CustomerId;
    type Draft = NewCustomer;
    type Changes = CustomerChanges;

    const LABEL: &'static str = "Customer";

    fn generate_id() -> Self::Id {
        CustomerId::random()
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self::new(id, draft)
    }

    fn apply(self, changes: Self::Changes) -> Self {
        self.with_changes(changes)
    }

    fn id(&self) -> Self::Id {
        self.id
    }

    fn email(&self) -> &EmailAddress {
        &self.email
    }

    fn draft_email(draft: &Self::Draft) -> &EmailAddress {
        &draft.email
    }

    fn requested_email(changes: &Self::Changes) -> Option<&EmailAddress> {
        changes.email.as_ref()
    }
}
