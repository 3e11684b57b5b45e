//! Employee entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifier::define_entity_id;
use super::{DirectoryEntity, EmailAddress};

define_entity_id! {
    /// Stable employee identifier.
    pub struct EmployeeId;
}

/// Fields required to register an employee.
///
/// `salary` is expected to be non-negative but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Full name.
    pub name: String,
    /// Contact email; unique within the directory.
    pub email: EmailAddress,
    /// Phone number, free-form.
    pub phone: String,
    /// Owning department.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Annual salary.
    pub salary: Decimal,
}

/// Partial employee update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email, checked for uniqueness.
    pub email: Option<EmailAddress>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement department.
    pub department: Option<String>,
    /// Replacement job title.
    pub position: Option<String>,
    /// Replacement salary.
    pub salary: Option<Decimal>,
}

/// Employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: EmailAddress,
    phone: String,
    department: String,
    position: String,
    salary: Decimal,
}

impl Employee {
    /// Build an employee from a creation payload.
    pub fn new(id: EmployeeId, draft: NewEmployee) -> Self {
        let NewEmployee {
            name,
            email,
            phone,
            department,
            position,
            salary,
        } = draft;
        Self {
            id,
            name,
            email,
            phone,
            department,
            position,
            salary,
        }
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> EmployeeId {
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

    /// Department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Job title.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Annual salary, at the scale it was supplied.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    ///
    /// use cesa_backend::domain::{EmailAddress, Employee, EmployeeId, NewEmployee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     EmployeeId::random(),
    ///     NewEmployee {
    ///         name: "Jane Smith".into(),
    ///         email: EmailAddress::new("jane@company.com").expect("valid email"),
    ///         phone: "555-0100".into(),
    ///         department: "Engineering".into(),
    ///         position: "Developer".into(),
    ///         salary: Decimal::from_str("85000.50").expect("valid decimal"),
    ///     },
    /// );
    /// assert_eq!(employee.salary().to_string(), "85000.50");
    /// ```
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Merge `changes` over this record, field by field.
    #[must_use]
    pub fn with_changes(self, changes: EmployeeChanges) -> Self {
        let EmployeeChanges {
            name,
            email,
            phone,
            department,
            position,
            salary,
        } = changes;
        Self {
            id: self.id,
            name: name.unwrap_or(self.name),
            email: email.unwrap_or(self.email),
            phone: phone.unwrap_or(self.phone),
            department: department.unwrap_or(self.department),
            position: position.unwrap_or(self.position),
            salary: salary.unwrap_or(self.salary),
        }
    }
}

impl DirectoryEntity for Employee {
    type Id = EmployeeId;
    type Draft = NewEmployee;
    type Changes = EmployeeChanges;

    const LABEL: &'static str = "Employee";

    fn generate_id() -> Self::Id {
        EmployeeId::random()
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    #[fixture]
    fn employee() -> Employee {
        Employee::new(
            EmployeeId::random(),
            NewEmployee {
                name: "Jane Smith".into(),
                email: EmailAddress::new("jane@company.com").expect("valid email"),
                phone: "555-0100".into(),
                department: "Engineering".into(),
                position: "Senior Developer".into(),
                salary: Decimal::from_str("85000.00").expect("valid decimal"),
            },
        )
    }

    #[rstest]
    fn salary_only_change_preserves_other_fields(employee: Employee) {
        let raise = Decimal::from_str("90000.50").expect("valid decimal");
        let merged = employee.clone().with_changes(EmployeeChanges {
            salary: Some(raise),
            ..EmployeeChanges::default()
        });

        assert_eq!(merged.salary(), raise);
        assert_eq!(merged.id(), employee.id());
        assert_eq!(merged.name(), employee.name());
        assert_eq!(merged.email(), employee.email());
        assert_eq!(merged.department(), employee.department());
        assert_eq!(merged.position(), employee.position());
    }

    #[rstest]
    fn salary_keeps_decimal_scale_when_serialised(employee: Employee) {
        let value = serde_json::to_value(&employee).expect("serialise employee");
        assert_eq!(value["salary"], "85000.00");
    }

    #[rstest]
    fn negative_salary_is_accepted(employee: Employee) {
        let merged = employee.with_changes(EmployeeChanges {
            salary: Some(Decimal::from(-1)),
            ..EmployeeChanges::default()
        });
        assert!(merged.salary().is_sign_negative());
    }
}
