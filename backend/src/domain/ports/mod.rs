//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`EntityStore`]) describe what the domain needs from
//! storage. Driving ports ([`DirectoryCommand`], [`DirectoryQuery`]) are what
//! inbound adapters call; the services in [`crate::domain`] implement them.

mod directory_command;
mod directory_query;
mod entity_store;

#[cfg(test)]
pub use directory_command::MockDirectoryCommand;
pub use directory_command::{CustomerCommand, DirectoryCommand, EmployeeCommand};
#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
pub use directory_query::{CustomerQuery, DirectoryQuery, EmployeeQuery};
#[cfg(test)]
pub use entity_store::MockEntityStore;
pub use entity_store::EntityStore;
