//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local directory stores backing the customer and
//!   employee services.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
