//! Builders wiring directory stores and services into HTTP state.

use std::sync::Arc;

use actix_web::web;

use cesa_backend::domain::{CustomerService, EmployeeService};
use cesa_backend::inbound::http::state::{HttpState, HttpStatePorts};
use cesa_backend::outbound::memory::{InMemoryCustomerStore, InMemoryEmployeeStore};

/// Build HTTP state backed by fresh, empty in-memory stores.
///
/// Each directory gets its own store; one service instance serves both the
/// command and query ports so writes and reads see the same records.
pub(super) fn build_http_state() -> web::Data<HttpState> {
    let customers = Arc::new(CustomerService::new(Arc::new(InMemoryCustomerStore::new())));
    let employees = Arc::new(EmployeeService::new(Arc::new(InMemoryEmployeeStore::new())));
    web::Data::new(HttpState::new(HttpStatePorts {
        customers: customers.clone(),
        customers_query: customers,
        employees: employees.clone(),
        employees_query: employees,
    }))
}
