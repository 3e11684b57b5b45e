//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real stores.

use std::sync::Arc;

use crate::domain::ports::{CustomerCommand, CustomerQuery, EmployeeCommand, EmployeeQuery};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub customers: Arc<CustomerCommand>,
    pub customers_query: Arc<CustomerQuery>,
    pub employees: Arc<EmployeeCommand>,
    pub employees_query: Arc<EmployeeQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub customers: Arc<CustomerCommand>,
    pub customers_query: Arc<CustomerQuery>,
    pub employees: Arc<EmployeeCommand>,
    pub employees_query: Arc<EmployeeQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cesa_backend::domain::{CustomerService, EmployeeService};
    /// use cesa_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use cesa_backend::outbound::memory::{InMemoryCustomerStore, InMemoryEmployeeStore};
    ///
    /// let customers = Arc::new(CustomerService::new(Arc::new(InMemoryCustomerStore::new())));
    /// let employees = Arc::new(EmployeeService::new(Arc::new(InMemoryEmployeeStore::new())));
    /// let state = HttpState::new(HttpStatePorts {
    ///     customers: customers.clone(),
    ///     customers_query: customers,
    ///     employees: employees.clone(),
    ///     employees_query: employees,
    /// });
    /// # let _ = state;
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            customers,
            customers_query,
            employees,
            employees_query,
        } = ports;
        Self {
            customers,
            customers_query,
            employees,
            employees_query,
        }
    }
}
