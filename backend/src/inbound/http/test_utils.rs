//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{MockDirectoryCommand, MockDirectoryQuery};
use crate::domain::{Customer, Employee};
use crate::inbound::http::error::json_config;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mock ports for both directories; unused mocks carry no expectations.
#[derive(Default)]
pub struct MockPorts {
    pub customers: MockDirectoryCommand<Customer>,
    pub customers_query: MockDirectoryQuery<Customer>,
    pub employees: MockDirectoryCommand<Employee>,
    pub employees_query: MockDirectoryQuery<Employee>,
}

impl From<MockPorts> for HttpState {
    fn from(mocks: MockPorts) -> Self {
        HttpState::new(HttpStatePorts {
            customers: Arc::new(mocks.customers),
            customers_query: Arc::new(mocks.customers_query),
            employees: Arc::new(mocks.employees),
            employees_query: Arc::new(mocks.employees_query),
        })
    }
}

/// Build an app with handler state and the JSON error envelope installed.
pub fn test_app(
    mocks: MockPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from(mocks)))
        .app_data(json_config())
}
