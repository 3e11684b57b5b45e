//! Shared helpers for HTTP integration tests.
//!
//! Every app built here owns fresh, empty in-memory stores so tests stay
//! isolated from each other.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use cesa_backend::Trace;
use cesa_backend::domain::{CustomerService, EmployeeService};
use cesa_backend::inbound::http::configure_directory;
use cesa_backend::inbound::http::error::json_config;
use cesa_backend::inbound::http::state::{HttpState, HttpStatePorts};
use cesa_backend::outbound::memory::{InMemoryCustomerStore, InMemoryEmployeeStore};

/// Status, `trace-id` header and decoded JSON body of one response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// HTTP state over fresh stores.
pub fn fresh_state() -> HttpState {
    let customers = Arc::new(CustomerService::new(Arc::new(InMemoryCustomerStore::new())));
    let employees = Arc::new(EmployeeService::new(Arc::new(InMemoryEmployeeStore::new())));
    HttpState::new(HttpStatePorts {
        customers: customers.clone(),
        customers_query: customers,
        employees: employees.clone(),
        employees_query: employees,
    })
}

/// Initialise the full directory app the way the server wires it.
pub async fn directory_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(fresh_state()))
            .app_data(json_config())
            .wrap(Trace)
            .configure(configure_directory),
    )
    .await
}

/// Send `request` and decode the reply; empty bodies decode to `Null`.
pub async fn send<S>(app: &S, request: test::TestRequest) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    Reply {
        status,
        trace_id,
        body,
    }
}

/// Extract the `id` field of a created record.
pub fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("record has string id").to_owned()
}
