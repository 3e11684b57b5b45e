//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every directory endpoint, the health probes and the
//! error schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe
//! domain errors without coupling domain types to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and printed
//! by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::customers::{CustomerRequest, CustomerResponse, CustomerUpdateRequest};
use crate::inbound::http::employees::{EmployeeRequest, EmployeeResponse, EmployeeUpdateRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer and employee directory API",
        description = "CRUD access to the in-memory customer and employee directories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::get_customer,
        crate::inbound::http::customers::update_customer,
        crate::inbound::http::customers::delete_customer,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CustomerRequest,
        CustomerUpdateRequest,
        CustomerResponse,
        EmployeeRequest,
        EmployeeUpdateRequest,
        EmployeeResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "customers", description = "Customer directory"),
        (name = "employees", description = "Employee directory"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
