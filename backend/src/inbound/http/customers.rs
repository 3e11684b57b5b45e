//! Customer directory HTTP handlers.
//!
//! ```text
//! POST   /customers
//! GET    /customers
//! GET    /customers/{id}
//! PUT    /customers/{id}
//! DELETE /customers/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery};
use crate::domain::{Customer, CustomerChanges, Error, NewCustomer};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    ADDRESS, EMAIL, NAME, PHONE, parse_customer_id, parse_email, parse_optional_email, require,
};

/// Request payload for registering a customer.
///
/// Every field is required; they are optional here so absence is reported
/// in the error envelope.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CustomerRequest {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[schema(example = "123-456-7890")]
    pub phone: Option<String>,
    #[schema(example = "123 Main St")]
    pub address: Option<String>,
}

/// Request payload for updating a customer; absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Customer representation returned by the API.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CustomerResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            email: value.email().to_string(),
            phone: value.phone().to_owned(),
            address: value.address().to_owned(),
        }
    }
}

fn parse_new_customer(payload: CustomerRequest) -> Result<NewCustomer, Error> {
    let name = require(payload.name, NAME)?;
    let email = parse_email(require(payload.email, EMAIL)?)?;
    let phone = require(payload.phone, PHONE)?;
    let address = require(payload.address, ADDRESS)?;
    Ok(NewCustomer {
        name,
        email,
        phone,
        address,
    })
}

fn parse_customer_changes(payload: CustomerUpdateRequest) -> Result<CustomerChanges, Error> {
    Ok(CustomerChanges {
        name: payload.name,
        email: parse_optional_email(payload.email)?,
        phone: payload.phone,
        address: payload.address,
    })
}

/// Register a customer.
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "createCustomer"
)]
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_new_customer(payload.into_inner())?;
    let customer = state.customers.create(draft).await?;
    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}

/// List every customer.
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers", body = [CustomerResponse])
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customers")]
pub async fn list_customers(state: web::Data<HttpState>) -> web::Json<Vec<CustomerResponse>> {
    let customers = state.customers_query.list().await;
    web::Json(customers.into_iter().map(CustomerResponse::from).collect())
}

/// Fetch one customer.
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier (UUID)")),
    responses(
        (status = 200, description = "Customer", body = CustomerResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Customer not found", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "getCustomer"
)]
#[get("/customers/{id}")]
pub async fn get_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CustomerResponse>> {
    let id = parse_customer_id(&path)?;
    let customer = state.customers_query.get(id).await?;
    Ok(web::Json(CustomerResponse::from(customer)))
}

/// Update the supplied fields of a customer.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier (UUID)")),
    request_body = CustomerUpdateRequest,
    responses(
        (status = 200, description = "Updated customer", body = CustomerResponse),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorSchema),
        (status = 404, description = "Customer not found", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "updateCustomer"
)]
#[put("/customers/{id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CustomerUpdateRequest>,
) -> ApiResult<web::Json<CustomerResponse>> {
    let id = parse_customer_id(&path)?;
    let changes = parse_customer_changes(payload.into_inner())?;
    let customer = state.customers.update(id, changes).await?;
    Ok(web::Json(CustomerResponse::from(customer)))
}

/// Remove a customer.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier (UUID)")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Customer not found", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "deleteCustomer"
)]
#[delete("/customers/{id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_customer_id(&path)?;
    state.customers.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
