//! Employee directory HTTP handlers.
//!
//! ```text
//! POST   /employees
//! GET    /employees
//! GET    /employees/{id}
//! PUT    /employees/{id}
//! DELETE /employees/{id}
//! ```
//!
//! `salary` is accepted as a JSON number or a numeric string and is always
//! returned as a string so decimal places survive the round trip.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery};
use crate::domain::{Employee, EmployeeChanges, Error, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DEPARTMENT, EMAIL, NAME, PHONE, POSITION, SALARY, parse_email, parse_employee_id,
    parse_optional_email, parse_optional_salary, parse_salary, require,
};

/// Request payload for registering an employee.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeeRequest {
    #[schema(example = "Jane Smith")]
    pub name: Option<String>,
    #[schema(example = "jane@company.com")]
    pub email: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "Senior Developer")]
    pub position: Option<String>,
    /// Number or numeric string.
    #[schema(value_type = Option<String>, example = "85000.00")]
    pub salary: Option<Value>,
}

/// Request payload for updating an employee; absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeeUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    #[schema(value_type = Option<String>, example = "90000.00")]
    pub salary: Option<Value>,
}

/// Employee representation returned by the API.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    #[schema(value_type = String, example = "85000.00")]
    pub salary: Decimal,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            email: value.email().to_string(),
            phone: value.phone().to_owned(),
            department: value.department().to_owned(),
            position: value.position().to_owned(),
            salary: value.salary(),
        }
    }
}

fn parse_new_employee(payload: EmployeeRequest) -> Result<NewEmployee, Error> {
    let name = require(payload.name, NAME)?;
    let email = parse_email(require(payload.email, EMAIL)?)?;
    let phone = require(payload.phone, PHONE)?;
    let department = require(payload.department, DEPARTMENT)?;
    let position = require(payload.position, POSITION)?;
    let salary = parse_salary(require(payload.salary, SALARY)?)?;
    Ok(NewEmployee {
        name,
        email,
        phone,
        department,
        position,
        salary,
    })
}

fn parse_employee_changes(payload: EmployeeUpdateRequest) -> Result<EmployeeChanges, Error> {
    Ok(EmployeeChanges {
        name: payload.name,
        email: parse_optional_email(payload.email)?,
        phone: payload.phone,
        department: payload.department,
        position: payload.position,
        salary: parse_optional_salary(payload.salary)?,
    })
}

/// Register an employee.
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_new_employee(payload.into_inner())?;
    let employee = state.employees.create(draft).await?;
    Ok(HttpResponse::Created().json(EmployeeResponse::from(employee)))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeResponse])
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> web::Json<Vec<EmployeeResponse>> {
    let employees = state.employees_query.list().await;
    web::Json(employees.into_iter().map(EmployeeResponse::from).collect())
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(&path)?;
    let employee = state.employees_query.get(id).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// Update the supplied fields of an employee.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    request_body = EmployeeUpdateRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeResponse),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EmployeeUpdateRequest>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(&path)?;
    let changes = parse_employee_changes(payload.into_inner())?;
    let employee = state.employees.update(id, changes).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// Remove an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_employee_id(&path)?;
    state.employees.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
