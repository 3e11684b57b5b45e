//! HTTP inbound adapter exposing the customer and employee directories.

use actix_web::web;

pub mod customers;
pub mod employees;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register every directory endpoint on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cesa_backend::inbound::http::configure_directory;
///
/// let _app = App::new().configure(configure_directory);
/// ```
pub fn configure_directory(cfg: &mut web::ServiceConfig) {
    cfg.service(customers::create_customer)
        .service(customers::list_customers)
        .service(customers::get_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer)
        .service(employees::create_employee)
        .service(employees::list_employees)
        .service(employees::get_employee)
        .service(employees::update_employee)
        .service(employees::delete_employee);
}
