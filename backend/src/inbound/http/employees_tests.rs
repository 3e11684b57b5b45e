//! Tests for employee handlers.

use std::str::FromStr;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::{EmailAddress, EmployeeId};
use crate::inbound::http::test_utils::{MockPorts, test_app};

#[fixture]
fn jane() -> Employee {
    Employee::new(
        EmployeeId::random(),
        NewEmployee {
            name: "Jane Smith".into(),
            email: EmailAddress::new("jane@company.com").expect("valid email"),
            phone: "555-0100".into(),
            department: "Engineering".into(),
            position: "Senior Developer".into(),
            salary: Decimal::from_str("85000.00").expect("valid decimal"),
        },
    )
}

fn jane_payload(salary: Value) -> Value {
    json!({
        "name": "Jane Smith",
        "email": "jane@company.com",
        "phone": "555-0100",
        "department": "Engineering",
        "position": "Senior Developer",
        "salary": salary,
    })
}

async fn send(mocks: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        test_app(mocks)
            .service(create_employee)
            .service(list_employees)
            .service(get_employee)
            .service(update_employee)
            .service(delete_employee),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[rstest]
#[case::number(json!(85000), "85000")]
#[case::string(json!("85000.00"), "85000.00")]
#[actix_web::test]
async fn create_accepts_numeric_salary_forms(
    jane: Employee,
    #[case] salary: Value,
    #[case] expected: &'static str,
) {
    let mut mocks = MockPorts::default();
    let id = jane.id();
    mocks
        .employees
        .expect_create()
        .withf(move |draft| draft.salary.to_string() == expected)
        .times(1)
        .returning(move |draft| Ok(Employee::new(id, draft)));

    let (status, body) = send(
        mocks,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(jane_payload(salary)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["department"], "Engineering");
    assert_eq!(body["salary"], expected);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_non_numeric_salary() {
    let mut mocks = MockPorts::default();
    mocks.employees.expect_create().never();

    let (status, body) = send(
        mocks,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(jane_payload(json!("a lot"))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "salary");
    assert_eq!(body["details"]["code"], "invalid_decimal");
}

#[rstest]
#[case::department("department")]
#[case::position("position")]
#[case::salary("salary")]
#[actix_web::test]
async fn create_rejects_missing_fields(#[case] field: &str) {
    let mut mocks = MockPorts::default();
    mocks.employees.expect_create().never();
    let mut payload = jane_payload(json!("85000.00"));
    payload
        .as_object_mut()
        .expect("object payload")
        .remove(field);

    let (status, body) = send(
        mocks,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "missing_field");
}

#[rstest]
#[actix_web::test]
async fn create_reports_duplicate_email(jane: Employee) {
    let mut mocks = MockPorts::default();
    let email = jane.email().to_string();
    mocks.employees.expect_create().returning(move |_| {
        Err(Error::already_exists(format!(
            "Employee with email '{email}' already exists"
        )))
    });

    let (status, body) = send(
        mocks,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(jane_payload(json!(85000))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "already_exists");
    assert_eq!(
        body["message"],
        "Employee with email 'jane@company.com' already exists"
    );
}

#[rstest]
#[actix_web::test]
async fn update_forwards_salary_only(jane: Employee) {
    let id = jane.id();
    let mut mocks = MockPorts::default();
    mocks
        .employees
        .expect_update()
        .withf(move |requested, changes| {
            *requested == id
                && changes.salary == Decimal::from_str("90000.00").ok()
                && changes.name.is_none()
                && changes.position.is_none()
        })
        .times(1)
        .returning(move |_, changes| Ok(jane.clone().with_changes(changes)));

    let (status, body) = send(
        mocks,
        actix_test::TestRequest::put()
            .uri(&format!("/employees/{id}"))
            .set_json(json!({"salary": "90000.00"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salary"], "90000.00");
    assert_eq!(body["position"], "Senior Developer");
}

#[rstest]
#[actix_web::test]
async fn get_and_list_return_records(jane: Employee) {
    let id = jane.id();
    let listed = jane.clone();
    let mut mocks = MockPorts::default();
    mocks
        .employees_query
        .expect_get()
        .returning(move |_| Ok(jane.clone()));
    mocks
        .employees_query
        .expect_list()
        .returning(move || vec![listed.clone()]);

    let app = actix_test::init_service(
        test_app(mocks)
            .service(get_employee)
            .service(list_employees),
    )
    .await;

    let one: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/employees/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(one["email"], "jane@company.com");

    let all: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/employees").to_request(),
    )
    .await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn delete_maps_outcomes() {
    let mut mocks = MockPorts::default();
    let mut calls = 0;
    mocks.employees.expect_delete().times(2).returning(move |id| {
        calls += 1;
        if calls == 1 {
            Ok(())
        } else {
            Err(Error::not_found(format!("Employee with id '{id}' not found")))
        }
    });

    let app = actix_test::init_service(test_app(mocks).service(delete_employee)).await;
    let uri = format!("/employees/{}", EmployeeId::random());

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn malformed_identifier_is_rejected() {
    let mut mocks = MockPorts::default();
    mocks.employees_query.expect_get().never();

    let (status, body) =
        send(mocks, actix_test::TestRequest::get().uri("/employees/123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_uuid");
}
