//! End-to-end customer directory behaviour over HTTP with real stores.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use uuid::Uuid;

use support::{directory_app, id_of, send};

#[fixture]
fn john() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "123-456-7890",
        "address": "123 Main St",
    })
}

#[fixture]
fn jane() -> Value {
    json!({
        "name": "Jane Roe",
        "email": "jane@example.com",
        "phone": "555-0199",
        "address": "9 Elm Rd",
    })
}

fn create(payload: &Value) -> TestRequest {
    TestRequest::post().uri("/customers").set_json(payload)
}

#[rstest]
#[actix_rt::test]
async fn fresh_directory_lists_nothing() {
    let app = directory_app().await;
    let reply = send(&app, TestRequest::get().uri("/customers")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn create_assigns_fresh_id_and_round_trips(john: Value) {
    let app = directory_app().await;

    let created = send(&app, create(&john)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = id_of(&created.body);
    assert!(Uuid::parse_str(&id).is_ok());
    for field in ["name", "email", "phone", "address"] {
        assert_eq!(created.body[field], john[field], "field {field}");
    }

    let fetched = send(&app, TestRequest::get().uri(&format!("/customers/{id}"))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let listed = send(&app, TestRequest::get().uri("/customers")).await;
    assert_eq!(listed.body, json!([created.body]));
}

#[rstest]
#[actix_rt::test]
async fn duplicate_email_is_rejected(john: Value) {
    let app = directory_app().await;
    assert_eq!(send(&app, create(&john)).await.status, StatusCode::CREATED);

    let mut again = john.clone();
    again["name"] = json!("Other John");
    let reply = send(&app, create(&again)).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "already_exists");
    let message = reply.body["message"].as_str().expect("message");
    assert!(message.contains("already exists"));
    assert_eq!(reply.body["traceId"].as_str(), reply.trace_id.as_deref());

    let listed = send(&app, TestRequest::get().uri("/customers")).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_rt::test]
async fn unknown_id_is_not_found() {
    let app = directory_app().await;
    let id = Uuid::new_v4();

    let reply = send(&app, TestRequest::get().uri(&format!("/customers/{id}"))).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["code"], "not_found");
    assert_eq!(
        reply.body["message"],
        format!("Customer with id '{id}' not found")
    );
    assert!(reply.trace_id.is_some());
}

#[rstest]
#[actix_rt::test]
async fn partial_update_keeps_untouched_fields(john: Value) {
    let app = directory_app().await;
    let id = id_of(&send(&app, create(&john)).await.body);

    let reply = send(
        &app,
        TestRequest::put()
            .uri(&format!("/customers/{id}"))
            .set_json(json!({"name": "John Updated"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["id"], id.as_str());
    assert_eq!(reply.body["name"], "John Updated");
    assert_eq!(reply.body["email"], john["email"]);
    assert_eq!(reply.body["phone"], john["phone"]);
    assert_eq!(reply.body["address"], john["address"]);

    let fetched = send(&app, TestRequest::get().uri(&format!("/customers/{id}"))).await;
    assert_eq!(fetched.body, reply.body);
}

#[rstest]
#[actix_rt::test]
async fn update_to_another_customers_email_is_rejected(john: Value, jane: Value) {
    let app = directory_app().await;
    let john_id = id_of(&send(&app, create(&john)).await.body);
    send(&app, create(&jane)).await;

    let reply = send(
        &app,
        TestRequest::put()
            .uri(&format!("/customers/{john_id}"))
            .set_json(json!({"email": "jane@example.com"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "already_exists");

    let fetched = send(&app, TestRequest::get().uri(&format!("/customers/{john_id}"))).await;
    assert_eq!(fetched.body["email"], "john@example.com");
}

#[rstest]
#[actix_rt::test]
async fn update_with_own_email_succeeds(john: Value) {
    let app = directory_app().await;
    let id = id_of(&send(&app, create(&john)).await.body);

    let reply = send(
        &app,
        TestRequest::put()
            .uri(&format!("/customers/{id}"))
            .set_json(json!({"email": "john@example.com", "name": "Johnny"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["name"], "Johnny");
    assert_eq!(reply.body["email"], "john@example.com");
}

#[rstest]
#[actix_rt::test]
async fn update_of_unknown_id_is_not_found() {
    let app = directory_app().await;

    let reply = send(
        &app,
        TestRequest::put()
            .uri(&format!("/customers/{}", Uuid::new_v4()))
            .set_json(json!({"name": "Nobody"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_rt::test]
async fn delete_succeeds_once_then_reports_not_found(john: Value) {
    let app = directory_app().await;
    let id = id_of(&send(&app, create(&john)).await.body);
    let uri = format!("/customers/{id}");

    let first = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(first.body, Value::Null);

    let fetched = send(&app, TestRequest::get().uri(&uri)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let second = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert!(
        second.body["message"]
            .as_str()
            .is_some_and(|m| m.contains("not found"))
    );
}

#[rstest]
#[actix_rt::test]
async fn deleted_email_can_be_registered_again(john: Value) {
    let app = directory_app().await;
    let id = id_of(&send(&app, create(&john)).await.body);
    send(&app, TestRequest::delete().uri(&format!("/customers/{id}"))).await;

    let again = send(&app, create(&john)).await;

    assert_eq!(again.status, StatusCode::CREATED);
    assert_ne!(id_of(&again.body), id);
}

#[rstest]
#[case::bad_id(TestRequest::get().uri("/customers/not-a-uuid"), "id", "invalid_uuid")]
#[case::bad_email(
    TestRequest::post().uri("/customers").set_json(json!({
        "name": "A", "email": "nope", "phone": "1", "address": "x"
    })),
    "email",
    "invalid_email"
)]
#[case::missing_field(
    TestRequest::post().uri("/customers").set_json(json!({"name": "A"})),
    "email",
    "missing_field"
)]
#[case::bad_json(
    TestRequest::post()
        .uri("/customers")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json"),
    "body",
    "invalid_json"
)]
#[actix_rt::test]
async fn invalid_requests_use_error_envelope(
    #[case] request: TestRequest,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = directory_app().await;

    let reply = send(&app, request).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "invalid_request");
    assert_eq!(reply.body["details"]["field"], field);
    assert_eq!(reply.body["details"]["code"], code);
    assert!(reply.trace_id.is_some());
}

#[rstest]
#[actix_rt::test]
async fn list_keeps_insertion_order_across_updates(john: Value, jane: Value) {
    let app = directory_app().await;
    let john_id = id_of(&send(&app, create(&john)).await.body);
    let jane_id = id_of(&send(&app, create(&jane)).await.body);
    send(
        &app,
        TestRequest::put()
            .uri(&format!("/customers/{john_id}"))
            .set_json(json!({"phone": "000"})),
    )
    .await;

    let listed = send(&app, TestRequest::get().uri("/customers")).await;
    let ids: Vec<&str> = listed
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert_eq!(ids, [john_id.as_str(), jane_id.as_str()]);
}
