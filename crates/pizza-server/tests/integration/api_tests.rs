use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::json;

use pizza_core::ID_LENGTH;
use pizza_core::id::is_url_safe;
use pizza_server::dto::{AuthorizationRecord, OrderRecord};

use crate::integration::common::{
    get, post, post_raw, setup_file_app, setup_file_app_with, setup_test_app,
};

fn ivan_order() -> serde_json::Value {
    json!({
        "name": "Ivan Ivanov",
        "ingredients": ["cucumber", "salami", "bacon"],
        "sauces": ["mayo"],
        "size": "30",
        "dough": "thick",
        "price": "319",
        "address": "Sesame Street",
        "card_number": "4444 4444 4444 4444",
        "payment": "visa"
    })
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app();

    let (status, json) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store"], "ok");
}

#[tokio::test]
async fn lists_start_empty() {
    let app = setup_test_app();

    let (status, json) = get(&app.router, "/authorization").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let (status, json) = get(&app.router, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_list_authorization() {
    let app = setup_test_app();

    let (status, created) = post(
        &app.router,
        "/authorization",
        &json!({"email": "test@mail.ru", "password": "qwerty12345", "app": "admin"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let record: AuthorizationRecord = serde_json::from_value(created.clone()).unwrap();
    let id = record.id.unwrap();
    assert_eq!(id.len(), ID_LENGTH);
    assert!(is_url_safe(&id));
    assert_eq!(
        created,
        json!({"id": id, "email": "test@mail.ru", "password": "qwerty12345", "app": "admin"})
    );

    let (status, listed) = get(&app.router, "/authorization").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let app = setup_test_app();

    let (status, created) = post(
        &app.router,
        "/authorization",
        &json!({"id": "my-own-id", "email": "a@b.c", "password": "p", "app": "client"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(created["id"], "my-own-id");
    assert_eq!(created["id"].as_str().unwrap().len(), ID_LENGTH);
}

#[tokio::test]
async fn extra_fields_are_dropped() {
    let app = setup_test_app();

    let (_, created) = post(
        &app.router,
        "/authorization",
        &json!({"email": "a@b.c", "password": "p", "app": "admin", "is_superuser": true}),
    )
    .await;

    assert!(created.get("is_superuser").is_none());
    let (_, listed) = get(&app.router, "/authorization").await;
    assert!(listed[0].get("is_superuser").is_none());
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_list_order() {
    let app = setup_test_app();

    let (status, created) = post(&app.router, "/orders", &ivan_order()).await;

    assert_eq!(status, StatusCode::OK);
    let order: OrderRecord = serde_json::from_value(created.clone()).unwrap();
    assert_eq!(order.id.as_ref().map(String::len), Some(ID_LENGTH));
    assert_eq!(order.name.as_deref(), Some("Ivan Ivanov"));
    assert_eq!(
        order.ingredients,
        Some(vec!["cucumber".into(), "salami".into(), "bacon".into()])
    );
    assert_eq!(order.sauces, Some(vec!["mayo".into()]));
    assert_eq!(order.card_number.as_deref(), Some("4444 4444 4444 4444"));

    let mut expected = ivan_order();
    expected["id"] = created["id"].clone();
    assert_eq!(created, expected);

    let (_, listed) = get(&app.router, "/orders").await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn missing_fields_are_absent_not_rejected() {
    let app = setup_test_app();

    let mut body = ivan_order();
    body.as_object_mut().unwrap().remove("price");

    let (status, created) = post(&app.router, "/orders", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(created.get("price").is_none());
    assert_eq!(created["name"], "Ivan Ivanov");
}

#[tokio::test]
async fn empty_body_creates_id_only_record() {
    let app = setup_test_app();

    let (status, created) = post_raw(&app.router, "/orders", "").await;

    assert_eq!(status, StatusCode::OK);
    let fields: Vec<&String> = created.as_object().unwrap().keys().collect();
    assert_eq!(fields, ["id"]);
}

#[tokio::test]
async fn ids_are_unique_across_creates() {
    let app = setup_test_app();

    let mut ids = HashSet::new();
    for _ in 0..25 {
        let (_, created) = post(&app.router, "/orders", &json!({"size": "30"})).await;
        ids.insert(created["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 25);
    let (_, listed) = get(&app.router, "/orders").await;
    assert_eq!(listed.as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn list_is_idempotent() {
    let app = setup_test_app();
    post(&app.router, "/orders", &ivan_order()).await;

    let (_, first) = get(&app.router, "/orders").await;
    let (_, second) = get(&app.router, "/orders").await;
    let (_, third) = get(&app.router, "/orders").await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn collections_are_independent() {
    let app = setup_test_app();
    post(&app.router, "/orders", &ivan_order()).await;

    let (_, auth) = get(&app.router, "/authorization").await;
    assert_eq!(auth, json!([]));
}

// ---------------------------------------------------------------------------
// Faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_500() {
    let app = setup_test_app();

    let (status, json) = post_raw(&app.router, "/orders", "{\"name\": ").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "serialization_error");
    let (_, listed) = get(&app.router, "/orders").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn null_body_returns_500() {
    let app = setup_test_app();

    let (status, json) = post_raw(&app.router, "/authorization", "null").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "invalid_payload");
}

#[tokio::test]
async fn scalar_bodies_return_500() {
    let app = setup_test_app();

    for body in ["\"text\"", "319", "true"] {
        let (status, json) = post_raw(&app.router, "/orders", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        assert_eq!(json["error"], "invalid_payload");
    }

    let (_, listed) = get(&app.router, "/orders").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn array_body_creates_id_only_record() {
    let app = setup_test_app();

    let (status, created) = post_raw(&app.router, "/authorization", "[1, 2]").await;

    assert_eq!(status, StatusCode::OK);
    let fields: Vec<&String> = created.as_object().unwrap().keys().collect();
    assert_eq!(fields, ["id"]);
}

#[tokio::test]
async fn store_read_failure_returns_500_with_fault() {
    let app = setup_file_app_with(r#"{"authorization": [], "orders": {"oops": true}}"#).await;

    let (status, json) = get(&app.router, "/orders").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "store_error");
    assert!(json["message"].as_str().unwrap().contains("orders"));

    let (status, json) = get(&app.router, "/authorization").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn store_write_failure_returns_500_with_fault() {
    let mut app = setup_file_app().await;

    let (status, _) = post(&app.router, "/orders", &ivan_order()).await;
    assert_eq!(status, StatusCode::OK);

    // Pull the directory out from under the store.
    app.dir.take().unwrap().close().unwrap();

    let (status, json) = post(&app.router, "/orders", &ivan_order()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "store_error");
    assert!(json["message"].as_str().unwrap().contains("Failed to write"));

    let (status, json) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "unhealthy");
}

#[tokio::test]
async fn file_backed_create_and_list() {
    let app = setup_file_app().await;

    let (_, created) = post(
        &app.router,
        "/authorization",
        &json!({"email": "test@mail.ru", "password": "qwerty12345", "app": "admin"}),
    )
    .await;

    let (_, listed) = get(&app.router, "/authorization").await;
    assert_eq!(listed, json!([created]));

    let path = app.dir.as_ref().unwrap().path().join("db.json");
    let on_disk: serde_json::Value =
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(on_disk["authorization"], json!([created]));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app();

    let (status, json) = get(&app.router, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/orders"].is_object());
    assert!(json["components"]["schemas"]["Order"].is_object());
}
