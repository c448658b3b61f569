use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use cafe_pos::{app::build_router, cafe::Cafe, config::AppConfig, state::AppState};

fn app() -> Router {
    let config = AppConfig {
        rng_seed: Some(3),
        ..AppConfig::default()
    };
    build_router(AppState::new(Cafe::new(&config)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn checkout_over_http() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders/sessions",
        Some(json!({ "customer_name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["state"], "selecting");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let lines_uri = format!("/api/orders/sessions/{id}/lines");
    let (status, _) = send(
        &app,
        "POST",
        &lines_uri,
        Some(json!({ "item_id": 1, "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        &lines_uri,
        Some(json!({ "item_id": 3, "quantity": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["kind"], "invalid_quantity");

    let (status, _) = send(
        &app,
        "POST",
        &lines_uri,
        Some(json!({ "item_id": 3, "quantity": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", &format!("/api/orders/sessions/{id}/finish"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["recorded"], true);
    assert_eq!(body["data"]["order"]["total_amount"], 300);
    assert_eq!(body["data"]["order"]["lines"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/menu/1", None).await;
    assert_eq!(body["data"]["stock"], 98);

    let (_, body) = send(&app, "GET", "/api/analytics", None).await;
    assert_eq!(body["data"]["total_orders"], 1);
    assert_eq!(body["data"]["total_revenue"], 300);
    assert_eq!(body["data"]["unique_customers"], 1);

    let (status, body) = send(&app, "GET", "/api/customers/Alice/preference", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["preferred_category"], "beverage");
    assert_eq!(body["data"]["order_count"], 1);
}

#[tokio::test]
async fn menu_errors_map_to_status_codes() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/menu",
        Some(json!({ "name": "Cake", "price": 0, "category": "food", "stock": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"]["kind"], "validation");

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/menu/99",
        Some(json!({ "field": "price", "value": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/api/menu/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], false);

    let (status, body) = send(&app, "DELETE", "/api/menu/2?confirm=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], true);

    let (_, body) = send(&app, "GET", "/api/menu?include_out_of_stock=true", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["kind"], "not_found");
}

#[tokio::test]
async fn fractional_and_boolean_quantities_are_invalid() {
    let app = app();
    let (_, body) = send(&app, "POST", "/api/orders/sessions", Some(json!({}))).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let lines_uri = format!("/api/orders/sessions/{id}/lines");

    for quantity in [json!(2.5), json!(true), json!(null), json!([1])] {
        let (status, body) = send(
            &app,
            "POST",
            &lines_uri,
            Some(json!({ "item_id": 1, "quantity": quantity })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "quantity {quantity}");
        assert_eq!(body["data"]["kind"], "invalid_quantity");
    }

    let (_, body) = send(&app, "GET", "/api/menu/1", None).await;
    assert_eq!(body["data"]["stock"], 100);
}

#[tokio::test]
async fn cancel_over_http_restores_stock() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/api/orders/sessions",
        Some(json!({ "customer_name": "Bea" })),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    let session_uri = format!("/api/orders/sessions/{id}");

    let (status, _) = send(
        &app,
        "POST",
        &format!("{session_uri}/lines"),
        Some(json!({ "item_id": 3, "quantity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/menu/3", None).await;
    assert_eq!(body["data"]["stock"], 46);

    let (status, body) = send(&app, "DELETE", &session_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["released"][0]["quantity"], 4);

    let (_, body) = send(&app, "GET", "/api/menu/3", None).await;
    assert_eq!(body["data"]["stock"], 50);
    let (status, _) = send(&app, "GET", &session_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &session_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
