//! End-to-end scenarios over the HTTP router
//!
//! Uses an in-memory state (seeded example data) and drives the axum router
//! directly with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use booking_server::api;
use booking_server::core::{Config, ServerState};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        work_dir: "unused".into(),
        http_port: 0,
        environment: "test".into(),
        admin_password: "admin".into(),
        payment_base_url: "https://pay.example.com/oronero".into(),
        webhook_url: None,
    }
}

/// Router over a fresh in-memory state (carries the seeded example data)
fn test_app() -> Router {
    api::router(ServerState::in_memory(test_config()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn booking_payload() -> Value {
    json!({
        "name": "Mario Rossi",
        "phone": "3331234567",
        "date": "2031-06-01",
        "time": "20:00",
        "guests": 4,
        "occasion": "Birthday",
        "area": "Panoramic Terrace"
    })
}

#[tokio::test]
async fn booking_scenario_creates_a_pending_reservation() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_payload())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["depositAmount"], 40);
    assert_eq!(
        body["paymentUrl"],
        "https://pay.example.com/oronero?amount=40"
    );
    let id = body["reservationId"].as_str().unwrap().to_string();

    let (status, found) = send(&app, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["status"], "Pending");
    assert_eq!(found["name"], "Mario Rossi");
    assert_eq!(found["guests"], 4);
    assert_eq!(found["area"], "Panoramic Terrace");

    // the success toast is active
    let (_, notice) = send(&app, "GET", "/api/notices", None).await;
    assert_eq!(notice["kind"], "success");
}

#[tokio::test]
async fn quote_previews_the_deposit_without_storing() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/bookings/quote", Some(booking_payload())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["depositAmount"], 40);
    assert_eq!(body["areaSurcharge"], 20);

    // nothing new in the collection (3 seeded records)
    let (_, list) = send(&app, "GET", "/api/reservations", None).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn invalid_booking_is_rejected_with_a_message() {
    let app = test_app();

    let mut payload = booking_payload();
    payload["name"] = json!("");
    let (status, body) = send(&app, "POST", "/api/bookings", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let mut payload = booking_payload();
    payload["guests"] = json!(13);
    let (status, _) = send(&app, "POST", "/api/bookings", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_filters_combine_and_sort() {
    let app = test_app();

    // seeded: Mario (today, Main Hall), Giulia (today, Panoramic Terrace),
    // Luca (2024-08-16, Exclusive Private Room)
    let (status, list) = send(&app, "GET", "/api/reservations?search=giulia", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Giulia Bianchi");

    let (_, list) = send(
        &app,
        "GET",
        "/api/reservations?area=Panoramic%20Terrace&search=mario",
        None,
    )
    .await;
    assert!(list.as_array().unwrap().is_empty());

    // "all" disables the area predicate; result is (date, time) sorted
    let (_, list) = send(&app, "GET", "/api/reservations?area=all", None).await;
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "Luca Verdi");

    let (status, _) = send(&app, "GET", "/api/reservations?area=Tutti", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seat_edit_increments_active_tables() {
    let app = test_app();

    let (_, before) = send(&app, "GET", "/api/reservations/stats", None).await;
    // Mario (2) + Giulia (4) are seeded today
    assert_eq!(before["coversToday"], 6);
    assert_eq!(before["activeTables"], 0);

    let (status, seated) = send(&app, "POST", "/api/reservations/2/seat", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seated, json!(true));

    let (_, after) = send(&app, "GET", "/api/reservations/stats", None).await;
    assert_eq!(after["activeTables"], 1);
    assert_eq!(after["coversToday"], 6);
    // Giulia was the only seeded Pending record
    assert_eq!(before["pending"], 1);
    assert_eq!(after["pending"], 0);
}

#[tokio::test]
async fn update_commits_the_whole_record_and_ignores_unknown_ids() {
    let app = test_app();

    let (_, mario) = send(&app, "GET", "/api/reservations/1", None).await;
    let mut edited = mario.clone();
    edited["status"] = json!("Seated");
    edited["time"] = json!("20:30");

    let (status, updated) = send(&app, "PUT", "/api/reservations/1", Some(edited)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!(true));

    let (_, reloaded) = send(&app, "GET", "/api/reservations/1", None).await;
    assert_eq!(reloaded["status"], "Seated");
    assert_eq!(reloaded["time"], "20:30");
    assert_eq!(reloaded["depositAmount"], mario["depositAmount"]);

    let (status, updated) = send(&app, "PUT", "/api/reservations/no-such-id", Some(mario)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!(false));
}

#[tokio::test]
async fn delete_is_idempotent_over_http() {
    let app = test_app();

    let (_, deleted) = send(&app, "DELETE", "/api/reservations/1", None).await;
    assert_eq!(deleted, json!(true));

    let (_, deleted) = send(&app, "DELETE", "/api/reservations/1", None).await;
    assert_eq!(deleted, json!(false));

    let (status, _) = send(&app, "GET", "/api/reservations/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_signal_keeps_the_record_and_raises_a_notice() {
    let app = test_app();

    let (_, cancelled) = send(&app, "POST", "/api/reservations/3/cancel", None).await;
    assert_eq!(cancelled, json!(true));

    let (_, luca) = send(&app, "GET", "/api/reservations/3", None).await;
    assert_eq!(luca["status"], "Cancelled");

    let (_, notice) = send(&app, "GET", "/api/notices", None).await;
    assert_eq!(notice["kind"], "cancellation");

    let (_, dismissed) = send(&app, "POST", "/api/notices/dismiss", None).await;
    assert_eq!(dismissed, json!(true));
    let (_, notice) = send(&app, "GET", "/api/notices", None).await;
    assert!(notice.is_null());
}

#[tokio::test]
async fn admin_gate_compares_the_plain_password() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0001");

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"password": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["granted"], json!(true));
}

#[tokio::test]
async fn health_reports_the_collection_size() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["reservations"], 3);
}
