//! Form submission integration tests.

mod common;

use axum::http::StatusCode;
use common::{failed_fields, TestHarness};
use serde_json::{json, Value};

use roastery_core::EntityKind;
use roastery_store::Filter;

#[tokio::test]
async fn wholesale_inquiry_is_stored() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/wholesale")
        .json(&json!({
            "name": "Ada",
            "business_name": "Corner Cafe",
            "email": "ada@cornercafe.example",
            "volume_needed": "20kg/month"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "ok": true }));

    let stored = harness
        .store()
        .find(EntityKind::WholesaleInquiry, &Filter::all(), None)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields["business_name"], "Corner Cafe");
}

#[tokio::test]
async fn wholesale_inquiry_requires_volume() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/wholesale")
        .json(&json!({
            "name": "Ada",
            "business_name": "Corner Cafe",
            "email": "ada@cornercafe.example"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&response.json()), ["volume_needed"]);
}

#[tokio::test]
async fn contact_message_is_stored() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Grace",
            "email": "grace@example.com",
            "phone": "+1 555 0100",
            "message": "Do you ship to Canada?"
        }))
        .await;

    response.assert_status_ok();
    let stored = harness
        .store()
        .find(EntityKind::ContactMessage, &Filter::all(), None)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields["phone"], "+1 555 0100");
}

#[tokio::test]
async fn contact_message_rejects_wrong_types() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Grace",
            "email": 42,
            "message": "Hello"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(failed_fields(&body), ["email"]);
    assert_eq!(
        body["error"]["details"]["errors"][0]["violation"]["kind"],
        "wrong_type"
    );
}

#[tokio::test]
async fn subscribe_is_stored() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/subscribe")
        .json(&json!({ "email": "news@example.com" }))
        .await;

    response.assert_status_ok();
    let stored = harness
        .store()
        .find(
            EntityKind::NewsletterSubscription,
            &Filter::eq("email", "news@example.com"),
            None,
        )
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn subscribe_requires_email() {
    let harness = TestHarness::new();

    let response = harness.server.post("/api/subscribe").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(failed_fields(&response.json()), ["email"]);
}

#[tokio::test]
async fn submissions_without_store_are_unavailable() {
    let harness = TestHarness::without_store();

    let response = harness
        .server
        .post("/api/subscribe")
        .json(&json!({ "email": "news@example.com" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn invalid_submission_without_store_is_still_unprocessable() {
    let harness = TestHarness::without_store();

    let response = harness.server.post("/api/subscribe").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
