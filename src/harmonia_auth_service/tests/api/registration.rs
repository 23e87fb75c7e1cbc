use serde_json::Value;

use crate::helpers::{error_kind, spawn_app};

#[tokio::test]
async fn register_returns_201_and_the_created_user() {
    let app = spawn_app().await;

    let response = app
        .post_register("Alice@Example.com", "alice", "Str0ng!pass")
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["roles"], serde_json::json!(["user"]));
    assert_eq!(body["isActive"], true);
    assert!(body["lastLoginAt"].is_null());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn register_sends_a_verification_email() {
    let app = spawn_app().await;

    app.post_register("bob@example.com", "bob", "Str0ng!pass")
        .await;

    let sent = app.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "bob@example.com");
}

#[tokio::test]
async fn register_rejects_invalid_input_with_400() {
    let app = spawn_app().await;

    for (email, username, password) in [
        ("not-an-email", "carol", "Str0ng!pass"),
        ("carol@example.com", "c", "Str0ng!pass"),
        ("carol@example.com", "carol", "weak"),
        ("carol@example.com", "carol", "NoSymbol1x"),
    ] {
        let response = app.post_register(email, username, password).await;
        assert_eq!(response.status().as_u16(), 400);
        assert_eq!(error_kind(response).await, "InvalidInput");
    }
}

#[tokio::test]
async fn register_rejects_duplicate_email_with_409() {
    let app = spawn_app().await;

    app.post_register("dave@example.com", "dave", "Str0ng!pass")
        .await;
    // Same mailbox, different case and username.
    let response = app
        .post_register("DAVE@example.com", "dave2", "Str0ng!pass")
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_kind(response).await, "Conflict");
}

#[tokio::test]
async fn register_rejects_duplicate_username_with_409() {
    let app = spawn_app().await;

    app.post_register("erin@example.com", "erin", "Str0ng!pass")
        .await;
    let response = app
        .post_register("erin2@example.com", "erin", "Str0ng!pass")
        .await;

    assert_eq!(response.status().as_u16(), 409);
}
