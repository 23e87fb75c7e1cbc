use serde_json::{Value, json};

use crate::helpers::{error_kind, spawn_app};

#[tokio::test]
async fn login_succeeds_with_correct_credentials() {
    let app = spawn_app().await;
    app.post_register("alice@example.com", "alice", "Str0ng!pass")
        .await;

    let response = app.post_login("alice@example.com", "Str0ng!pass").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(!body["user"]["lastLoginAt"].is_null());
}

#[tokio::test]
async fn login_is_case_insensitive_on_email() {
    let app = spawn_app().await;
    app.post_register("bob@example.com", "bob", "Str0ng!pass")
        .await;

    let response = app.post_login("BOB@Example.COM", "Str0ng!pass").await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn login_rejects_wrong_password_with_401() {
    let app = spawn_app().await;
    app.post_register("carol@example.com", "carol", "Str0ng!pass")
        .await;

    let response = app.post_login("carol@example.com", "Wr0ng!pass").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "InvalidCredentials");
}

#[tokio::test]
async fn login_rejects_unknown_email_with_the_same_error_as_wrong_password() {
    let app = spawn_app().await;

    let response = app.post_login("nobody@example.com", "Str0ng!pass").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "InvalidCredentials");
}

#[tokio::test]
async fn me_returns_the_authenticated_identity() {
    let app = spawn_app().await;
    app.post_register("dave@example.com", "dave", "Str0ng!pass")
        .await;
    let token = app.login_token("dave@example.com", "Str0ng!pass").await;

    let response = app.get_me(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "dave@example.com");
    assert_eq!(body["username"], "dave");
    assert_eq!(body["roles"], json!(["user"]));
}

#[tokio::test]
async fn protected_route_rejects_a_missing_token_with_401() {
    let app = spawn_app().await;

    let response = app.get_me(None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "NoToken");
}

#[tokio::test]
async fn protected_route_rejects_a_garbage_token_with_401() {
    let app = spawn_app().await;

    let response = app.get_me(Some("not-a-jwt")).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "InvalidToken");
}

#[tokio::test]
async fn protected_route_rejects_an_expired_token_with_401() {
    let app = spawn_app().await;
    let user = app
        .seed_user("erin@example.com", "erin", "Str0ng!pass", None)
        .await;
    let token = app.expired_token_for(&user).await;

    let response = app.get_me(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "TokenExpired");
}

#[tokio::test]
async fn refresh_issues_a_new_token_for_a_valid_one() {
    let app = spawn_app().await;
    app.post_register("frank@example.com", "frank", "Str0ng!pass")
        .await;
    let token = app.login_token("frank@example.com", "Str0ng!pass").await;

    let response = app
        .client
        .post(format!("{}/refresh", app.address))
        .json(&json!({ "token": token }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let refreshed = body["token"].as_str().unwrap();
    assert!(!refreshed.is_empty());

    // The refreshed token authenticates.
    let response = app.get_me(Some(refreshed)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn refresh_rejects_an_expired_token() {
    let app = spawn_app().await;
    let user = app
        .seed_user("grace@example.com", "grace", "Str0ng!pass", None)
        .await;
    let token = app.expired_token_for(&user).await;

    let response = app
        .client
        .post(format!("{}/refresh", app.address))
        .json(&json!({ "token": token }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "TokenExpired");
}
