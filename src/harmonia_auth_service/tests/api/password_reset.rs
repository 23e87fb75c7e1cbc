use harmonia_adapters::email::mock_email_notifier::SentEmailKind;

use crate::helpers::{error_kind, spawn_app};

#[tokio::test]
async fn forgot_password_mails_a_reset_token() {
    let app = spawn_app().await;
    app.seed_user("alice@example.com", "alice", "Secret1!", None)
        .await;

    let response = app.post_forgot_password("alice@example.com").await;
    assert_eq!(response.status().as_u16(), 204);

    let sent = app.notifier.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "alice@example.com");
    assert_eq!(sent[0].kind, SentEmailKind::PasswordReset);
    assert!(!sent[0].token.is_empty());
}

#[tokio::test]
async fn mailed_token_resets_the_password() {
    let app = spawn_app().await;
    app.seed_user("alice@example.com", "alice", "Secret1!", None)
        .await;

    app.post_forgot_password("alice@example.com").await;
    let token = app.notifier.sent().await[0].token.clone();

    let response = app.post_reset_password(&token, "NewSecret1!").await;
    assert_eq!(response.status().as_u16(), 204);

    // The new credential works, the replaced one does not.
    app.login_token("alice@example.com", "NewSecret1!").await;
    let stale = app.post_login("alice@example.com", "Secret1!").await;
    assert_eq!(stale.status().as_u16(), 401);
}

#[tokio::test]
async fn forgot_password_for_an_unknown_address_is_not_found() {
    let app = spawn_app().await;

    let response = app.post_forgot_password("nobody@example.com").await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_kind(response).await, "NotFound");
    assert!(app.notifier.sent().await.is_empty());
}

#[tokio::test]
async fn reset_with_a_garbage_token_is_rejected() {
    let app = spawn_app().await;

    let response = app.post_reset_password("not.a.token", "NewSecret1!").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "InvalidToken");
}

#[tokio::test]
async fn reset_with_an_expired_token_is_rejected() {
    let app = spawn_app().await;
    let user = app
        .seed_user("alice@example.com", "alice", "Secret1!", None)
        .await;

    let token = app.expired_token_for(&user).await;
    let response = app.post_reset_password(&token, "NewSecret1!").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "TokenExpired");
}

#[tokio::test]
async fn reset_to_a_weak_password_is_rejected() {
    let app = spawn_app().await;
    app.seed_user("alice@example.com", "alice", "Secret1!", None)
        .await;

    app.post_forgot_password("alice@example.com").await;
    let token = app.notifier.sent().await[0].token.clone();

    let response = app.post_reset_password(&token, "weak").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_kind(response).await, "InvalidInput");

    // The old credential still works.
    app.login_token("alice@example.com", "Secret1!").await;
}
