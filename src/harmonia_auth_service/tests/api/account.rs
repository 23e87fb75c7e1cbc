use serde_json::json;

use crate::helpers::{error_kind, spawn_app};

#[tokio::test]
async fn change_password_invalidates_the_old_one() {
    let app = spawn_app().await;
    app.post_register("alice@example.com", "alice", "Old!pass1")
        .await;
    let token = app.login_token("alice@example.com", "Old!pass1").await;

    let response = app
        .client
        .post(format!("{}/change-password", app.address))
        .bearer_auth(&token)
        .json(&json!({ "oldPassword": "Old!pass1", "newPassword": "New!pass2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let stale = app.post_login("alice@example.com", "Old!pass1").await;
    assert_eq!(stale.status().as_u16(), 401);

    let fresh = app.post_login("alice@example.com", "New!pass2").await;
    assert_eq!(fresh.status().as_u16(), 200);
}

#[tokio::test]
async fn change_password_rejects_a_wrong_old_password() {
    let app = spawn_app().await;
    app.post_register("bob@example.com", "bob", "Old!pass1")
        .await;
    let token = app.login_token("bob@example.com", "Old!pass1").await;

    let response = app
        .client
        .post(format!("{}/change-password", app.address))
        .bearer_auth(&token)
        .json(&json!({ "oldPassword": "Wr0ng!pass", "newPassword": "New!pass2" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_kind(response).await, "InvalidCredentials");
}

#[tokio::test]
async fn change_password_rejects_a_weak_new_password() {
    let app = spawn_app().await;
    app.post_register("carol@example.com", "carol", "Old!pass1")
        .await;
    let token = app.login_token("carol@example.com", "Old!pass1").await;

    let response = app
        .client
        .post(format!("{}/change-password", app.address))
        .bearer_auth(&token)
        .json(&json!({ "oldPassword": "Old!pass1", "newPassword": "weak" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_kind(response).await, "InvalidInput");
}

#[tokio::test]
async fn deactivated_account_cannot_log_in_or_use_its_token() {
    let app = spawn_app().await;
    app.post_register("dave@example.com", "dave", "Str0ng!pass")
        .await;
    let token = app.login_token("dave@example.com", "Str0ng!pass").await;

    let response = app
        .client
        .post(format!("{}/deactivate", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    // The still-valid token is now refused by the guard.
    let me = app.get_me(Some(&token)).await;
    assert_eq!(me.status().as_u16(), 401);
    assert_eq!(error_kind(me).await, "AccountDisabled");

    let login = app.post_login("dave@example.com", "Str0ng!pass").await;
    assert_eq!(login.status().as_u16(), 401);
    assert_eq!(error_kind(login).await, "AccountDisabled");
}
