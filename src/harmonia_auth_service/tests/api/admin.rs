use harmonia_core::Role;
use serde_json::Value;

use crate::helpers::{error_kind, spawn_app};

#[tokio::test]
async fn listing_users_requires_the_admin_role() {
    let app = spawn_app().await;
    app.post_register("alice@example.com", "alice", "Str0ng!pass")
        .await;
    let token = app.login_token("alice@example.com", "Str0ng!pass").await;

    let response = app.get_users(&token, None).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_kind(response).await, "Forbidden");
}

#[tokio::test]
async fn an_admin_can_list_all_users() {
    let app = spawn_app().await;
    app.seed_user(
        "root@example.com",
        "root",
        "Str0ng!pass",
        Some(vec![Role::Admin]),
    )
    .await;
    app.post_register("bob@example.com", "bob", "Str0ng!pass")
        .await;
    let token = app.login_token("root@example.com", "Str0ng!pass").await;

    let response = app.get_users(&token, None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 2);
}

#[tokio::test]
async fn an_admin_can_filter_users_by_role() {
    let app = spawn_app().await;
    app.seed_user(
        "root@example.com",
        "root",
        "Str0ng!pass",
        Some(vec![Role::Admin]),
    )
    .await;
    app.post_register("carol@example.com", "carol", "Str0ng!pass")
        .await;
    let token = app.login_token("root@example.com", "Str0ng!pass").await;

    let response = app.get_users(&token, Some("admin")).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["username"], "root");

    let response = app.get_users(&token, Some("bogus")).await;
    assert_eq!(response.status().as_u16(), 400);
}
