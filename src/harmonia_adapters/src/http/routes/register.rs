use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use harmonia_application::RegisterUseCase;
use harmonia_core::{EmailNotifier, HashParams, NewUser, TokenService, UserRepository};
use secrecy::Secret;
use serde::Deserialize;

use super::{UserResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<R, T, N>(
    State((users, tokens, notifier, hash_params)): State<(R, T, N, HashParams)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
    T: TokenService + Clone + 'static,
    N: EmailNotifier + Clone + 'static,
{
    let use_case = RegisterUseCase::new(&users, &tokens, &notifier, hash_params);

    let user = use_case
        .execute(NewUser {
            email: request.email,
            username: request.username,
            password: request.password,
            roles: None,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
