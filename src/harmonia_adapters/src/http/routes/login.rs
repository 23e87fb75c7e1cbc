use axum::{Json, extract::State, response::IntoResponse};
use harmonia_application::LoginUseCase;
use harmonia_core::{TokenService, UserRepository};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{UserResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<R, T>(
    State((users, tokens)): State<(R, T)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let use_case = LoginUseCase::new(&users, &tokens);

    let outcome = use_case
        .execute(request.email.expose_secret(), request.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: UserResponse::from(&outcome.user),
    }))
}
