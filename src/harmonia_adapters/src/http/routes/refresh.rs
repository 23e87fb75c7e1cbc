use axum::{Json, extract::State, response::IntoResponse};
use harmonia_application::RefreshTokenUseCase;
use harmonia_core::TokenService;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub token: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

#[tracing::instrument(name = "RefreshToken", skip_all)]
pub async fn refresh<T>(
    State(tokens): State<T>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    T: TokenService + Clone + 'static,
{
    let use_case = RefreshTokenUseCase::new(&tokens);

    let token = use_case.execute(&request.token).await?;

    Ok(Json(RefreshResponse { token }))
}
