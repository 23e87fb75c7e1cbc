use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use harmonia_application::ResetPasswordUseCase;
use harmonia_core::{HashParams, TokenService, UserRepository};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "ResetPassword", skip_all)]
pub async fn reset_password<R, T>(
    State((users, tokens, hash_params)): State<(R, T, HashParams)>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let use_case = ResetPasswordUseCase::new(&users, &tokens, hash_params);

    use_case.execute(&request.token, request.new_password).await?;

    Ok(StatusCode::NO_CONTENT)
}
