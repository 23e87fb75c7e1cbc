use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use harmonia_application::ChangePasswordUseCase;
use harmonia_core::{AuthContext, HashParams, UserRepository};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "oldPassword")]
    pub old_password: Secret<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "ChangePassword", skip_all)]
pub async fn change_password<R>(
    State((users, hash_params)): State<(R, HashParams)>,
    Extension(context): Extension<AuthContext>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
{
    let use_case = ChangePasswordUseCase::new(&users, hash_params);

    use_case
        .execute(&context.id, request.old_password, request.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
