use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use harmonia_application::ForgotPasswordUseCase;
use harmonia_core::{EmailNotifier, TokenService, UserRepository};
use serde::Deserialize;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[tracing::instrument(name = "ForgotPassword", skip_all)]
pub async fn forgot_password<R, T, N>(
    State((users, tokens, notifier)): State<(R, T, N)>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
    T: TokenService + Clone + 'static,
    N: EmailNotifier + Clone + 'static,
{
    let use_case = ForgotPasswordUseCase::new(&users, &tokens, &notifier);

    use_case.execute(&request.email).await?;

    Ok(StatusCode::NO_CONTENT)
}
