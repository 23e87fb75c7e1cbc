use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};
use harmonia_application::DeactivateUseCase;
use harmonia_core::{AuthContext, UserRepository};

use super::error::AuthApiError;

/// Self-service deactivation. Outstanding tokens keep verifying but the
/// guard rejects them once the stored account is inactive.
#[tracing::instrument(name = "Deactivate", skip_all)]
pub async fn deactivate<R>(
    State(users): State<R>,
    Extension(context): Extension<AuthContext>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
{
    let use_case = DeactivateUseCase::new(&users);

    use_case.execute(&context.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
