use axum::{Extension, Json, response::IntoResponse};
use harmonia_core::AuthContext;
use serde::Serialize;

use super::error::AuthApiError;

#[derive(Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub roles: Vec<harmonia_core::Role>,
}

/// Echoes back the identity the guard attached to the request.
#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(
    Extension(context): Extension<AuthContext>,
) -> Result<impl IntoResponse, AuthApiError> {
    Ok(Json(MeResponse {
        id: context.id.to_string(),
        email: context.email.to_string(),
        username: context.username,
        roles: context.roles,
    }))
}
