use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use harmonia_application::ListUsersUseCase;
use harmonia_core::{Role, UserRepository};
use serde::Deserialize;

use super::{UserResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

#[tracing::instrument(name = "ListUsers", skip_all)]
pub async fn list_users<R>(
    State(users): State<R>,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: UserRepository + Clone + 'static,
{
    let role = query
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .map_err(|err| AuthApiError::InvalidInput(err.to_string()))?;

    let use_case = ListUsersUseCase::new(&users);

    let users = use_case.execute(role).await?;

    Ok(Json(
        users.iter().map(UserResponse::from).collect::<Vec<_>>(),
    ))
}
