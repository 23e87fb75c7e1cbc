use async_trait::async_trait;
use axum::{
    Extension,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use harmonia_core::{
    AuthContext, AuthError, AuthGuard, Role, TokenError, TokenService, UserId, UserRepository,
};
use http::header::AUTHORIZATION;

use super::routes::error::AuthApiError;

/// Verifies a bearer token and loads the live user behind it.
///
/// The roles attached to the request come from the repository, not from the
/// token claims, so a role change takes effect without waiting for the token
/// to expire.
#[derive(Clone)]
pub struct BearerAuthenticator<R, T> {
    users: R,
    tokens: T,
}

impl<R, T> BearerAuthenticator<R, T> {
    pub fn new(users: R, tokens: T) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl<R, T> AuthGuard for BearerAuthenticator<R, T>
where
    R: UserRepository,
    T: TokenService,
{
    async fn authorize(&self, parts: &http::request::Parts) -> Result<AuthContext, AuthError> {
        let token = extract_bearer_token(parts)?;

        let claims = self.tokens.verify_token(token).await.map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        let user = self
            .users
            .find_by_id(&UserId::from_string(claims.sub))
            .await
            .map_err(|e| AuthError::Unexpected(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_active() {
            return Err(AuthError::AccountDisabled);
        }

        Ok(AuthContext {
            id: user.id().clone(),
            email: user.email().clone(),
            username: user.username().to_owned(),
            roles: user.roles(),
        })
    }
}

fn extract_bearer_token(parts: &http::request::Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::NoToken)?
        .to_str()
        .map_err(|_| AuthError::NoToken)?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::NoToken),
    }
}

/// Middleware that runs the guard and attaches the [`AuthContext`] to the
/// request extensions for downstream handlers.
pub async fn authenticate<G>(
    State(guard): State<G>,
    request: Request,
    next: Next,
) -> Result<Response, AuthApiError>
where
    G: AuthGuard + Clone + Send + Sync + 'static,
{
    let (parts, body) = request.into_parts();
    let context = guard.authorize(&parts).await?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Role set required by [`require_role`].
#[derive(Clone)]
pub struct RequiredRoles(pub Vec<Role>);

/// Middleware enforcing role authorization: any intersection between the
/// required set and the context's roles allows the request.
pub async fn require_role(
    State(RequiredRoles(required)): State<RequiredRoles>,
    Extension(context): Extension<AuthContext>,
    request: Request,
    next: Next,
) -> Result<Response, AuthApiError> {
    if !context.has_any_role(&required) {
        return Err(AuthError::Forbidden.into());
    }
    Ok(next.run(request).await)
}
