use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, role::Role, user::UserId};

/// Authorization context attached to a request once the guard has verified
/// the bearer token and loaded the user.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub id: UserId,
    pub email: Email,
    pub username: String,
    pub roles: Vec<Role>,
}

impl AuthContext {
    /// Role authorization: any intersection with `required` allows.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.iter().any(|role| self.roles.contains(role))
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No authentication token provided")]
    NoToken,
    #[error("Invalid authentication token")]
    InvalidToken,
    #[error("Authentication token has expired")]
    TokenExpired,
    #[error("User not found")]
    UserNotFound,
    #[error("Account is disabled")]
    AccountDisabled,
    #[error("Insufficient permissions")]
    Forbidden,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NoToken, Self::NoToken)
                | (Self::InvalidToken, Self::InvalidToken)
                | (Self::TokenExpired, Self::TokenExpired)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::AccountDisabled, Self::AccountDisabled)
                | (Self::Forbidden, Self::Forbidden)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// Session-less authentication seam.
///
/// The guard receives `http::request::Parts` rather than the full request:
/// token extraction only needs headers, and parts avoid non-`Sync` body
/// types. Implementations verify the token, load the user, and produce the
/// [`AuthContext`] handed to protected routes.
#[async_trait]
pub trait AuthGuard: Send + Sync {
    async fn authorize(&self, parts: &http::request::Parts) -> Result<AuthContext, AuthError>;
}
