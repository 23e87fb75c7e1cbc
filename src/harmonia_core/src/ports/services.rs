use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{email::Email, role::Role, user::User};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Expired, Self::Expired)
                | (Self::Invalid, Self::Invalid)
                | (Self::Signing(_), Self::Signing(_))
        )
    }
}

/// Identity claims carried by a bearer token. Stateless: nothing here is
/// persisted server-side, so the claims are only as fresh as the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id.
    pub sub: String,
    pub email: String,
    pub roles: Vec<Role>,
    /// Issued-at, seconds since the epoch.
    pub iat: usize,
    /// Expiration, seconds since the epoch.
    pub exp: usize,
}

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Tokens follow `issued -> valid until expiry -> expired`; there is no
/// server-side revocation. `refresh_token` re-issues claims without checking
/// whether the user still exists or is active; the auth guard re-checks both
/// on every authenticated request.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn generate_token(&self, user: &User) -> Result<String, TokenError>;
    async fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    async fn refresh_token(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Debug, Error)]
pub enum EmailNotifierError {
    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Outbound mail collaborator. Failures are best-effort at call sites:
/// a registration or reset flow logs the error and carries on.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError>;

    async fn send_password_reset_email(
        &self,
        recipient: &Email,
        token: &str,
    ) -> Result<(), EmailNotifierError>;
}
