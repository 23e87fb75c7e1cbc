use harmonia_core::{TokenError, TokenService};

/// Refresh token use case - re-issues the claims of a still-valid token with
/// a fresh expiration.
///
/// The user behind the claims is not re-checked here; a deactivated or
/// deleted account is rejected by the auth guard on its next request.
pub struct RefreshTokenUseCase<'a, T>
where
    T: TokenService,
{
    tokens: &'a T,
}

impl<'a, T> RefreshTokenUseCase<'a, T>
where
    T: TokenService,
{
    pub fn new(tokens: &'a T) -> Self {
        Self { tokens }
    }

    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<String, TokenError> {
        self.tokens.refresh_token(token).await
    }
}
