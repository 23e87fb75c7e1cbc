use harmonia_core::{
    HashParams, TokenError, TokenService, UserError, UserId, UserRepository, UserRepositoryError,
};
use secrecy::Secret;

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Reset password use case - redeems a reset token for a new credential.
///
/// Possession of an unexpired token for the account is the proof of
/// ownership, so no old password is asked for.
pub struct ResetPasswordUseCase<'a, R, T>
where
    R: UserRepository,
    T: TokenService,
{
    users: &'a R,
    tokens: &'a T,
    hash_params: HashParams,
}

impl<'a, R, T> ResetPasswordUseCase<'a, R, T>
where
    R: UserRepository,
    T: TokenService,
{
    pub fn new(users: &'a R, tokens: &'a T, hash_params: HashParams) -> Self {
        Self {
            users,
            tokens,
            hash_params,
        }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &str,
        new_password: Secret<String>,
    ) -> Result<(), ResetPasswordError> {
        let claims = self.tokens.verify_token(token).await?;
        let id = UserId::from_string(claims.sub);

        let mut user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or(ResetPasswordError::UserNotFound)?;

        user.reset_password(new_password, &self.hash_params).await?;
        self.users.update(&user).await?;
        Ok(())
    }
}
