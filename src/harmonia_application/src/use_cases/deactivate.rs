use harmonia_core::{UserId, UserRepository, UserRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum DeactivateError {
    #[error("User not found")]
    UserNotFound,
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Deactivate use case - disables an account. Issued tokens keep verifying
/// until expiry, but the auth guard rejects disabled accounts on every
/// request, so deactivation takes effect immediately.
pub struct DeactivateUseCase<'a, R>
where
    R: UserRepository,
{
    users: &'a R,
}

impl<'a, R> DeactivateUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(users: &'a R) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "DeactivateUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(&self, user_id: &UserId) -> Result<(), DeactivateError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DeactivateError::UserNotFound)?;

        user.deactivate();
        self.users.update(&user).await?;
        Ok(())
    }
}
