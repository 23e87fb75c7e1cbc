use harmonia_core::{HashParams, UserError, UserId, UserRepository, UserRepositoryError};
use secrecy::Secret;

#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    User(#[from] UserError),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Change password use case - verifies the old password through the entity
/// and persists the re-hashed credential.
pub struct ChangePasswordUseCase<'a, R>
where
    R: UserRepository,
{
    users: &'a R,
    hash_params: HashParams,
}

impl<'a, R> ChangePasswordUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(users: &'a R, hash_params: HashParams) -> Self {
        Self { users, hash_params }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all, fields(user_id = %user_id))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ChangePasswordError::UserNotFound)?;

        user.change_password(old_password, new_password, &self.hash_params)
            .await?;

        self.users.update(&user).await?;
        Ok(())
    }
}
