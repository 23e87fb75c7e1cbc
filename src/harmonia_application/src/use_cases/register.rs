use harmonia_core::{
    EmailNotifier, HashParams, NewUser, TokenService, User, UserError, UserRepository,
    UserRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] UserError),
    #[error("A user with this email already exists")]
    EmailTaken,
    #[error("A user with this username already exists")]
    UsernameTaken,
    #[error("User repository error: {0}")]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for RegisterError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::DuplicateEmail => RegisterError::EmailTaken,
            UserRepositoryError::DuplicateUsername => RegisterError::UsernameTaken,
            other => RegisterError::Repository(other),
        }
    }
}

/// Register use case - validates input, persists the new user, and sends a
/// verification email on a best-effort basis.
pub struct RegisterUseCase<'a, R, T, N>
where
    R: UserRepository,
    T: TokenService,
    N: EmailNotifier,
{
    users: &'a R,
    tokens: &'a T,
    notifier: &'a N,
    hash_params: HashParams,
}

impl<'a, R, T, N> RegisterUseCase<'a, R, T, N>
where
    R: UserRepository,
    T: TokenService,
    N: EmailNotifier,
{
    pub fn new(users: &'a R, tokens: &'a T, notifier: &'a N, hash_params: HashParams) -> Self {
        Self {
            users,
            tokens,
            notifier,
            hash_params,
        }
    }

    /// Execute the register use case.
    ///
    /// Duplicate email or username fails with a conflict before any write.
    /// The verification email is fire-and-forget: a mail transport failure is
    /// logged and does not roll back the registration.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all, fields(username = %new_user.username))]
    pub async fn execute(&self, new_user: NewUser) -> Result<User, RegisterError> {
        let user = User::create(new_user, None, &self.hash_params).await?;

        if self.users.exists_by_email(user.email()).await? {
            return Err(RegisterError::EmailTaken);
        }
        if self
            .users
            .find_by_username(user.username())
            .await?
            .is_some()
        {
            return Err(RegisterError::UsernameTaken);
        }

        self.users.save(&user).await?;

        match self.tokens.generate_token(&user).await {
            Ok(token) => {
                if let Err(e) = self
                    .notifier
                    .send_verification_email(user.email(), &token)
                    .await
                {
                    tracing::warn!(error = %e, "failed to send verification email");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to mint verification token"),
        }

        Ok(user)
    }
}
