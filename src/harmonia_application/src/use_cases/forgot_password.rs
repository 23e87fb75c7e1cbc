use harmonia_core::{
    Email, EmailNotifier, EmailNotifierError, TokenError, TokenService, UserRepository,
    UserRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error(transparent)]
    Email(#[from] EmailNotifierError),
}

/// Forgot password use case - mints a reset token for the account behind an
/// email address and mails it out.
///
/// Unlike the verification mail on registration, delivery is not
/// best-effort: the mail is the whole point of the flow, so a transport
/// failure is surfaced to the caller.
pub struct ForgotPasswordUseCase<'a, R, T, N>
where
    R: UserRepository,
    T: TokenService,
    N: EmailNotifier,
{
    users: &'a R,
    tokens: &'a T,
    notifier: &'a N,
}

impl<'a, R, T, N> ForgotPasswordUseCase<'a, R, T, N>
where
    R: UserRepository,
    T: TokenService,
    N: EmailNotifier,
{
    pub fn new(users: &'a R, tokens: &'a T, notifier: &'a N) -> Self {
        Self {
            users,
            tokens,
            notifier,
        }
    }

    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError> {
        // An unparseable address cannot belong to any account.
        let email = Email::parse(email).map_err(|_| ForgotPasswordError::UserNotFound)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ForgotPasswordError::UserNotFound)?;

        let token = self.tokens.generate_token(&user).await?;
        self.notifier
            .send_password_reset_email(user.email(), &token)
            .await?;
        Ok(())
    }
}
