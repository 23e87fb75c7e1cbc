use harmonia_core::{
    Email, PasswordError, TokenError, TokenService, User, UserRepository, UserRepositoryError,
};
use secrecy::Secret;

/// Successful login: the issued bearer token plus the authenticated user.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Deliberately generic: covers unknown email and wrong password alike,
    /// so responses cannot be used to enumerate accounts.
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("Account is disabled")]
    AccountDisabled,
    #[error("Password verification failed: {0}")]
    Password(#[from] PasswordError),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

/// Login use case - authenticates credentials and issues a bearer token.
pub struct LoginUseCase<'a, R, T>
where
    R: UserRepository,
    T: TokenService,
{
    users: &'a R,
    tokens: &'a T,
}

impl<'a, R, T> LoginUseCase<'a, R, T>
where
    R: UserRepository,
    T: TokenService,
{
    pub fn new(users: &'a R, tokens: &'a T) -> Self {
        Self { users, tokens }
    }

    /// Execute the login use case.
    ///
    /// The lookup goes straight to authoritative storage (never the id
    /// cache), so the password check always sees the latest digest. On
    /// success the login timestamp is recorded before the token is issued.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<LoginOutcome, LoginError> {
        // An unparseable email can't belong to any account; same generic
        // failure as a wrong password.
        let email = Email::parse(email).map_err(|_| LoginError::InvalidCredentials)?;

        let mut user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        if !user.authenticate(password).await? {
            return Err(LoginError::InvalidCredentials);
        }

        if !user.is_active() {
            return Err(LoginError::AccountDisabled);
        }

        user.update_last_login();
        self.users.update(&user).await?;

        let token = self.tokens.generate_token(&user).await?;
        Ok(LoginOutcome { token, user })
    }
}
