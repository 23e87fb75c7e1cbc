use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use harmonia_application::{
    ChangePasswordError, DeactivateError, ForgotPasswordError, ListUsersError, LoginError,
    RegisterError, ResetPasswordError,
};
use harmonia_core::{
    AuthError, EmailNotifierError, TokenError, UserError, UserRepositoryError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire shape of every error response. `kind` is a stable discriminator so
/// clients can branch without parsing the human-readable message.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Deliberately generic: covers unknown email and wrong password alike.
    #[error("Incorrect email or password")]
    InvalidCredentials,

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

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("A downstream service is unavailable")]
    ServiceUnavailable,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AuthApiError {
    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::NoToken => "NoToken",
            Self::InvalidToken => "InvalidToken",
            Self::TokenExpired => "TokenExpired",
            Self::UserNotFound => "UserNotFound",
            Self::AccountDisabled => "AccountDisabled",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::Conflict(_) => "Conflict",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Unexpected(_) => "Unexpected",
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,

            Self::InvalidCredentials
            | Self::NoToken
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::UserNotFound
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Infrastructure detail goes to the logs; the client gets a
        // sanitized message.
        let error_message = if let Self::Unexpected(detail) = &self {
            tracing::error!(error = %detail, "unexpected error while handling request");
            "An unexpected error occurred".to_owned()
        } else {
            self.to_string()
        };

        let body = Json(ErrorResponse {
            error: error_message,
            kind: self.kind().to_owned(),
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::IncorrectOldPassword => AuthApiError::InvalidCredentials,
            other => AuthApiError::InvalidInput(other.to_string()),
        }
    }
}

impl From<UserRepositoryError> for AuthApiError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::DuplicateEmail | UserRepositoryError::DuplicateUsername => {
                AuthApiError::Conflict(error.to_string())
            }
            UserRepositoryError::NotFound => AuthApiError::NotFound,
            UserRepositoryError::VersionConflict => AuthApiError::Conflict(error.to_string()),
            UserRepositoryError::CorruptRecord(e) | UserRepositoryError::Database(e) => {
                AuthApiError::Unexpected(e)
            }
        }
    }
}

impl From<TokenError> for AuthApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => AuthApiError::TokenExpired,
            TokenError::Invalid => AuthApiError::InvalidToken,
            TokenError::Signing(e) => AuthApiError::Unexpected(e),
        }
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::NoToken => AuthApiError::NoToken,
            AuthError::InvalidToken => AuthApiError::InvalidToken,
            AuthError::TokenExpired => AuthApiError::TokenExpired,
            AuthError::UserNotFound => AuthApiError::UserNotFound,
            AuthError::AccountDisabled => AuthApiError::AccountDisabled,
            AuthError::Forbidden => AuthApiError::Forbidden,
            AuthError::Unexpected(e) => AuthApiError::Unexpected(e),
        }
    }
}

impl From<EmailNotifierError> for AuthApiError {
    fn from(_: EmailNotifierError) -> Self {
        AuthApiError::ServiceUnavailable
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::Validation(e) => e.into(),
            RegisterError::EmailTaken | RegisterError::UsernameTaken => {
                AuthApiError::Conflict(error.to_string())
            }
            RegisterError::Repository(e) => e.into(),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::AccountDisabled => AuthApiError::AccountDisabled,
            LoginError::Password(e) => AuthApiError::Unexpected(e.to_string()),
            LoginError::Repository(e) => e.into(),
            LoginError::Token(e) => e.into(),
        }
    }
}

impl From<ChangePasswordError> for AuthApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::UserNotFound => AuthApiError::NotFound,
            ChangePasswordError::User(e) => e.into(),
            ChangePasswordError::Repository(e) => e.into(),
        }
    }
}

impl From<DeactivateError> for AuthApiError {
    fn from(error: DeactivateError) -> Self {
        match error {
            DeactivateError::UserNotFound => AuthApiError::NotFound,
            DeactivateError::Repository(e) => e.into(),
        }
    }
}

impl From<ForgotPasswordError> for AuthApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::UserNotFound => AuthApiError::NotFound,
            ForgotPasswordError::Repository(e) => e.into(),
            ForgotPasswordError::Token(e) => e.into(),
            ForgotPasswordError::Email(e) => e.into(),
        }
    }
}

impl From<ResetPasswordError> for AuthApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::UserNotFound => AuthApiError::NotFound,
            ResetPasswordError::Token(e) => e.into(),
            ResetPasswordError::User(e) => e.into(),
            ResetPasswordError::Repository(e) => e.into(),
        }
    }
}

impl From<ListUsersError> for AuthApiError {
    fn from(error: ListUsersError) -> Self {
        match error {
            ListUsersError::Repository(e) => e.into(),
        }
    }
}
