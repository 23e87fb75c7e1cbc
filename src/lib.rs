//! # Harmonia - Authentication & Authorization Library
//!
//! Facade crate re-exporting the public APIs of the harmonia auth
//! components, so a host application can depend on one crate and get the
//! whole stack.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Role`, `User`
//! - **Ports**: `UserRepository`, `TokenService`, `EmailNotifier`, `AuthGuard`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserRepository`, `JwtTokenService`,
//!   `PostmarkEmailNotifier`, etc.
//! - **Service**: `AuthService` - the assembled HTTP service

/// Core domain types and ports
pub mod core {
    pub use harmonia_core::*;
}

// Re-export the most commonly used core types at the root level
pub use harmonia_core::{
    AuthContext, AuthError, AuthGuard, Email, EmailError, HashParams, NewUser, Password,
    PasswordError, Role, TokenClaims, TokenError, TokenService, User, UserError, UserId,
    UserRepository, UserRepositoryError,
};

/// Application use cases
pub mod use_cases {
    pub use harmonia_application::*;
}

pub use harmonia_application::{
    ChangePasswordUseCase, DeactivateUseCase, ForgotPasswordUseCase, ListUsersUseCase,
    LoginOutcome, LoginUseCase, RefreshTokenUseCase, RegisterUseCase, ResetPasswordUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP guard middleware and route handlers
    pub mod http {
        pub use harmonia_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use harmonia_adapters::persistence::*;
    }

    /// Email notifier implementations
    pub mod email {
        pub use harmonia_adapters::email::*;
    }

    /// Token service implementations
    pub mod token {
        pub use harmonia_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use harmonia_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use harmonia_adapters::{
    BearerAuthenticator, InMemoryUserRepository, JwtTokenService, MockEmailNotifier,
    PostgresUserRepository, PostmarkEmailNotifier, Settings,
};

/// Main auth service
pub use harmonia_auth_service::AuthService;

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

// The service surface speaks these types directly, so hosts get them
// without a separate dependency.
pub use axum;
pub use http;
pub use tokio;
