pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    password::{HashParams, Password, PasswordError},
    role::{Role, RoleParseError},
    user::{NewUser, User, UserError, UserId},
};

pub use ports::{
    guard::{AuthContext, AuthError, AuthGuard},
    repositories::{UserRepository, UserRepositoryError},
    services::{EmailNotifier, EmailNotifierError, TokenClaims, TokenError, TokenService},
};
