use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    role::Role,
    user::{User, UserId},
};

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("A user with this email already exists")]
    DuplicateEmail,
    #[error("A user with this username already exists")]
    DuplicateUsername,
    #[error("User not found")]
    NotFound,
    #[error("User was modified concurrently")]
    VersionConflict,
    #[error("Corrupt stored record: {0}")]
    CorruptRecord(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::DuplicateUsername, Self::DuplicateUsername) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::VersionConflict, Self::VersionConflict) => true,
            (Self::CorruptRecord(_), Self::CorruptRecord(_)) => true,
            (Self::Database(_), Self::Database(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for the user aggregate.
///
/// Writes are atomic: a failed `save`/`update`/`delete` leaves nothing
/// half-persisted. `update` enforces compare-and-swap on the version counter,
/// so a concurrent write to the same user surfaces as
/// [`UserRepositoryError::VersionConflict`] instead of silently clobbering.
///
/// Adapters may cache `find_by_id` lookups with a bounded TTL; lookups by
/// email or username always hit authoritative storage since they sit on the
/// password-bearing login path.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserRepositoryError>;
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserRepositoryError>;

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;
    async fn find_by_role(&self, role: Role) -> Result<Vec<User>, UserRepositoryError>;
}
