use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use harmonia_core::{Email, Role, User, UserId, UserRepository, UserRepositoryError};
use tokio::sync::RwLock;

/// In-memory repository used by tests and local development.
///
/// Mirrors the Postgres adapter's behavior: unique email/username, and
/// compare-and-swap on the version counter for updates.
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserRepositoryError::DuplicateEmail);
        }
        if users.values().any(|u| u.username() == user.username()) {
            return Err(UserRepositoryError::DuplicateUsername);
        }
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().await;
        let stored = users
            .get_mut(user.id())
            .ok_or(UserRepositoryError::NotFound)?;
        if stored.version() != user.version() {
            return Err(UserRepositoryError::VersionConflict);
        }
        let mut updated = user.clone();
        updated.set_version(user.version() + 1);
        *stored = updated;
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| u.email() == email))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_role(&self, role: Role) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.has_role(role))
            .cloned()
            .collect())
    }
}
