use harmonia_core::{Role, User, UserRepository, UserRepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ListUsersError {
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// List users use case - admin-only listing, optionally filtered by role.
pub struct ListUsersUseCase<'a, R>
where
    R: UserRepository,
{
    users: &'a R,
}

impl<'a, R> ListUsersUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(users: &'a R) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip(self))]
    pub async fn execute(&self, role: Option<Role>) -> Result<Vec<User>, ListUsersError> {
        let users = match role {
            Some(role) => self.users.find_by_role(role).await?,
            None => self.users.find_all().await?,
        };
        Ok(users)
    }
}
