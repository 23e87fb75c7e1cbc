use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use super::email::{Email, EmailError};
use super::password::{HashParams, Password, PasswordError};
use super::role::Role;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("Username must be between 2 and 20 characters")]
    InvalidUsername,
    #[error("The base user role cannot be removed")]
    CannotRemoveBaseRole,
    #[error("Incorrect old password")]
    IncorrectOldPassword,
}

/// Opaque unique identifier of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw registration input, validated by [`User::create`].
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: Secret<String>,
    pub roles: Option<Vec<Role>>,
}

/// The user aggregate. State changes go through methods that maintain the
/// invariants (base role always present, `updated_at` bumped on mutation);
/// fields are never exposed mutably.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password: Password,
    username: String,
    roles: Vec<Role>,
    is_active: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i64,
}

impl User {
    /// Validating factory. Checks run in order: email, username, password;
    /// the first failure is returned. Hashing happens here, so a constructed
    /// `User` is always hashed at rest.
    pub async fn create(
        new_user: NewUser,
        id: Option<UserId>,
        hash_params: &HashParams,
    ) -> Result<Self, UserError> {
        let email = Email::parse(&new_user.email)?;

        if !valid_username(&new_user.username) {
            return Err(UserError::InvalidUsername);
        }

        let password = Password::parse_and_hash(new_user.password, hash_params).await?;

        let mut roles = new_user.roles.unwrap_or_else(|| vec![Role::BASE]);
        if !roles.contains(&Role::BASE) {
            roles.insert(0, Role::BASE);
        }

        let now = Utc::now();
        Ok(Self {
            id: id.unwrap_or_default(),
            email,
            password,
            username: new_user.username,
            roles,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    /// Reconstructs a user from its persisted representation. The caller is
    /// responsible for having rebuilt the email and password value objects;
    /// no re-validation or re-hashing happens here.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: UserId,
        email: Email,
        password: Password,
        username: String,
        mut roles: Vec<Role>,
        is_active: bool,
        last_login_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i64,
    ) -> Self {
        if !roles.contains(&Role::BASE) {
            roles.insert(0, Role::BASE);
        }
        Self {
            id,
            email,
            password,
            username,
            roles,
            is_active,
            last_login_at,
            created_at,
            updated_at,
            version,
        }
    }

    /// Checks a candidate password against the stored credential. Does not
    /// mutate state; callers record successful logins via
    /// [`User::update_last_login`].
    pub async fn authenticate(&self, candidate: Secret<String>) -> Result<bool, PasswordError> {
        self.password.matches(candidate).await
    }

    /// Replaces the password after verifying the old one.
    pub async fn change_password(
        &mut self,
        old_password: Secret<String>,
        new_password: Secret<String>,
        hash_params: &HashParams,
    ) -> Result<(), UserError> {
        if !self.authenticate(old_password).await? {
            return Err(UserError::IncorrectOldPassword);
        }
        self.password = Password::parse_and_hash(new_password, hash_params).await?;
        self.touch();
        Ok(())
    }

    /// Replaces the password without the old-password check. Callers prove
    /// ownership of the account by other means, such as a reset token sent
    /// to the registered address.
    pub async fn reset_password(
        &mut self,
        new_password: Secret<String>,
        hash_params: &HashParams,
    ) -> Result<(), UserError> {
        self.password = Password::parse_and_hash(new_password, hash_params).await?;
        self.touch();
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.touch();
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn add_role(&mut self, role: Role) {
        if !self.has_role(role) {
            self.roles.push(role);
            self.touch();
        }
    }

    pub fn remove_role(&mut self, role: Role) -> Result<(), UserError> {
        if role == Role::BASE {
            return Err(UserError::CannotRemoveBaseRole);
        }
        if self.has_role(role) {
            self.roles.retain(|r| *r != role);
            self.touch();
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> Vec<Role> {
        self.roles.clone()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// Called by repositories after a successful write to keep the in-memory
    /// copy aligned with the stored version counter.
    pub fn set_version(&mut self, version: i64) {
        self.version = version;
    }

    /// The stored argon2 digest. Only the persistence layer should need this.
    pub fn password_digest(&self) -> &Secret<String> {
        self.password.as_ref()
    }
}

fn valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (2..=20).contains(&len)
}
