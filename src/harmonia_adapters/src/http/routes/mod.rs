pub mod change_password;
pub mod deactivate;
pub mod error;
pub mod forgot_password;
pub mod login;
pub mod me;
pub mod refresh;
pub mod register;
pub mod reset_password;
pub mod users;

pub use change_password::change_password;
pub use deactivate::deactivate;
pub use forgot_password::forgot_password;
pub use login::login;
pub use me::me;
pub use refresh::refresh;
pub use register::register;
pub use reset_password::reset_password;
pub use users::list_users;

use harmonia_core::{Role, User};
use serde::{Deserialize, Serialize};

/// Public projection of a user. The password digest never appears here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub roles: Vec<Role>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "lastLoginAt")]
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_string(),
            username: user.username().to_owned(),
            roles: user.roles(),
            is_active: user.is_active(),
            last_login_at: user.last_login_at(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
