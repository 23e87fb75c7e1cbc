pub mod change_password;
pub mod deactivate;
pub mod forgot_password;
pub mod list_users;
pub mod login;
pub mod refresh_token;
pub mod register;
pub mod reset_password;
