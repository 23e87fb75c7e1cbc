mod helpers;

mod account;
mod admin;
mod auth;
mod password_reset;
mod registration;
