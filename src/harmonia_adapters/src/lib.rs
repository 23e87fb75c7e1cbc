pub mod config;
pub mod email;
pub mod http;
pub mod persistence;
pub mod token;

pub use config::settings::Settings;
pub use email::{mock_email_notifier::MockEmailNotifier, postmark_email_notifier::PostmarkEmailNotifier};
pub use http::guard::BearerAuthenticator;
pub use persistence::{
    in_memory_user_repository::InMemoryUserRepository,
    postgres_user_repository::PostgresUserRepository, user_cache::UserCache,
};
pub use token::jwt_token_service::JwtTokenService;
