pub mod guard;
pub mod repositories;
pub mod services;
