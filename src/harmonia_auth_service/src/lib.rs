mod auth_service;
mod tracing;

pub use auth_service::AuthService;
pub use tracing::{make_span_with_request_id, on_request, on_response};
