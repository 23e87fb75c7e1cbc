use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post},
};
use harmonia_adapters::http::{
    guard::{BearerAuthenticator, RequiredRoles, authenticate, require_role},
    routes::{
        change_password, deactivate, forgot_password, list_users, login, me, refresh, register,
        reset_password,
    },
};
use harmonia_core::{EmailNotifier, HashParams, Role, TokenService, UserRepository};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled authentication service: registration, login, token refresh,
/// password reset and the guarded account routes, ready to serve or to nest
/// into a larger application router.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Wires the routes to the given adapters.
    ///
    /// Adapters implement `Clone` via internal `Arc`s, so each route is
    /// handed exactly the state it needs. The guard reuses the same
    /// repository and token service as the handlers, which keeps role and
    /// activation checks consistent with what the routes see.
    pub fn new<R, T, N>(users: R, tokens: T, notifier: N, hash_params: HashParams) -> Self
    where
        R: UserRepository + Clone + 'static,
        T: TokenService + Clone + 'static,
        N: EmailNotifier + Clone + 'static,
    {
        let guard = BearerAuthenticator::new(users.clone(), tokens.clone());

        // Admin routes carry an extra role check. The layer sits inside the
        // authentication layer, so the context is already attached when it
        // runs.
        let admin_routes = Router::new()
            .route("/users", get(list_users::<R>))
            .with_state(users.clone())
            .layer(middleware::from_fn_with_state(
                RequiredRoles(vec![Role::Admin]),
                require_role,
            ));

        let protected_routes = Router::new()
            .route("/me", get(me))
            .route("/change-password", post(change_password::<R>))
            .with_state((users.clone(), hash_params))
            .route("/deactivate", post(deactivate::<R>))
            .with_state(users.clone())
            .merge(admin_routes)
            .layer(middleware::from_fn_with_state(
                guard,
                authenticate::<BearerAuthenticator<R, T>>,
            ));

        let router = Router::new()
            .route("/register", post(register::<R, T, N>))
            .with_state((users.clone(), tokens.clone(), notifier.clone(), hash_params))
            .route("/login", post(login::<R, T>))
            .with_state((users.clone(), tokens.clone()))
            .route("/refresh", post(refresh::<T>))
            .with_state(tokens.clone())
            .route("/forgot-password", post(forgot_password::<R, T, N>))
            .with_state((users.clone(), tokens.clone(), notifier))
            .route("/reset-password", post(reset_password::<R, T>))
            .with_state((users, tokens, hash_params))
            .merge(protected_routes);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Turns the service into a router that can be nested into another
    /// application, optionally restricted to the given CORS origins.
    pub fn into_router(mut self, allowed_origins: Option<Vec<String>>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins
                            .iter()
                            .any(|allowed| origin.as_bytes() == allowed.as_bytes())
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Runs the service as a standalone server on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: Option<Vec<String>>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
