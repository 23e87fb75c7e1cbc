use color_eyre::eyre::Result;
use harmonia_adapters::{
    JwtTokenService, PostgresUserRepository, PostmarkEmailNotifier, Settings,
};
use harmonia_auth_service::AuthService;
use harmonia_core::Email;
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let settings = Settings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(settings.database.url.expose_secret())
        .await?;

    sqlx::migrate!().run(&pg_pool).await?;

    let users = PostgresUserRepository::new(
        pg_pool,
        settings.cache.ttl(),
        settings.database.op_timeout(),
    );

    let tokens = JwtTokenService::new(
        settings.auth.jwt_secret.clone(),
        settings.auth.token_ttl_seconds,
    );

    let http_client = HttpClient::builder()
        .timeout(settings.email.timeout())
        .build()?;

    let notifier = PostmarkEmailNotifier::new(
        settings.email.base_url.clone(),
        Email::parse(&settings.email.sender)?,
        settings.email.frontend_base_url.clone(),
        settings.email.auth_token.clone(),
        http_client,
    );

    let service = AuthService::new(users, tokens, notifier, settings.auth.hash_params());

    let address = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    let allowed_origins = (!settings.app.allowed_origins.is_empty())
        .then(|| settings.app.allowed_origins.clone());

    service.run(listener, allowed_origins).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
