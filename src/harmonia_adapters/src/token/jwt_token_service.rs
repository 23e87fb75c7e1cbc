use async_trait::async_trait;
use chrono::Utc;
use harmonia_core::{TokenClaims, TokenError, TokenService, User};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};

/// Stateless JWT issuer/verifier (HS256).
///
/// Tokens carry `{sub, email, roles, iat, exp}` and nothing else; there is no
/// revocation list, so logout is purely client-side deletion and a token
/// stays verifiable until its natural expiry.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
    ttl_seconds: i64,
}

impl JwtTokenService {
    /// `ttl_seconds` defaults to 7 days at the configuration layer.
    pub fn new(secret: Secret<String>, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    fn claims_for(&self, sub: String, email: String, roles: Vec<harmonia_core::Role>) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub,
            email,
            roles,
            iat: now.max(0) as usize,
            exp: (now + self.ttl_seconds).max(0) as usize,
        }
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    #[tracing::instrument(name = "Generating auth token", skip_all)]
    async fn generate_token(&self, user: &User) -> Result<String, TokenError> {
        let claims = self.claims_for(
            user.id().to_string(),
            user.email().to_string(),
            user.roles(),
        );
        self.encode_claims(&claims)
    }

    #[tracing::instrument(name = "Verifying auth token", skip_all)]
    async fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }

    #[tracing::instrument(name = "Refreshing auth token", skip_all)]
    async fn refresh_token(&self, token: &str) -> Result<String, TokenError> {
        let old = self.verify_token(token).await?;
        let claims = self.claims_for(old.sub, old.email, old.roles);
        self.encode_claims(&claims)
    }
}
