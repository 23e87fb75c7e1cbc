use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Symbols accepted by the password complexity check.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

const MIN_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
    #[error("Password must be at least {MIN_LENGTH} characters long")]
    TooShort,
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,
    #[error("Password must contain a digit")]
    MissingDigit,
    #[error("Password must contain one of `{PASSWORD_SYMBOLS}`")]
    MissingSymbol,
    #[error("Plaintext comparison is disabled in this build")]
    PlaintextCompareDisabled,
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Argon2id work parameters. The memory cost is configurable so operators
/// can tune hashing latency; defaults match the values used in production.
#[derive(Debug, Clone, Copy)]
pub struct HashParams {
    pub m_cost_kib: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            m_cost_kib: 15000,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

impl HashParams {
    fn to_argon2(self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(self.m_cost_kib, self.t_cost, self.p_cost, None)
            .map_err(|e| PasswordError::Hash(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// A password credential, either still in validated plaintext form or as an
/// opaque argon2id digest.
///
/// A plaintext `Password` exists only between request parsing and hashing;
/// everything persisted or compared against goes through the hashed form.
#[derive(Clone)]
pub struct Password {
    value: Secret<String>,
    hashed: bool,
}

impl Password {
    /// Validates a plaintext password: minimum length plus one character from
    /// each of the lowercase, uppercase, digit and symbol classes.
    pub fn parse(raw: Secret<String>) -> Result<Self, PasswordError> {
        let value = raw.expose_secret();
        if value.is_empty() {
            return Err(PasswordError::Empty);
        }
        if value.chars().count() < MIN_LENGTH {
            return Err(PasswordError::TooShort);
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordError::MissingLowercase);
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordError::MissingUppercase);
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::MissingDigit);
        }
        if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
            return Err(PasswordError::MissingSymbol);
        }
        Ok(Self {
            value: raw,
            hashed: false,
        })
    }

    /// Wraps an existing digest loaded from storage. The digest is treated as
    /// opaque and accepted as already validated.
    pub fn from_hash(digest: Secret<String>) -> Result<Self, PasswordError> {
        if digest.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self {
            value: digest,
            hashed: true,
        })
    }

    /// Validates `raw` and hashes it with argon2id on a blocking thread.
    #[tracing::instrument(name = "Hashing password", skip_all)]
    pub async fn parse_and_hash(
        raw: Secret<String>,
        params: &HashParams,
    ) -> Result<Self, PasswordError> {
        let plain = Self::parse(raw)?;
        let params = *params;

        let current_span = tracing::Span::current();
        let digest = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                params
                    .to_argon2()?
                    .hash_password(plain.value.expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| PasswordError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordError::Hash(e.to_string()))??;

        Ok(Self {
            value: digest,
            hashed: true,
        })
    }

    /// Verifies `candidate` against this credential.
    ///
    /// For hashed values this uses argon2's constant-time verifier on a
    /// blocking thread. For plaintext values comparison is only available
    /// under the `insecure-plaintext-compare` feature; real user records are
    /// always hashed before they reach this path.
    #[tracing::instrument(name = "Verifying password", skip_all)]
    pub async fn matches(&self, candidate: Secret<String>) -> Result<bool, PasswordError> {
        if !self.hashed {
            return self.matches_plaintext(&candidate);
        }

        let digest = self.value.clone();
        let current_span = tracing::Span::current();
        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let parsed = PasswordHash::new(digest.expose_secret())
                    .map_err(|e| PasswordError::Hash(e.to_string()))?;
                match Argon2::default()
                    .verify_password(candidate.expose_secret().as_bytes(), &parsed)
                {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordError::Hash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordError::Hash(e.to_string()))?
    }

    #[cfg(feature = "insecure-plaintext-compare")]
    fn matches_plaintext(&self, candidate: &Secret<String>) -> Result<bool, PasswordError> {
        Ok(self.value.expose_secret() == candidate.expose_secret())
    }

    #[cfg(not(feature = "insecure-plaintext-compare"))]
    fn matches_plaintext(&self, _candidate: &Secret<String>) -> Result<bool, PasswordError> {
        Err(PasswordError::PlaintextCompareDisabled)
    }

    pub fn is_hashed(&self) -> bool {
        self.hashed
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.value
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .field("hashed", &self.hashed)
            .finish()
    }
}
