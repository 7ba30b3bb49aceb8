// Token service - issues and verifies HS256 bearer tokens
//
// Tokens are stateless: nothing is stored server-side, and a token stays
// valid until its `exp` passes or the signing secret changes.

pub mod credentials;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use credentials::{CredentialStore, DemoCredentials, Identity};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(identity: &Identity, lifetime: Duration) -> Self {
        let now = Utc::now().timestamp();
        let lifetime = lifetime.as_secs_f64().ceil() as i64;

        Self {
            sub: identity.id.clone(),
            username: identity.username.clone(),
            role: identity.role.clone(),
            iat: now,
            exp: now + lifetime,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("username and password required")]
    MissingInput,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing or malformed Authorization header")]
    MissingHeader,

    #[error("signing secret is not configured")]
    ServerMisconfigured,

    #[error("token rejected: {0}")]
    Invalid(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}

#[derive(Clone)]
pub struct TokenService {
    secret: Option<Arc<str>>,
    expiry: Duration,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret_configured", &self.secret.is_some())
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl TokenService {
    pub fn new(
        secret: Option<String>,
        expiry: Duration,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()).map(Arc::from),
            expiry,
            credentials,
        }
    }

    /// Token service backed by the built-in demo identity
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.security.jwt_secret.clone(),
            config.security.jwt_expiry,
            Arc::new(DemoCredentials::default()),
        )
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Check credentials and sign a token for the matching identity
    pub async fn issue(&self, username: &str, password: &str) -> Result<String, TokenError> {
        if username.is_empty() || password.is_empty() {
            return Err(TokenError::MissingInput);
        }

        let identity = self
            .credentials
            .authenticate(username, password)
            .await
            .ok_or(TokenError::InvalidCredentials)?;

        self.sign(&Claims::new(&identity, self.expiry))
    }

    /// Sign an arbitrary claim set with the configured secret
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let secret = self.secret.as_ref().ok_or(TokenError::ServerMisconfigured)?;

        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let secret = self.secret.as_ref().ok_or(TokenError::ServerMisconfigured)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}
