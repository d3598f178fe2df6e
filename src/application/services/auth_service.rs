//! Authentication Service
//!
//! Admin login for the HTML pages. There is exactly one account, configured
//! in settings; its password is kept only as an Argon2 hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthSettings;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session expired")]
    TokenExpired,

    #[error("Invalid session")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// In-memory single-account authenticator issuing signed session tokens.
pub struct AuthService {
    admin_username: String,
    password_hash: String,
    session_secret: String,
    session_ttl: Duration,
}

impl AuthService {
    /// Build the authenticator, hashing the configured admin password.
    pub fn new(settings: &AuthSettings) -> Result<Self, AuthError> {
        Ok(Self {
            admin_username: settings.admin_username.clone(),
            password_hash: hash_password(&settings.admin_password)?,
            session_secret: settings.session_secret.clone(),
            session_ttl: Duration::minutes(settings.session_ttl_minutes),
        })
    }

    /// Check credentials and issue a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let hash = self.password_hash.clone();
        let password = password.to_string();

        // Argon2 verification blocks for tens of milliseconds
        let password_ok = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Password check failed: {}", e)))??;

        if username != self.admin_username || !password_ok {
            tracing::warn!(username = %username, "Rejected admin login");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(username = %username, "Admin logged in");
        self.issue_token(username)
    }

    /// Decode and validate a session token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.session_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        if token_data.claims.sub != self.admin_username {
            return Err(AuthError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    fn issue_token(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + self.session_ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.session_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
    }
}

/// Hash a password using Argon2id
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its hash
fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
