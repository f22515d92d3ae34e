//! Access tokens and password hashing.

use crate::{config::AuthConfig, entities::user, models::Role};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid signing key")]
    Key,
    #[error("Failed to sign token: {0}")]
    Sign(jwt::Error),
    #[error("Invalid token: {0}")]
    Invalid(jwt::Error),
    #[error("Token expired")]
    Expired,
}

/// Claims carried by every access token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User id
    pub sub: i32,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i32>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &user::Model, lifetime_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.parse().unwrap_or(Role::User),
            company_id: user.company_id,
            iat: now,
            exp: now + lifetime_seconds,
        }
    }
}

/// Signs and verifies HS256 access tokens
#[derive(Clone)]
pub struct TokenService {
    key: Hmac<Sha256>,
    lifetime_seconds: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Result<Self, TokenError> {
        let key = Hmac::new_from_slice(config.jwt_secret.as_bytes()).map_err(|_| TokenError::Key)?;
        Ok(Self {
            key,
            lifetime_seconds: config.token_lifetime_seconds,
        })
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }

    pub fn issue(&self, user: &user::Model) -> Result<String, TokenError> {
        self.sign(&Claims::for_user(user, self.lifetime_seconds))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        claims.sign_with_key(&self.key).map_err(TokenError::Sign)
    }

    /// Check the signature and the expiry of `token`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims: Claims = token.verify_with_key(&self.key).map_err(TokenError::Invalid)?;
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

/// Hash `password` into a salted Argon2id PHC string
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// A mismatch, or a stored hash that does not parse, is `false`
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
            false
        }
    }
}
