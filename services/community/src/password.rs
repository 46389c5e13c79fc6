//! Argon2id password hashing.
//!
//! Hashing is CPU-bound, so the async helpers run it on the blocking pool.

use std::sync::Arc;

use anyhow::Context as _;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::CommunityError;

/// Input hashed once at startup so unknown login ids cost one verification too.
const DUMMY_PASSWORD: &str = "campusmap-timing-equalizer";

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    HashingFailed(String),
    #[error("failed to verify password: {0}")]
    VerificationFailed(String),
    #[error("invalid password hash format: {0}")]
    InvalidHashFormat(String),
}

/// Shared Argon2id hasher. Cheap to clone.
#[derive(Clone)]
pub struct Passwords {
    inner: Arc<Inner>,
}

struct Inner {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl Passwords {
    /// Hasher with the argon2 crate's default cost (19 MiB, 2 passes, 1 lane).
    pub fn with_default_params() -> Result<Self, PasswordError> {
        Self::new(Params::default())
    }

    pub fn new(params: Params) -> Result<Self, PasswordError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = hash_with(&argon2, DUMMY_PASSWORD)?;
        Ok(Self {
            inner: Arc::new(Inner { argon2, dummy_hash }),
        })
    }

    /// Hash into a PHC string (`$argon2id$v=19$...`).
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash_with(&self.inner.argon2, password)
    }

    /// `Ok(false)` on mismatch; `Err` only when `hash` is not a valid PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))?;
        match self
            .inner
            .argon2
            .verify_password(password.as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    pub async fn hash_blocking(&self, password: String) -> Result<String, CommunityError> {
        let passwords = self.clone();
        let hash = tokio::task::spawn_blocking(move || passwords.hash(&password))
            .await
            .context("join password hashing task")?
            .context("hash password")?;
        Ok(hash)
    }

    /// Verify `password` against `hash`, or against the dummy hash when there is
    /// no stored hash. The dummy path always reports a mismatch.
    pub async fn verify_blocking(
        &self,
        password: String,
        hash: Option<String>,
    ) -> Result<bool, CommunityError> {
        let passwords = self.clone();
        let matched = tokio::task::spawn_blocking(move || match hash {
            Some(hash) => passwords.verify(&password, &hash),
            None => passwords
                .verify(&password, &passwords.inner.dummy_hash)
                .map(|_| false),
        })
        .await
        .context("join password verification task")?
        .context("verify password")?;
        Ok(matched)
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

#[cfg(test)]
pub(crate) fn test_passwords() -> Passwords {
    // Minimum cost keeps unit tests fast.
    Passwords::new(Params::new(8, 1, 1, None).unwrap()).unwrap()
}
