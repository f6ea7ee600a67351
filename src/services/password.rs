// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing with Argon2id (PHC string format).
//!
//! Hashing is deliberately slow, so both operations run on tokio's blocking
//! pool instead of an async worker.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::config::PasswordParams;
use crate::error::AppError;

/// Hashes and verifies user passwords.
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    /// Create a service with the given cost parameters.
    pub fn new(params: PasswordParams) -> Result<Self, AppError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password with a fresh random salt.
    pub fn hash_blocking(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
    }

    /// Check a password against a stored PHC string.
    ///
    /// Malformed hashes count as a mismatch.
    pub fn verify_blocking(&self, password: &str, phc_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(phc_hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// [`Self::hash_blocking`] on the blocking pool.
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash_blocking(&password))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Hashing task failed: {}", e)))?
    }

    /// [`Self::verify_blocking`] on the blocking pool.
    pub async fn verify(&self, password: String, phc_hash: String) -> Result<bool, AppError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.verify_blocking(&password, &phc_hash))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Verification task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn service() -> PasswordService {
        PasswordService::new(Config::test_default().password).unwrap()
    }

    #[test]
    fn test_hash_is_salted_phc() {
        let svc = service();
        let a = svc.hash_blocking("hunter2").unwrap();
        let b = svc.hash_blocking("hunter2").unwrap();

        assert!(a.starts_with("$argon2id$v=19$"));
        assert_ne!(a, b, "each hash gets its own salt");
        assert_ne!(a, "hunter2");
    }

    #[test]
    fn test_verify() {
        let svc = service();
        let hash = svc.hash_blocking("hunter2").unwrap();

        assert!(svc.verify_blocking("hunter2", &hash));
        assert!(!svc.verify_blocking("hunter3", &hash));
        assert!(!svc.verify_blocking("hunter2", "not-a-phc-string"));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = PasswordParams {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(PasswordService::new(params).is_err());
    }

    #[tokio::test]
    async fn test_async_roundtrip() {
        let svc = service();
        let hash = svc.hash("secret".to_string()).await.unwrap();
        assert!(svc.verify("secret".to_string(), hash).await.unwrap());
    }
}
