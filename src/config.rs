// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// Which document store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Google Cloud Firestore (or its emulator)
    Firestore,
    /// Process-local in-memory store
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(Self::Firestore),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid("STORE_BACKEND", s.to_string())),
        }
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordParams {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Storage backend
    pub store_backend: StoreBackend,
    /// GCP project ID (Firestore backend only)
    pub gcp_project_id: String,
    /// Password hashing cost
    pub password: PasswordParams,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = PasswordParams::default();

        Ok(Self {
            port: parse_var("PORT", 5000)?,
            store_backend: env::var("STORE_BACKEND")
                .map(|v| v.parse::<StoreBackend>())
                .unwrap_or(Ok(StoreBackend::Firestore))?,
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            password: PasswordParams {
                memory_kib: parse_var("PASSWORD_MEMORY_KIB", defaults.memory_kib)?,
                iterations: parse_var("PASSWORD_ITERATIONS", defaults.iterations)?,
                parallelism: parse_var("PASSWORD_PARALLELISM", defaults.parallelism)?,
            },
        })
    }

    /// Config for tests: in-memory store and cheap password hashing.
    pub fn test_default() -> Self {
        Self {
            port: 5000,
            store_backend: StoreBackend::Memory,
            gcp_project_id: "test-project".to_string(),
            password: PasswordParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        }
    }
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "5050");
        env::set_var("STORE_BACKEND", "memory");
        env::set_var("PASSWORD_ITERATIONS", "3");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 5050);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.password.iterations, 3);
        assert_eq!(config.password.parallelism, 1);

        env::remove_var("PORT");
        env::remove_var("STORE_BACKEND");
        env::remove_var("PASSWORD_ITERATIONS");
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("Firestore".parse::<StoreBackend>().unwrap(), StoreBackend::Firestore);
        assert_eq!(" memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("mongo".parse::<StoreBackend>().is_err());
    }
}
