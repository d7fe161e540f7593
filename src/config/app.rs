//! Application settings, read from the environment (after `.env` has been
//! loaded by `main`).

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::core::recommendation::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::errors::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Settings shared by the whole process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SeaORM` connection URL for the `SQLite` store
    pub database_url: String,
    /// Seed dataset used to populate an empty store (`.toml` or legacy `.json`)
    pub seed_path: PathBuf,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Base URL used when building shareable links
    pub public_base_url: String,
    /// Number of recommendations shown when the request does not ask for one
    pub default_limit: u64,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("APP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| Error::Config {
                message: format!("APP_PORT must be a port number, got {raw:?}: {e}"),
            })?,
            None => 8080,
        };

        let default_limit = match lookup("DEFAULT_LIMIT") {
            Some(raw) => raw.parse::<u64>().map_err(|e| Error::Config {
                message: format!("DEFAULT_LIMIT must be an integer, got {raw:?}: {e}"),
            })?,
            None => DEFAULT_LIMIT,
        };
        if default_limit == 0 || default_limit > MAX_LIMIT {
            return Err(Error::Config {
                message: format!("DEFAULT_LIMIT must be between 1 and {MAX_LIMIT}"),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            seed_path: lookup("SEED_PATH").map_or_else(|| PathBuf::from("data/seed.toml"), PathBuf::from),
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            public_base_url: lookup("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}/")),
            default_limit,
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.seed_path, PathBuf::from("data/seed.toml"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_base_url, "http://localhost:8080/");
        assert_eq!(config.default_limit, 3);
        assert_eq!(config.listen_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("PUBLIC_BASE_URL", "https://x/"),
            ("DEFAULT_LIMIT", "5"),
            ("SEED_PATH", "melanges.json"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.public_base_url, "https://x/");
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.seed_path, PathBuf::from("melanges.json"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")])),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("DEFAULT_LIMIT", "0")])),
            Err(Error::Config { .. })
        ));
    }
}
