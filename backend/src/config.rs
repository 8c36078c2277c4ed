//! Runtime configuration, read from the environment (a `.env` file in the
//! working directory is loaded first when present).

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite:birthdays.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Origin of the web frontend allowed to call the API
    pub cors_origin: String,
    pub db_max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Load from `.env` and the process environment
    pub fn load() -> Result<Self> {
        accept_missing_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("HOST is not a valid IP address: {}", host))?;

        let port = match get("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(value) => {
                let parsed: u32 = value
                    .parse()
                    .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {}", value))?;
                if parsed == 0 {
                    anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
                }
                parsed
            }
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host,
            port,
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            db_max_connections,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A missing `.env` file is fine; one that exists but cannot be read or
/// parsed is a startup error.
fn accept_missing_env_file<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}
