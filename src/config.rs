//! Runtime configuration, read from the environment (and `.env` when present).

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite:notes.db";
const DEFAULT_LOG_FILTER: &str = "notes_api=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {}", raw))?,
            None => 5,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => 3000,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
