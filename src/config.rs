//! Connection configuration read once from the process environment.
//!
//! The loader builds a [`DbConfig`] at startup and the rest of the pipeline
//! receives it by reference; no module below this one touches environment
//! variables.
//!
//! Required variables: `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`.
//! Optional: `DB_PORT` (default 5432). An empty value counts as missing.

use thiserror::Error;

/// Default Postgres port when `DB_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5432;

/// Errors related to pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set or is empty.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// `DB_PORT` is set but does not parse as a port number.
    #[error("invalid DB_PORT value: {0}")]
    InvalidPort(String),
}

/// Connection parameters for the source/destination database.
///
/// Both tables live in the same database; one handle serves the whole run.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database server hostname (`DB_HOST`).
    pub host: String,
    /// Database server port (`DB_PORT`, default 5432).
    pub port: u16,
    /// Database name (`DB_NAME`).
    pub name: String,
    /// Database user (`DB_USER`).
    pub user: String,
    /// Database password (`DB_PASSWORD`).
    pub password: String,
}

impl DbConfig {
    /// Read the full configuration from the process environment.
    ///
    /// # Errors
    /// [`ConfigError::MissingEnvVar`] if a required variable is unset or
    /// empty, [`ConfigError::InvalidPort`] if `DB_PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match optional_env("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: require_env("DB_HOST")?,
            port,
            name: require_env("DB_NAME")?,
            user: require_env("DB_USER")?,
            password: require_env("DB_PASSWORD")?,
        })
    }

    /// Render the Diesel connection URL for this configuration.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Read an environment variable, treating "set but empty" as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read a required environment variable.
fn require_env(name: &str) -> Result<String, ConfigError> {
    optional_env(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}
