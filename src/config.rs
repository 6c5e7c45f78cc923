//! Database configuration loaded from the environment.

use crate::campaign::adapters::postgres::CampaignPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{Builder, ConnectionManager, Pool, PoolError};
use std::time::Duration;
use thiserror::Error;

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Default time to wait for a pooled connection.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required configuration variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the campaign store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL (`DATABASE_URL`).
    pub database_url: String,
    /// Maximum pooled connections (`DATABASE_POOL_SIZE`).
    pub pool_size: u32,
    /// Bound on waiting for a pooled connection
    /// (`DATABASE_CONNECT_TIMEOUT_SECS`).
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// | Variable                        | Default |
    /// |---------------------------------|---------|
    /// | `DATABASE_URL`                  | required |
    /// | `DATABASE_POOL_SIZE`            | `10`    |
    /// | `DATABASE_CONNECT_TIMEOUT_SECS` | `30`    |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is unset or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_prefixed("")
    }

    /// Loads configuration from variables carrying `prefix`, so that
    /// `CAMPAIGN_TEST_` reads `CAMPAIGN_TEST_DATABASE_URL` and so on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same conditions as
    /// [`DatabaseConfig::from_env`]. Errors name the unprefixed variable.
    pub fn from_env_prefixed(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(format!("{prefix}{key}")).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or blank, or a
    /// numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let pool_size = parse_or("DATABASE_POOL_SIZE", &lookup, DEFAULT_POOL_SIZE)?;
        let connect_timeout_secs = parse_or(
            "DATABASE_CONNECT_TIMEOUT_SECS",
            &lookup,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
            });
        }

        Ok(Self {
            database_url,
            pool_size,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    /// Builds the r2d2 connection pool described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when no connection can be established
    /// within the configured timeout.
    pub fn build_pool(&self) -> Result<CampaignPgPool, ConfigError> {
        self.build_pool_with(Pool::builder())
    }

    /// Builds the pool from a caller-prepared builder, for example one with a
    /// connection customizer. Size and timeout come from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when no connection can be established
    /// within the configured timeout.
    pub fn build_pool_with(
        &self,
        builder: Builder<ConnectionManager<PgConnection>>,
    ) -> Result<CampaignPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        let pool = builder
            .max_size(self.pool_size)
            .connection_timeout(self.connect_timeout)
            .build(manager)?;
        tracing::info!(pool_size = self.pool_size, "campaign database pool created");
        Ok(pool)
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
