//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::DatabaseConfig;

/// Which repository implementation backs the use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryBackend {
    /// PostgreSQL through SeaORM
    #[default]
    Postgres,
    /// Process-local maps, gone when the process exits
    Memory,
}

impl FromStr for RepositoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "sql" => Ok(RepositoryBackend::Postgres),
            "memory" | "in-memory" => Ok(RepositoryBackend::Memory),
            other => Err(format!("unknown repository backend '{}'", other)),
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryBackend::Postgres => f.write_str("postgres"),
            RepositoryBackend::Memory => f.write_str("memory"),
        }
    }
}

/// User service configuration.
#[derive(Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Repository implementation selected at startup
    pub backend: RepositoryBackend,
}

impl fmt::Debug for UserServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserServiceConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.database.max_connections)
            .field("min_connections", &self.database.min_connections)
            .field("backend", &self.backend)
            .finish()
    }
}

impl UserServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DatabaseConfig::default();
        let backend = match env::var("USER_SERVICE_REPOSITORY") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to {}", e, RepositoryBackend::default());
                RepositoryBackend::default()
            }),
            Err(_) => RepositoryBackend::default(),
        };

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            backend,
        }
    }

    /// Same configuration with a different backend.
    pub fn with_backend(mut self, backend: RepositoryBackend) -> Self {
        self.backend = backend;
        self
    }
}
