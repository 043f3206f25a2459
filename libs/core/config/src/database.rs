use crate::{env_or_default, ConfigError, FromEnv};

/// Database configuration
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl FromEnv for DatabaseConfig {
    /// Reads DATABASE_URL, defaulting to a local SQLite file so the service
    /// runs out of the box without external infrastructure.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", "sqlite://products.db?mode=rwc"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_from_env() {
        temp_env::with_var("DATABASE_URL", Some("sqlite::memory:"), || {
            let config = DatabaseConfig::from_env().unwrap();
            assert_eq!(config.url, "sqlite::memory:");
        });
    }

    #[test]
    fn test_database_config_default_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let config = DatabaseConfig::from_env().unwrap();
            assert!(config.url.starts_with("sqlite://"));
        });
    }
}
