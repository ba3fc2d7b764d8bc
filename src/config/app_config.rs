use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

/// `url` is `None` when no database is configured; the in-memory store is used instead.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_size: 1024 * 1024,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "8080")?,
                max_body_size: parse_var("MAX_BODY_SIZE", "1048576")?,
            },
            database: DatabaseConfig {
                url: env::var("DB_URL").ok().filter(|url| !url.trim().is_empty()),
                max_connections: parse_var("DB_MAX_CONNECTIONS", "10")?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .map(|value| parse_origins(&value))
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name)))
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn unparseable_numbers_are_config_errors() {
        let err = parse_var::<u16>("PRODUCT_CATALOG_TEST_UNSET_PORT", "not-a-port").unwrap_err();
        match err {
            AppError::ConfigError(msg) => {
                assert_eq!(msg, "Invalid PRODUCT_CATALOG_TEST_UNSET_PORT value")
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;
        assert_eq!(config.server_address(), "127.0.0.1:9000");
    }
}
