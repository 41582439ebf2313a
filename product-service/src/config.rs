use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub broker: BrokerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    pub exchange: String,
    pub routing_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort)?,
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            },
            broker: BrokerConfig {
                exchange: env::var("PRODUCT_EXCHANGE")
                    .unwrap_or_else(|_| "product.events".to_string()),
                routing_key: env::var("PRODUCT_ROUTING_KEY")
                    .unwrap_or_else(|_| "product.created".to_string()),
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.broker.exchange.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Exchange name must not be empty".to_string(),
            ));
        }

        if self.broker.routing_key.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Routing key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
            },
            broker: BrokerConfig {
                exchange: "product.events".to_string(),
                routing_key: "product.created".to_string(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.broker.exchange, "product.events");
        assert_eq!(config.broker.routing_key, "product.created");
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_exchange_is_rejected() {
        let mut config = Config::default();
        config.broker.exchange = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("PRODUCT_EXCHANGE", "custom.exchange");
        env::set_var("PRODUCT_ROUTING_KEY", "custom.key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.broker.exchange, "custom.exchange");
        assert_eq!(config.broker.routing_key, "custom.key");

        env::remove_var("PRODUCT_EXCHANGE");
        env::remove_var("PRODUCT_ROUTING_KEY");
    }
}
