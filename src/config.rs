use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::routes::CorsPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated. Unset means the development allow-list.
    pub cors_origins: Option<String>,

    /// Whether browsers may send credentials on cross-origin requests
    #[serde(default = "default_cors_allow_credentials")]
    pub cors_allow_credentials: bool,

    /// Log level. Unset means debug in development and info elsewhere.
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars).map_err(ConfigError::EnvError)?;
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS policy for all routes
    pub fn cors_policy(&self) -> CorsPolicy {
        match &self.cors_origins {
            Some(origins) => CorsPolicy::from_origin_list(origins, self.cors_allow_credentials),
            None => CorsPolicy {
                allow_credentials: self.cors_allow_credentials,
                ..CorsPolicy::default()
            },
        }
    }

    /// Log level for this crate's spans and events
    pub fn effective_log_level(&self) -> &str {
        match &self.log_level {
            Some(level) => level,
            None if self.is_development() => "debug",
            None => "info",
        }
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "prod" || self.environment.to_lowercase() == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            cors_origins: None,
            cors_allow_credentials: default_cors_allow_credentials(),
            log_level: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_cors_allow_credentials() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.effective_log_level(), "debug");
        assert_eq!(config.cors_policy(), CorsPolicy::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("ENVIRONMENT", "Production"),
            ("CORS_ORIGINS", "http://localhost:5173"),
            ("CORS_ALLOW_CREDENTIALS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:9000");
        assert!(config.is_production());
        assert_eq!(config.effective_log_level(), "info");

        let policy = config.cors_policy();
        assert_eq!(policy.origins, vec!["http://localhost:5173"]);
        assert!(!policy.allow_credentials);
    }

    #[test]
    fn explicit_log_level_wins_over_environment_default() {
        let config = Config::from_vars(vars(&[("LOG_LEVEL", "warn")])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.effective_log_level(), "warn");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().starts_with("Environment variable error"));
    }
}
