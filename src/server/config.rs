//! Environment-based application configuration.

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN_DEV: &str = "http://localhost:3000";

/// Runtime environment selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
    Test,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub port: u16,
    pub cors_origin_dev: String,
    pub cors_origin_prod: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Development,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origin_dev =
            lookup("CORS_ORIGIN_DEV").unwrap_or_else(|| DEFAULT_CORS_ORIGIN_DEV.to_string());
        let cors_origin_prod = lookup("CORS_ORIGIN_PROD");

        if environment == Environment::Production && cors_origin_prod.is_none() {
            return Err(ConfigError::MissingEnvVar("CORS_ORIGIN_PROD".to_string()));
        }

        Ok(Self {
            environment,
            database_url,
            port,
            cors_origin_dev,
            cors_origin_prod,
        })
    }

    /// Origin allowed by CORS for the current environment.
    pub fn cors_origin(&self) -> Result<HeaderValue, ConfigError> {
        let (name, origin) = match (self.environment, &self.cors_origin_prod) {
            (Environment::Production, Some(origin)) => ("CORS_ORIGIN_PROD", origin),
            (Environment::Production, None) => {
                return Err(ConfigError::MissingEnvVar("CORS_ORIGIN_PROD".to_string()))
            }
            _ => ("CORS_ORIGIN_DEV", &self.cors_origin_dev),
        };

        HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: origin.clone(),
        })
    }
}
