use std::env::{self, VarError};

use thiserror::Error;

/// Environment variable holding the weatherapi.com API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing API key.\n\
         Hint: set the {0} environment variable (a .env file in the working directory also works)."
    )]
    MissingApiKey(&'static str),

    #[error("Environment variable {0} is not valid unicode")]
    NonUnicodeApiKey(&'static str),
}

/// Runtime configuration, resolved once at process start.
///
/// The CLI bootstrap loads this before dispatching any work and hands the
/// credential to the components that need it; nothing reads the environment
/// after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(API_KEY_VAR, env::var(API_KEY_VAR))
    }

    fn from_lookup(
        var: &'static str,
        lookup: Result<String, VarError>,
    ) -> Result<Self, ConfigError> {
        let api_key = match lookup {
            Ok(value) => value,
            Err(VarError::NotPresent) => return Err(ConfigError::MissingApiKey(var)),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NonUnicodeApiKey(var)),
        };

        // A key that is set but blank cannot authenticate either.
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(var));
        }

        Ok(Self { api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_a_config_error() {
        let err = Config::from_lookup(API_KEY_VAR, Err(VarError::NotPresent)).unwrap_err();

        assert!(matches!(err, ConfigError::MissingApiKey(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn blank_variable_is_a_config_error() {
        let err = Config::from_lookup(API_KEY_VAR, Ok("   ".to_string())).unwrap_err();

        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn present_variable_becomes_the_api_key() {
        let config = Config::from_lookup(API_KEY_VAR, Ok("SECRET".to_string()))
            .expect("key must be accepted");

        assert_eq!(config.api_key, "SECRET");
    }
}
