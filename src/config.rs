use std::time::Duration;

use reqwest::Url as ServiceUrl;
use serde::Deserialize;
use thiserror::Error;

/// Compiled-in target of the health check.
pub const DEFAULT_ENDPOINT: &str = "https://blacksmithv2-1.onrender.com/ping";

/// Maximum time to wait for the backend response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// It parses the configuration from a JSON format.
///
/// # Errors
///
/// Will return an error if the configuration is not valid.
pub fn parse_from_json(json: &str) -> Result<Configuration, ConfigurationError> {
    let plain_config: PlainConfiguration = serde_json::from_str(json).map_err(ConfigurationError::JsonParseError)?;
    Configuration::try_from(plain_config)
}

/// DTO to deserialize the configuration.
///
/// Configuration does not need to be valid. Both fields are optional; a
/// missing field falls back to the compiled-in default.
#[derive(Deserialize)]
struct PlainConfiguration {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    pub endpoint: ServiceUrl,
    pub timeout: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint: ServiceUrl::parse(DEFAULT_ENDPOINT).expect("default endpoint should be a valid URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("JSON parse error: {0}")]
    JsonParseError(serde_json::Error),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(url::ParseError),
}

impl TryFrom<PlainConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let defaults = Configuration::default();

        let endpoint = match plain_config.endpoint {
            Some(url) => url.parse::<ServiceUrl>().map_err(ConfigurationError::InvalidUrl)?,
            None => defaults.endpoint,
        };

        let timeout = plain_config.timeout_secs.map_or(defaults.timeout, Duration::from_secs);

        Ok(Configuration { endpoint, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_should_be_built_from_plain_serializable_configuration() {
        let dto = PlainConfiguration {
            endpoint: Some("http://127.0.0.1:8080/ping".to_string()),
            timeout_secs: Some(5),
        };

        let config = Configuration::try_from(dto).expect("A valid configuration");

        assert_eq!(config.endpoint, ServiceUrl::parse("http://127.0.0.1:8080/ping").unwrap());
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    mod building_configuration_from_plain_configuration {
        use std::time::Duration;

        use crate::config::{parse_from_json, Configuration, PlainConfiguration, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

        #[test]
        fn it_should_fall_back_to_the_compiled_in_defaults_when_fields_are_missing() {
            let plain_config = PlainConfiguration {
                endpoint: None,
                timeout_secs: None,
            };

            let config = Configuration::try_from(plain_config).expect("Invalid plain configuration");

            assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
            assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        }

        #[test]
        fn it_should_fail_when_the_endpoint_url_is_invalid() {
            let plain_config = PlainConfiguration {
                endpoint: Some("invalid URL".to_string()),
                timeout_secs: None,
            };

            assert!(Configuration::try_from(plain_config).is_err());
        }

        #[test]
        fn it_should_allow_overriding_only_the_timeout() {
            let config = parse_from_json(r#"{"timeout_secs": 10}"#).expect("A valid configuration");

            assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
            assert_eq!(config.timeout, Duration::from_secs(10));
        }

        #[test]
        fn it_should_fail_when_the_json_is_malformed() {
            assert!(parse_from_json("not json").is_err());
        }
    }

    mod default_configuration {
        use crate::config::{Configuration, DEFAULT_TIMEOUT};

        #[test]
        fn it_should_target_the_compiled_in_endpoint() {
            let config = Configuration::default();

            assert_eq!(config.endpoint.as_str(), "https://blacksmithv2-1.onrender.com/ping");
        }

        #[test]
        fn it_should_wait_thirty_seconds_for_a_response() {
            assert_eq!(DEFAULT_TIMEOUT.as_secs(), 30);
        }
    }
}
