//! Configuration for the content-generation service boundary.

use secrecy::SecretString;

use crate::error::{ConfigError, Result};

/// Default model for portfolio generation. Flash handles the multimodal
/// vision part of the request well.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default API endpoint base.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Content service configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// API key. `None` means every generation takes the local fallback path.
    pub api_key: Option<SecretString>,
    pub model: String,
    pub endpoint: String,
}

impl ContentConfig {
    /// Build config from environment variables.
    ///
    /// A missing `GEMINI_API_KEY` is not an error — the engine degrades to
    /// the deterministic fallback generator instead of blocking listings.
    /// Overridden values that cannot work (blank model, non-HTTP endpoint)
    /// are rejected.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(SecretString::from);
        let model = std::env::var("SHAKTI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint =
            std::env::var("SHAKTI_GEMINI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::from_parts(api_key, model, endpoint)
    }

    /// Validate and assemble a config from already-resolved values.
    pub fn from_parts(
        api_key: Option<SecretString>,
        model: String,
        endpoint: String,
    ) -> Result<Self> {
        if model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "SHAKTI_MODEL".to_string(),
                message: "model name is empty".to_string(),
            }
            .into());
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "SHAKTI_GEMINI_ENDPOINT".to_string(),
                message: "endpoint must be an http(s) URL".to_string(),
            }
            .into());
        }
        Ok(Self {
            api_key,
            model,
            endpoint,
        })
    }

    /// Config with no credential — generation always falls back.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn offline_config_has_no_credential() {
        let config = ContentConfig::offline();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn default_parts_are_valid() {
        let config = ContentConfig::from_parts(
            None,
            DEFAULT_MODEL.to_string(),
            DEFAULT_ENDPOINT.to_string(),
        )
        .unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_model_rejected() {
        let err = ContentConfig::from_parts(None, "  ".to_string(), DEFAULT_ENDPOINT.to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { ref key, .. }) if key == "SHAKTI_MODEL"
        ));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let err = ContentConfig::from_parts(
            None,
            DEFAULT_MODEL.to_string(),
            "generativelanguage.googleapis.com".to_string(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { ref key, .. })
                if key == "SHAKTI_GEMINI_ENDPOINT"
        ));
    }
}
