//! Agent backend configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Agent backend configuration.
///
/// The planner's agents run on two OpenAI-compatible backends: OpenRouter
/// (research and flight search) and Groq (parameter agents). Both keys are
/// required.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenRouter API key
    pub openrouter_api_key: Option<Secret<String>>,

    /// Groq API key
    pub groq_api_key: Option<Secret<String>>,

    /// OpenRouter base URL
    #[serde(default = "default_openrouter_base_url")]
    pub openrouter_base_url: String,

    /// Groq base URL
    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenRouter is configured
    pub fn has_openrouter(&self) -> bool {
        self.openrouter_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Check if Groq is configured
    pub fn has_groq(&self) -> bool {
        self.groq_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Exposes the OpenRouter key for adapter construction.
    pub fn openrouter_key(&self) -> &str {
        self.openrouter_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default()
    }

    /// Exposes the Groq key for adapter construction.
    pub fn groq_key(&self) -> &str {
        self.groq_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default()
    }

    /// Validate agent backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openrouter() {
            return Err(ValidationError::MissingRequired("OPENROUTER_API_KEY"));
        }
        if !self.has_groq() {
            return Err(ValidationError::MissingRequired("GROQ_API_KEY"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            groq_api_key: None,
            openrouter_base_url: default_openrouter_base_url(),
            groq_base_url: default_groq_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_openrouter_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_keys() -> AiConfig {
        AiConfig {
            openrouter_api_key: Some(Secret::new("or-xxx".to_string())),
            groq_api_key: Some(Secret::new("gsk-xxx".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_point_at_hosted_backends() {
        let config = AiConfig::default();
        assert_eq!(config.openrouter_base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.groq_base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..with_keys()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn validation_requires_both_keys() {
        assert!(AiConfig::default().validate().is_err());

        let only_openrouter = AiConfig {
            openrouter_api_key: Some(Secret::new("or-xxx".to_string())),
            ..Default::default()
        };
        assert!(only_openrouter.validate().is_err());

        assert!(with_keys().validate().is_ok());
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = AiConfig {
            openrouter_api_key: Some(Secret::new(String::new())),
            ..with_keys()
        };
        assert!(!config.has_openrouter());
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = AiConfig {
            timeout_secs: 0,
            ..with_keys()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
