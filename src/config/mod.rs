//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `WAYFARER` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use wayfarer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod memory;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use memory::MemoryConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Agent backend configuration (OpenRouter/Groq).
    #[serde(default)]
    pub ai: AiConfig,

    /// Memory store configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads environment variables with the `WAYFARER` prefix
    /// 3. Uses `__` to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `WAYFARER__AI__OPENROUTER_API_KEY=...` -> `ai.openrouter_api_key`
    /// - `WAYFARER__MEMORY__PATH=...` -> `memory.path`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WAYFARER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.memory.validate()?;
        Ok(())
    }
}
