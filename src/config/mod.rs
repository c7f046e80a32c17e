// src/config/mod.rs
// All values load from the environment (.env supported), with defaults for
// everything except the API key.

use std::str::FromStr;

use crate::error::{BrandwiseError, Result};

/// Default Gemini REST endpoint base
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct BrandwiseConfig {
    // ── Gemini Configuration
    pub gemini_api_key: String,
    pub api_base_url: String,
    pub plan_model: String,
    pub image_model: String,
    pub chat_model: String,

    // ── Timeouts (in seconds)
    pub request_timeout: u64,

    // ── Progress feedback
    pub progress_interval: u64,

    // ── Logging Configuration
    pub log_level: String,
}

/// Read an env var, falling back to `default` when missing or unparseable.
/// Values may carry trailing comments in .env files.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl BrandwiseConfig {
    /// Load configuration from the environment.
    ///
    /// Fails only when `GEMINI_API_KEY` is absent; every other field has a
    /// default.
    pub fn from_env() -> Result<Self> {
        // Best effort: missing .env just means plain env vars
        let _ = dotenvy::dotenv();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| BrandwiseError::Validation("GEMINI_API_KEY not set".to_string()))?;

        Ok(Self {
            gemini_api_key,
            api_base_url: env_var_or("BRANDWISE_API_BASE_URL", DEFAULT_API_BASE_URL.to_string()),
            plan_model: env_var_or("BRANDWISE_PLAN_MODEL", "gemini-2.5-flash".to_string()),
            image_model: env_var_or(
                "BRANDWISE_IMAGE_MODEL",
                "imagen-4.0-generate-001".to_string(),
            ),
            chat_model: env_var_or("BRANDWISE_CHAT_MODEL", "gemini-2.5-flash".to_string()),
            request_timeout: env_var_or("BRANDWISE_REQUEST_TIMEOUT", 120),
            progress_interval: env_var_or("BRANDWISE_PROGRESS_INTERVAL", 2),
            log_level: env_var_or("BRANDWISE_LOG_LEVEL", "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_default_on_missing() {
        assert_eq!(env_var_or("BRANDWISE_TEST_MISSING_VAR", 42u64), 42);
    }

    #[test]
    fn test_env_var_or_strips_comments() {
        std::env::set_var("BRANDWISE_TEST_COMMENTED", "7 # progress seconds");
        assert_eq!(env_var_or("BRANDWISE_TEST_COMMENTED", 0u64), 7);
        std::env::remove_var("BRANDWISE_TEST_COMMENTED");
    }

    #[test]
    fn test_env_var_or_default_on_parse_failure() {
        std::env::set_var("BRANDWISE_TEST_BAD_NUMBER", "not-a-number");
        assert_eq!(env_var_or("BRANDWISE_TEST_BAD_NUMBER", 9u64), 9);
        std::env::remove_var("BRANDWISE_TEST_BAD_NUMBER");
    }
}
