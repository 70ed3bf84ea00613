//! Startup configuration.
//!
//! The credential is loaded exactly once at process start and never mutated
//! afterwards; a missing key halts the application before any request can be
//! served. Tests inject fake settings instead of touching the environment.

use std::env;
use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

/// Environment variable holding the ApyHub API key.
pub const API_KEY_ENV: &str = "APYHUB_API_KEY";
/// Optional override for the transcription endpoint.
pub const ENDPOINT_ENV: &str = "APYHUB_ENDPOINT";

const DEFAULT_ENDPOINT: &str = "https://api.apyhub.com/stt/file";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APYHUB_API_KEY is not set")]
    MissingApiKey,
    #[error("APYHUB_API_KEY is empty")]
    EmptyApiKey,
}

/// Process-wide configuration, constructed once at startup.
pub struct Settings {
    pub api_key: SecretString,
    pub endpoint: String,
    pub max_upload_bytes: u64,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if the API key is missing or empty. Callers
    /// treat this as fatal: there is no way to recover at runtime.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let endpoint =
            env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            api_key: SecretString::from(api_key),
            endpoint,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }
}
