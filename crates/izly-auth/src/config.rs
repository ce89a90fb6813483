//! Secret code configuration
//!
//! Defaults model a campus card PIN: four digits, three attempts.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Environment variable overriding [`CodeSecretConfig::max_attempts`]
pub const ENV_MAX_ATTEMPTS: &str = "IZLY_MAX_CODE_ATTEMPTS";
/// Environment variable overriding [`CodeSecretConfig::code_length`]
pub const ENV_CODE_LENGTH: &str = "IZLY_CODE_LENGTH";

/// Longest code accepted by [`CodeSecretConfig::validate`]
pub const MAX_CODE_LENGTH: usize = 32;

/// Secret code configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSecretConfig {
    /// Cumulative failed attempts that block the code
    pub max_attempts: u32,
    /// Exact number of characters in a code
    pub code_length: usize,
    /// Only ASCII digits are allowed in a code
    pub digits_only: bool,
}

impl Default for CodeSecretConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            code_length: 4,
            digits_only: true,
        }
    }
}

impl CodeSecretConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> AuthResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_MAX_ATTEMPTS) {
            config.max_attempts = raw.trim().parse().map_err(|_| {
                AuthError::Config(format!("{} must be an unsigned integer, got '{}'", ENV_MAX_ATTEMPTS, raw))
            })?;
        }
        if let Ok(raw) = std::env::var(ENV_CODE_LENGTH) {
            config.code_length = raw.trim().parse().map_err(|_| {
                AuthError::Config(format!("{} must be an unsigned integer, got '{}'", ENV_CODE_LENGTH, raw))
            })?;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_attempts == 0 {
            errors.push("max_attempts must be at least 1".to_string());
        }
        if self.code_length == 0 {
            errors.push("code_length must be at least 1".to_string());
        } else if self.code_length > MAX_CODE_LENGTH {
            errors.push(format!("code_length must be at most {}", MAX_CODE_LENGTH));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check that `code` has the configured shape
    pub fn accepts(&self, code: &str) -> bool {
        code.chars().count() == self.code_length
            && (!self.digits_only || code.chars().all(|c| c.is_ascii_digit()))
    }
}
