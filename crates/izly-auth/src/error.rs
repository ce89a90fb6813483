//! Authentication error types
//!
//! Errors are safe for external exposure: none of them carries the secret.

use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    // =========================================================================
    // Verification Errors
    // =========================================================================
    /// Candidate code does not match, lockout not yet tripped
    #[error("Wrong code, {remaining_attempts} attempt(s) remaining")]
    WrongCode {
        /// Attempts left before the code blocks
        remaining_attempts: u32,
    },

    /// The code is blocked after too many failed attempts
    #[error("Code is blocked")]
    CodeBlocked,

    // =========================================================================
    // Construction Errors
    // =========================================================================
    /// Secret code does not have the configured shape
    #[error("Invalid code format: expected {expected_length} character(s)")]
    InvalidCodeFormat {
        /// Configured code length
        expected_length: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Get an error code for the caller (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WrongCode { .. } => "WRONG_CODE",
            Self::CodeBlocked => "CODE_BLOCKED",
            Self::InvalidCodeFormat { .. } => "INVALID_CODE_FORMAT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::WrongCode { remaining_attempts: 2 }.error_code(),
            "WRONG_CODE"
        );
        assert_eq!(AuthError::CodeBlocked.error_code(), "CODE_BLOCKED");
    }

    #[test]
    fn test_wrong_code_message_reports_remaining() {
        let err = AuthError::WrongCode { remaining_attempts: 1 };
        assert_eq!(err.to_string(), "Wrong code, 1 attempt(s) remaining");
    }
}
