//! Purse error types
//!
//! Each failure kind is distinguishable so callers can tell a mistyped
//! code from a blocked card from a refused amount.

use izly_auth::AuthError;
use izly_types::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for purse operations
pub type PurseResult<T> = Result<T, PurseError>;

/// Why an amount was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmountRejection {
    /// Amounts must be strictly positive
    Zero,
    /// Withdrawal larger than the balance
    ExceedsBalance { requested: Amount, available: Amount },
    /// Credit would push the balance above the limit
    ExceedsLimit { requested: Amount, headroom: Amount },
}

impl fmt::Display for AmountRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "amount must be positive"),
            Self::ExceedsBalance { requested, available } => {
                write!(f, "requested {} but only {} available", requested, available)
            }
            Self::ExceedsLimit { requested, headroom } => {
                write!(f, "requested {} but only {} below the limit", requested, headroom)
            }
        }
    }
}

/// Purse error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurseError {
    /// Supplied code is wrong, the code is not blocked yet
    #[error("Wrong code, {remaining_attempts} attempt(s) remaining")]
    WrongCode { remaining_attempts: u32 },

    /// The code is blocked; no funds may move
    #[error("Code is locked")]
    CodeLocked,

    /// Amount violates the balance range
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: AmountRejection },

    /// All operations allowed over the purse lifetime are used up
    #[error("Purse expired after {operations} operation(s)")]
    Expired { operations: u32 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PurseError {
    /// Get an error code for the caller (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WrongCode { .. } => "WRONG_CODE",
            Self::CodeLocked => "CODE_LOCKED",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::Expired { .. } => "PURSE_EXPIRED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the same operation may succeed with different input
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::WrongCode { .. } | Self::InvalidAmount { .. })
    }

    pub(crate) fn invalid_amount(reason: AmountRejection) -> Self {
        Self::InvalidAmount { reason }
    }
}

impl From<AuthError> for PurseError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::WrongCode { remaining_attempts } => Self::WrongCode { remaining_attempts },
            AuthError::CodeBlocked => Self::CodeLocked,
            other @ (AuthError::InvalidCodeFormat { .. } | AuthError::Config(_)) => {
                Self::Config(other.to_string())
            }
        }
    }
}
