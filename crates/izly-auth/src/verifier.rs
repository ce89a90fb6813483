//! Code verification capability
//!
//! Purses only see a [`CodeVerifier`], never a concrete secret, so hosts
//! can inject their own implementation (a hardware secure element, a stub
//! in tests) without the purse knowing.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Outcome of a single verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verification {
    /// Code matched while the verifier was open
    Accepted,
    /// Code did not match; the verifier is still open
    Rejected {
        /// Attempts left before the verifier blocks
        remaining_attempts: u32,
    },
    /// The verifier is blocked, whatever code was supplied
    Blocked,
}

impl Verification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Convert into the error channel: `WrongCode` or `CodeBlocked`
    pub fn into_result(self) -> AuthResult<()> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected { remaining_attempts } => Err(AuthError::WrongCode { remaining_attempts }),
            Self::Blocked => Err(AuthError::CodeBlocked),
        }
    }
}

/// Capability to verify a secret code with lockout
pub trait CodeVerifier: Send + Sync {
    /// Check a candidate code, advancing the lockout state on failure
    fn verify(&self, candidate: &str) -> Verification;

    /// Whether the verifier is blocked. Never mutates state.
    fn is_blocked(&self) -> bool;

    /// The secret while open, a masked placeholder once blocked
    fn reveal_code(&self) -> String;
}
