//! Secret code with brute-force lockout
//!
//! A [`CodeSecret`] is meant to be shared: the host keeps an
//! `Arc<CodeSecret>` for direct queries while the purse holds another
//! clone for authorization. The lockout state lives behind a mutex so both
//! handles always observe the same counter.

use std::fmt;

use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::CodeSecretConfig;
use crate::error::{AuthError, AuthResult};
use crate::verifier::{CodeVerifier, Verification};

/// Placeholder returned by [`CodeSecret::reveal_code`] once blocked
pub const MASKED_CODE: &str = "xxxx";

/// Lockout status of a secret code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockoutStatus {
    Open,
    Blocked,
}

#[derive(Debug, Default)]
struct LockoutState {
    failed_attempts: u32,
    blocked: bool,
}

/// Secret code protecting a purse
pub struct CodeSecret {
    code: Zeroizing<String>,
    config: CodeSecretConfig,
    state: Mutex<LockoutState>,
}

impl CodeSecret {
    /// Create a secret code with the default configuration
    pub fn new(code: impl Into<String>) -> AuthResult<Self> {
        Self::with_config(code, CodeSecretConfig::default())
    }

    /// Create a secret code with an explicit configuration
    pub fn with_config(code: impl Into<String>, config: CodeSecretConfig) -> AuthResult<Self> {
        config
            .validate()
            .map_err(|errors| AuthError::Config(errors.join("; ")))?;

        let code = Zeroizing::new(code.into());
        if !config.accepts(&code) {
            return Err(AuthError::InvalidCodeFormat {
                expected_length: config.code_length,
            });
        }

        Ok(Self {
            code,
            config,
            state: Mutex::new(LockoutState::default()),
        })
    }

    /// Create a secret with a random numeric code of the configured length
    pub fn generate(config: CodeSecretConfig) -> AuthResult<Self> {
        let mut rng = rand::thread_rng();
        let code: String = (0..config.code_length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self::with_config(code, config)
    }

    /// Check a candidate code.
    ///
    /// Once blocked every call returns [`Verification::Blocked`], even for
    /// the correct code. The wrong attempt that reaches
    /// `max_attempts` also returns `Blocked`.
    pub fn verify(&self, candidate: &str) -> Verification {
        let matches: bool = self.code.as_bytes().ct_eq(candidate.as_bytes()).into();
        let mut state = self.state.lock();

        if state.blocked {
            tracing::debug!("Verification attempted on blocked code");
            return Verification::Blocked;
        }
        if matches {
            return Verification::Accepted;
        }

        state.failed_attempts = state.failed_attempts.saturating_add(1);
        if state.failed_attempts >= self.config.max_attempts {
            state.blocked = true;
            tracing::warn!(
                failed_attempts = state.failed_attempts,
                "Code blocked due to failed attempts"
            );
            return Verification::Blocked;
        }

        let remaining_attempts = self.config.max_attempts - state.failed_attempts;
        tracing::warn!(remaining_attempts, "Wrong code submitted");
        Verification::Rejected { remaining_attempts }
    }

    /// Boolean form of [`verify`](Self::verify): `true` only when accepted
    pub fn verify_code(&self, candidate: &str) -> bool {
        self.verify(candidate).is_accepted()
    }

    pub fn is_blocked(&self) -> bool {
        self.state.lock().blocked
    }

    pub fn status(&self) -> LockoutStatus {
        if self.is_blocked() {
            LockoutStatus::Blocked
        } else {
            LockoutStatus::Open
        }
    }

    /// The real code while open, [`MASKED_CODE`] once blocked
    pub fn reveal_code(&self) -> String {
        let state = self.state.lock();
        if state.blocked {
            MASKED_CODE.to_string()
        } else {
            self.code.as_str().to_string()
        }
    }

    /// Failed attempts recorded so far
    pub fn failed_attempts(&self) -> u32 {
        self.state.lock().failed_attempts
    }

    /// Attempts left before the code blocks (zero once blocked)
    pub fn remaining_attempts(&self) -> u32 {
        let state = self.state.lock();
        if state.blocked {
            0
        } else {
            self.config.max_attempts.saturating_sub(state.failed_attempts)
        }
    }

    pub fn config(&self) -> &CodeSecretConfig {
        &self.config
    }
}

impl CodeVerifier for CodeSecret {
    fn verify(&self, candidate: &str) -> Verification {
        CodeSecret::verify(self, candidate)
    }

    fn is_blocked(&self) -> bool {
        CodeSecret::is_blocked(self)
    }

    fn reveal_code(&self) -> String {
        CodeSecret::reveal_code(self)
    }
}

impl fmt::Debug for CodeSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CodeSecret")
            .field("code", &"<redacted>")
            .field("failed_attempts", &state.failed_attempts)
            .field("blocked", &state.blocked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const VALID: &str = "8888";
    const INVALID: &str = "1234";

    fn secret() -> CodeSecret {
        CodeSecret::new(VALID).unwrap()
    }

    #[test]
    fn test_correct_code_is_accepted() {
        let secret = secret();
        assert_eq!(secret.verify(VALID), Verification::Accepted);
        assert!(secret.verify_code(VALID));
        assert_eq!(secret.failed_attempts(), 0);
        assert!(!secret.is_blocked());
    }

    #[test]
    fn test_wrong_code_counts_down() {
        let secret = secret();
        assert_eq!(
            secret.verify(INVALID),
            Verification::Rejected { remaining_attempts: 2 }
        );
        assert_eq!(
            secret.verify(INVALID),
            Verification::Rejected { remaining_attempts: 1 }
        );
        assert_eq!(secret.remaining_attempts(), 1);
        assert!(!secret.is_blocked());
    }

    #[test]
    fn test_blocks_after_three_failures() {
        let secret = secret();
        assert!(!secret.is_blocked());
        secret.verify(INVALID);
        secret.verify(INVALID);
        assert_eq!(secret.verify(INVALID), Verification::Blocked);
        assert!(secret.is_blocked());
        assert_eq!(secret.status(), LockoutStatus::Blocked);
        assert_eq!(secret.remaining_attempts(), 0);
    }

    #[test]
    fn test_correct_code_does_not_unblock() {
        let secret = secret();
        for _ in 0..3 {
            secret.verify(INVALID);
        }
        assert_eq!(secret.verify(VALID), Verification::Blocked);
        assert!(!secret.verify_code(VALID));
        assert!(secret.is_blocked());
    }

    #[test]
    fn test_success_does_not_reset_failures() {
        let secret = secret();
        secret.verify(INVALID);
        secret.verify(INVALID);
        assert!(secret.verify_code(VALID));
        assert_eq!(secret.failed_attempts(), 2);
        assert_eq!(secret.verify(INVALID), Verification::Blocked);
    }

    #[test]
    fn test_reveal_masks_once_blocked() {
        let secret = secret();
        assert_eq!(secret.reveal_code(), VALID);
        for _ in 0..3 {
            secret.verify(INVALID);
        }
        assert_eq!(secret.reveal_code(), MASKED_CODE);
    }

    #[test]
    fn test_reads_do_not_mutate() {
        let secret = secret();
        secret.verify(INVALID);
        for _ in 0..10 {
            assert!(!secret.is_blocked());
            assert_eq!(secret.reveal_code(), VALID);
            assert_eq!(secret.remaining_attempts(), 2);
        }
        assert_eq!(secret.failed_attempts(), 1);
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert_eq!(
            CodeSecret::new("888").unwrap_err(),
            AuthError::InvalidCodeFormat { expected_length: 4 }
        );
        assert!(CodeSecret::new("88a8").is_err());
        assert!(CodeSecret::new("88888").is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CodeSecretConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            CodeSecret::with_config(VALID, config),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_custom_attempt_limit() {
        let config = CodeSecretConfig {
            max_attempts: 1,
            ..Default::default()
        };
        let secret = CodeSecret::with_config(VALID, config).unwrap();
        assert_eq!(secret.verify(INVALID), Verification::Blocked);
    }

    #[test]
    fn test_generate_produces_valid_code() {
        let config = CodeSecretConfig {
            code_length: 6,
            ..Default::default()
        };
        let secret = CodeSecret::generate(config).unwrap();
        let code = secret.reveal_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(secret.verify_code(&code));
    }

    #[test]
    fn test_debug_redacts_code() {
        let rendered = format!("{:?}", secret());
        assert!(!rendered.contains(VALID));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_shared_handles_see_same_state() {
        let host = Arc::new(secret());
        let purse_side = Arc::clone(&host);
        for _ in 0..3 {
            purse_side.verify(INVALID);
        }
        assert!(host.is_blocked());
        assert_eq!(host.reveal_code(), MASKED_CODE);
    }
}
