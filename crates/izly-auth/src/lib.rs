//! Izly Authentication Layer
//!
//! Gatekeeping for purse operations through a secret code (PIN):
//!
//! - **Verification**: exact, constant-time comparison of a candidate code
//! - **Lockout**: the code blocks itself after repeated failed attempts
//! - **Masking**: the secret is never observable once blocked
//!
//! # Lockout State Machine
//!
//! ```text
//!            wrong code (attempts < max)
//!               ┌──────┐
//!               ▼      │
//!  new ──►  ┌──────┐ ──┘   wrong code (attempts == max)   ┌─────────┐
//!           │ OPEN │ ──────────────────────────────────►  │ BLOCKED │ ◄─┐
//!           └──────┘                                       └─────────┘ ──┘
//!                                                            any code
//! ```
//!
//! `BLOCKED` is terminal. Failed attempts accumulate across the lifetime of
//! a [`CodeSecret`]; a correct code does not reset the counter.

pub mod code_secret;
pub mod config;
pub mod error;
pub mod verifier;

pub use code_secret::{CodeSecret, LockoutStatus, MASKED_CODE};
pub use config::CodeSecretConfig;
pub use error::{AuthError, AuthResult};
pub use verifier::{CodeVerifier, Verification};
