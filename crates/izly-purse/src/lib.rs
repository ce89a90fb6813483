//! Izly Purse - Stored-value accounts protected by a secret code
//!
//! A [`Purse`] holds a balance between zero and a configured limit and
//! delegates every authorization decision to a shared [`CodeVerifier`]:
//!
//! - Withdrawals require the correct code
//! - Once the code is blocked, no funds move in either direction
//! - Amounts that would leave the `0..=limit` range are refused
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use izly_auth::CodeSecret;
//! use izly_purse::{Purse, PurseError};
//! use izly_types::Amount;
//!
//! let code = Arc::new(CodeSecret::new("8888").unwrap());
//! let mut purse = Purse::new(Amount::from_major(150), Arc::clone(&code), Amount::from_major(300)).unwrap();
//!
//! purse.withdraw_funds(Amount::from_major(10), "8888").unwrap();
//! assert_eq!(purse.balance(), Amount::from_major(140));
//!
//! assert!(matches!(
//!     purse.withdraw_funds(Amount::from_major(10), "1234"),
//!     Err(PurseError::WrongCode { remaining_attempts: 2 })
//! ));
//! ```

pub mod config;
pub mod error;
pub mod purse;

pub use config::PurseConfig;
pub use error::{AmountRejection, PurseError, PurseResult};
pub use purse::Purse;

pub use izly_auth::{CodeSecret, CodeVerifier, Verification};
pub use izly_types::{Amount, PurseId};
