//! Purse implementation

use std::sync::Arc;

use izly_auth::{CodeSecret, CodeVerifier};
use izly_types::{Amount, PurseId, TemporalAnchor};

use crate::config::PurseConfig;
use crate::error::{AmountRejection, PurseError, PurseResult};

/// A stored-value purse.
///
/// Invariant: `0 <= balance <= limit` after every call. Failed calls leave
/// the balance untouched.
#[derive(Debug)]
pub struct Purse<V: CodeVerifier + ?Sized = CodeSecret> {
    id: PurseId,
    balance: Amount,
    config: PurseConfig,
    /// Successful fund movements so far
    operations: u32,
    code_secret: Arc<V>,
    created_at: TemporalAnchor,
}

impl<V: CodeVerifier + ?Sized> Purse<V> {
    /// Create a purse with a balance limit and no operation lifetime
    pub fn new(initial_balance: Amount, code_secret: Arc<V>, limit: Amount) -> PurseResult<Self> {
        Self::with_config(initial_balance, code_secret, PurseConfig::new(limit))
    }

    /// Create a purse from a full configuration
    pub fn with_config(
        initial_balance: Amount,
        code_secret: Arc<V>,
        config: PurseConfig,
    ) -> PurseResult<Self> {
        config
            .validate()
            .map_err(|errors| PurseError::Config(errors.join("; ")))?;

        if initial_balance > config.limit {
            return Err(PurseError::invalid_amount(AmountRejection::ExceedsLimit {
                requested: initial_balance,
                headroom: config.limit,
            }));
        }

        let purse = Self {
            id: PurseId::new(),
            balance: initial_balance,
            config,
            operations: 0,
            code_secret,
            created_at: TemporalAnchor::now(),
        };

        tracing::debug!(
            purse_id = %purse.id,
            balance = %purse.balance,
            limit = %purse.config.limit,
            "Purse created"
        );

        Ok(purse)
    }

    /// Debit `amount` after checking the code.
    ///
    /// Checks run in order: lockout, lifetime, code, amount.
    pub fn withdraw_funds(&mut self, amount: Amount, code: &str) -> PurseResult<()> {
        self.ensure_unlocked()?;
        self.ensure_alive()?;

        if let Err(err) = self.code_secret.verify(code).into_result() {
            let err = PurseError::from(err);
            tracing::debug!(purse_id = %self.id, error = %err, "Withdrawal refused");
            return Err(err);
        }

        if amount.is_zero() {
            return Err(self.refuse(AmountRejection::Zero));
        }
        let balance = match self.balance.checked_sub(amount) {
            Some(balance) => balance,
            None => {
                return Err(self.refuse(AmountRejection::ExceedsBalance {
                    requested: amount,
                    available: self.balance,
                }))
            }
        };

        self.commit(balance);
        tracing::info!(purse_id = %self.id, amount = %amount, balance = %self.balance, "Funds withdrawn");
        Ok(())
    }

    /// Credit `amount`. Refused while the code is blocked.
    pub fn add_funds(&mut self, amount: Amount) -> PurseResult<()> {
        self.ensure_unlocked()?;
        self.ensure_alive()?;

        if amount.is_zero() {
            return Err(self.refuse(AmountRejection::Zero));
        }
        let balance = match self.balance.checked_add(amount) {
            Some(balance) if balance <= self.config.limit => balance,
            _ => {
                return Err(self.refuse(AmountRejection::ExceedsLimit {
                    requested: amount,
                    headroom: self.headroom(),
                }))
            }
        };

        self.commit(balance);
        tracing::info!(purse_id = %self.id, amount = %amount, balance = %self.balance, "Funds added");
        Ok(())
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn limit(&self) -> Amount {
        self.config.limit
    }

    /// Room left below the limit
    pub fn headroom(&self) -> Amount {
        self.config.limit.saturating_sub(self.balance)
    }

    pub fn id(&self) -> PurseId {
        self.id
    }

    pub fn created_at(&self) -> TemporalAnchor {
        self.created_at
    }

    pub fn config(&self) -> &PurseConfig {
        &self.config
    }

    /// Successful fund movements so far
    pub fn operations(&self) -> u32 {
        self.operations
    }

    /// Fund movements left, `None` when the lifetime is unlimited
    pub fn remaining_operations(&self) -> Option<u32> {
        self.config
            .max_operations
            .map(|max| max.saturating_sub(self.operations))
    }

    /// The shared code capability this purse authorizes against
    pub fn code_secret(&self) -> &Arc<V> {
        &self.code_secret
    }

    fn ensure_unlocked(&self) -> PurseResult<()> {
        if self.code_secret.is_blocked() {
            tracing::debug!(purse_id = %self.id, "Operation refused, code is locked");
            return Err(PurseError::CodeLocked);
        }
        Ok(())
    }

    fn ensure_alive(&self) -> PurseResult<()> {
        if self.remaining_operations() == Some(0) {
            return Err(PurseError::Expired {
                operations: self.operations,
            });
        }
        Ok(())
    }

    fn refuse(&self, reason: AmountRejection) -> PurseError {
        tracing::debug!(purse_id = %self.id, %reason, "Amount refused");
        PurseError::invalid_amount(reason)
    }

    fn commit(&mut self, balance: Amount) {
        self.balance = balance;
        self.operations = self.operations.saturating_add(1);
    }
}
