//! Amount type in minor currency units
//!
//! Purse balances never go below zero, so amounts are unsigned: a negative
//! balance cannot even be represented. All arithmetic is checked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minor units in one major unit (cents per euro)
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Non-negative amount of money, stored in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount from raw minor units
    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Amount from whole major units (e.g. `from_major(150)` is 150.00).
    /// Saturates at the largest representable amount.
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_UNITS_PER_MAJOR))
    }

    /// Raw value in minor units
    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, `None` if the result would be negative
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Subtraction clamped at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}

impl From<u64> for Amount {
    fn from(minor_units: u64) -> Self {
        Self(minor_units)
    }
}
