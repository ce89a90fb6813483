//! Izly Types - Foundation types for stored-value purses
//!
//! This crate has no dependency on other izly crates. It defines:
//!
//! - [`Amount`]: non-negative money in minor units (cents)
//! - [`PurseId`]: strongly typed purse identifier
//! - [`TemporalAnchor`]: creation timestamps

pub mod amount;
pub mod identity;

pub use amount::*;
pub use identity::*;

/// Point in time a purse (or any other entity) came into existence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TemporalAnchor {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl TemporalAnchor {
    /// Anchor at the current wall-clock time
    pub fn now() -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Anchor with an explicit timestamp
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }

    /// Convert back to a UTC datetime, if the timestamp is representable
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.timestamp)
    }
}

impl Default for TemporalAnchor {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_roundtrips_through_datetime() {
        let anchor = TemporalAnchor::new(1_700_000_000_000);
        let dt = anchor.to_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_anchor_ordering() {
        assert!(TemporalAnchor::new(1) < TemporalAnchor::new(2));
    }
}
