//! Purse configuration

use izly_types::Amount;
use serde::{Deserialize, Serialize};

use crate::error::{PurseError, PurseResult};

/// Environment variable holding the balance limit, in minor units
pub const ENV_LIMIT: &str = "IZLY_PURSE_LIMIT";
/// Environment variable holding the operation lifetime
pub const ENV_MAX_OPERATIONS: &str = "IZLY_PURSE_MAX_OPERATIONS";

/// Fixed configuration of a purse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurseConfig {
    /// Highest balance the purse may hold (inclusive)
    pub limit: Amount,
    /// Successful fund movements allowed over the purse lifetime.
    /// `None` means unlimited.
    #[serde(default)]
    pub max_operations: Option<u32>,
}

impl PurseConfig {
    /// Configuration with a limit and no operation lifetime
    pub fn new(limit: Amount) -> Self {
        Self {
            limit,
            max_operations: None,
        }
    }

    /// Cap the number of successful fund movements
    pub fn with_max_operations(mut self, max_operations: u32) -> Self {
        self.max_operations = Some(max_operations);
        self
    }

    /// Create configuration from environment variables.
    /// [`ENV_LIMIT`] is required.
    pub fn from_env() -> PurseResult<Self> {
        let raw = std::env::var(ENV_LIMIT)
            .map_err(|_| PurseError::Config(format!("{} must be set", ENV_LIMIT)))?;
        let limit = parse_u64(ENV_LIMIT, &raw)?;

        let mut config = Self::new(Amount::new(limit));
        if let Ok(raw) = std::env::var(ENV_MAX_OPERATIONS) {
            let max = parse_u64(ENV_MAX_OPERATIONS, &raw)?;
            let max = u32::try_from(max).map_err(|_| {
                PurseError::Config(format!("{} is out of range: {}", ENV_MAX_OPERATIONS, max))
            })?;
            config.max_operations = Some(max);
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.limit.is_zero() {
            errors.push("limit must be positive".to_string());
        }
        if self.max_operations == Some(0) {
            errors.push("max_operations must be at least 1 when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_u64(key: &str, raw: &str) -> PurseResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| PurseError::Config(format!("{} must be an unsigned integer, got '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = PurseConfig::new(Amount::from_major(300)).with_max_operations(10);
        assert_eq!(config.limit, Amount::from_major(300));
        assert_eq!(config.max_operations, Some(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = PurseConfig {
            limit: Amount::zero(),
            max_operations: Some(0),
        };
        assert_eq!(config.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_deserialize_defaults_lifetime() {
        let config: PurseConfig = serde_json::from_str(r#"{"limit": 30000}"#).unwrap();
        assert_eq!(config.limit, Amount::from_major(300));
        assert_eq!(config.max_operations, None);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_LIMIT, "21000");
        std::env::set_var(ENV_MAX_OPERATIONS, "10");
        let config = PurseConfig::from_env().unwrap();
        assert_eq!(config.limit, Amount::from_major(210));
        assert_eq!(config.max_operations, Some(10));

        std::env::set_var(ENV_MAX_OPERATIONS, "99999999999");
        assert!(matches!(PurseConfig::from_env(), Err(PurseError::Config(_))));

        std::env::remove_var(ENV_LIMIT);
        std::env::remove_var(ENV_MAX_OPERATIONS);
        assert!(matches!(PurseConfig::from_env(), Err(PurseError::Config(_))));
    }

    #[test]
    fn test_parse_u64_rejects_garbage() {
        assert_eq!(parse_u64("KEY", " 42 ").unwrap(), 42);
        assert!(matches!(parse_u64("KEY", "-1"), Err(PurseError::Config(_))));
    }
}
