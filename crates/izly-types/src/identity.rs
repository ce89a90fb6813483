//! Identity types
//!
//! Strongly typed wrappers around UUIDs so identifiers of different
//! entities cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a purse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurseId(pub Uuid);

impl PurseId {
    const PREFIX: &'static str = "purse";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from a string, with or without the `purse_` prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PurseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PurseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

impl From<Uuid> for PurseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(PurseId::new(), PurseId::new());
    }

    #[test]
    fn test_parse_accepts_prefixed_and_bare() {
        let id = PurseId::new();
        assert_eq!(PurseId::parse(&id.to_string()).unwrap(), id);
        assert_eq!(PurseId::parse(&id.0.to_string()).unwrap(), id);
        assert!(PurseId::parse("purse_not-a-uuid").is_err());
    }
}
