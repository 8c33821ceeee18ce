//! Typed identifiers for ledger entities
//!
//! Each id wraps a UUID v4 and serializes as the bare UUID string. On the
//! terminal it shows as a prefixed short form (`cat-1a2b3c4d`), which the
//! CLI also accepts back when looking entities up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shortest UUID prefix accepted as a lookup key
const MIN_SHORT_LEN: usize = 4;

/// Length of the UUID prefix shown by `Display`
const SHORT_LEN: usize = 8;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Display prefix, e.g. `cat-`
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Prefixed short form shown in tables
            pub fn short(&self) -> String {
                let uuid = self.0.to_string();
                format!("{}{}", Self::PREFIX, &uuid[..SHORT_LEN])
            }

            /// Whether `key` (with or without the prefix) starts this id's UUID
            pub fn matches_short(&self, key: &str) -> bool {
                let key = key.trim();
                let key = key.strip_prefix(Self::PREFIX).unwrap_or(key);
                key.len() >= MIN_SHORT_LEN && self.0.to_string().starts_with(&key.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        /// Parses a full UUID, optionally carrying the display prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifies a spending category
    CategoryId,
    "cat-"
);
entity_id!(
    /// Identifies one recorded income entry
    IncomeId,
    "inc-"
);
entity_id!(
    /// Identifies a saving goal
    SavingGoalId,
    "goal-"
);
entity_id!(
    /// Identifies a deposit into a saving goal
    DepositId,
    "dep-"
);
