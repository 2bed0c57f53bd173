//! Identifier newtypes
//!
//! Expense and user ids are both UUIDs; wrapping them keeps one from being
//! passed where the other is expected. Each id prints in a short form
//! (`exp-1a2b3c4d`) that the CLI also accepts back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// A fresh random (v4) id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a bare UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            /// Whether `s` is this id's short form or a UUID prefix of at
            /// least 8 characters, ignoring case
            pub fn matches_short(&self, s: &str) -> bool {
                let s = s.trim().to_lowercase();
                let s = s.strip_prefix($display_prefix).unwrap_or(&s);
                s.len() >= 8 && self.0.to_string().starts_with(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let full = self.0.simple().to_string();
                write!(f, "{}{}", $display_prefix, &full[..8])
            }
        }

        /// Accepts a bare or prefixed full UUID
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::parse(s.strip_prefix($display_prefix).unwrap_or(s))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(UserId, "usr-");
