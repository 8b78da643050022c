//! Character type enumeration
//!
//! The fixed set of classes a roster character can belong to.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Message reported for any type outside the fixed set.
pub(crate) const INVALID_TYPE_MESSAGE: &str = "Invalid character type";

/// Character type - the class a character plays as
///
/// Matching is exact and case-sensitive: `"Bowman"` is valid, `"bowman"` and
/// `"Archer"` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterType {
    Bowman,
    Swordsman,
    Magician,
    Demon,
    Undead,
    Zombie,
}

impl CharacterType {
    /// All character types, in declaration order
    pub fn all() -> &'static [CharacterType] {
        &[
            CharacterType::Bowman,
            CharacterType::Swordsman,
            CharacterType::Magician,
            CharacterType::Demon,
            CharacterType::Undead,
            CharacterType::Zombie,
        ]
    }

    /// Get the canonical name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterType::Bowman => "Bowman",
            CharacterType::Swordsman => "Swordsman",
            CharacterType::Magician => "Magician",
            CharacterType::Demon => "Demon",
            CharacterType::Undead => "Undead",
            CharacterType::Zombie => "Zombie",
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CharacterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::validation(INVALID_TYPE_MESSAGE))
    }
}

impl TryFrom<&Value> for CharacterType {
    type Error = DomainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => s.parse(),
            _ => Err(DomainError::validation(INVALID_TYPE_MESSAGE)),
        }
    }
}
