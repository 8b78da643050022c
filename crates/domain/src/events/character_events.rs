//! Character-related domain events
//!
//! These enums communicate what changed when character attributes were
//! updated, allowing callers to react appropriately.

use crate::types::CharacterType;
use crate::value_objects::CharacterName;

/// A single attribute change produced by `Character::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterUpdate {
    NameChanged { from: CharacterName, to: CharacterName },
    TypeChanged { from: CharacterType, to: CharacterType },
    HealthChanged { from: i32, to: i32 },
    LevelChanged { from: i32, to: i32 },
    AttackChanged { from: i32, to: i32 },
    DefenseChanged { from: i32, to: i32 },
}
