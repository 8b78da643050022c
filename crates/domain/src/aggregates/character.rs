//! Character aggregate - a roster entry with validated identity and combat stats
//!
//! # Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName` and `CharacterType` are valid by construction
//! - **Identity**: every character gets a fresh `CharacterId`; the type is
//!   intentionally not `Clone`, so one id always names one entity
//! - **Domain events**: `apply` returns the list of `CharacterUpdate`s

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::DomainError;
use crate::events::CharacterUpdate;
use crate::ids::CharacterId;
use crate::types::CharacterType;
use crate::value_objects::{AttributeUpdate, CharacterName};

/// A character in the roster
///
/// # Invariants
///
/// - `name` is always 2..=10 characters (enforced by `CharacterName`)
/// - `kind` is always one of the six `CharacterType`s
///
/// # Example
///
/// ```
/// use roster_domain::aggregates::Character;
/// use roster_domain::types::CharacterType;
///
/// let character = Character::create("Reece", "Bowman").unwrap();
///
/// assert_eq!(character.name().as_str(), "Reece");
/// assert_eq!(character.kind(), CharacterType::Bowman);
/// assert_eq!(character.health(), 100);
/// assert_eq!(character.level(), 1);
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    #[serde(rename = "type")]
    kind: CharacterType,
    health: i32,
    level: i32,
    attack: i32,
    defense: i32,
}

impl Character {
    pub const DEFAULT_HEALTH: i32 = 100;
    pub const DEFAULT_LEVEL: i32 = 1;
    pub const DEFAULT_ATTACK: i32 = 0;
    pub const DEFAULT_DEFENSE: i32 = 0;

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new character from pre-validated parts with default stats.
    pub fn new(name: CharacterName, kind: CharacterType) -> Self {
        Self {
            id: CharacterId::new(),
            name,
            kind,
            health: Self::DEFAULT_HEALTH,
            level: Self::DEFAULT_LEVEL,
            attack: Self::DEFAULT_ATTACK,
            defense: Self::DEFAULT_DEFENSE,
        }
    }

    /// Create a character from raw strings.
    ///
    /// The name is checked before the type, so a call where both are invalid
    /// reports the name error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is not 2..=10 characters
    /// or the type is not a known `CharacterType`.
    pub fn create(name: &str, kind: &str) -> Result<Self, DomainError> {
        let name = CharacterName::new(name)?;
        let kind: CharacterType = kind.parse()?;
        Ok(Self::new(name, kind))
    }

    /// Create a character from loosely-typed values.
    ///
    /// Non-string names fail with the name error and non-string types with the
    /// type error.
    pub fn from_values(name: &Value, kind: &Value) -> Result<Self, DomainError> {
        let name = CharacterName::try_from(name)?;
        let kind = CharacterType::try_from(kind)?;
        Ok(Self::new(name, kind))
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> CharacterType {
        self.kind
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    #[inline]
    pub fn defense(&self) -> i32 {
        self.defense
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Update attributes from a JSON patch.
    ///
    /// The patch is fully validated before anything is written, so on error
    /// the character is left exactly as it was.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_domain::aggregates::Character;
    /// use serde_json::json;
    ///
    /// let mut character = Character::create("Robin", "Swordsman").unwrap();
    /// character.update_attributes(&json!({ "health": 50, "level": 4 })).unwrap();
    /// assert_eq!(character.health(), 50);
    ///
    /// assert!(character.update_attributes(&json!({ "mana": 3 })).is_err());
    /// assert_eq!(character.level(), 4);
    /// ```
    pub fn update_attributes(&mut self, attrs: &Value) -> Result<Vec<CharacterUpdate>, DomainError> {
        let update = AttributeUpdate::try_from(attrs)?;
        Ok(self.apply(update))
    }

    /// Apply a validated update, returning one event per field that changed.
    pub fn apply(&mut self, update: AttributeUpdate) -> Vec<CharacterUpdate> {
        let mut changes = Vec::new();

        if let Some(name) = update.name.filter(|name| *name != self.name) {
            let from = std::mem::replace(&mut self.name, name);
            changes.push(CharacterUpdate::NameChanged {
                from,
                to: self.name.clone(),
            });
        }
        if let Some(kind) = update.kind.filter(|kind| *kind != self.kind) {
            changes.push(CharacterUpdate::TypeChanged {
                from: self.kind,
                to: kind,
            });
            self.kind = kind;
        }
        if let Some((from, to)) = set_stat(&mut self.health, update.health) {
            changes.push(CharacterUpdate::HealthChanged { from, to });
        }
        if let Some((from, to)) = set_stat(&mut self.level, update.level) {
            changes.push(CharacterUpdate::LevelChanged { from, to });
        }
        if let Some((from, to)) = set_stat(&mut self.attack, update.attack) {
            changes.push(CharacterUpdate::AttackChanged { from, to });
        }
        if let Some((from, to)) = set_stat(&mut self.defense, update.defense) {
            changes.push(CharacterUpdate::DefenseChanged { from, to });
        }

        changes
    }
}

fn set_stat(slot: &mut i32, value: Option<i32>) -> Option<(i32, i32)> {
    let value = value.filter(|v| v != slot)?;
    Some((std::mem::replace(slot, value), value))
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

// ============================================================================
// Tests
// ============================================================================
