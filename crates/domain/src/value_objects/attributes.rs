//! Partial attribute updates for characters
//!
//! An [`AttributeUpdate`] is a fully validated patch: every field it carries
//! already satisfies the character invariants, so applying it cannot fail
//! half-way. Loosely-typed patches (JSON objects) are converted with
//! `AttributeUpdate::try_from(&Value)`, which rejects the whole patch before
//! anything is mutated.

use serde_json::{Map, Value};

use crate::error::{json_kind, DomainError};
use crate::types::CharacterType;
use crate::value_objects::CharacterName;

/// Keys accepted in an attribute patch
pub const ATTRIBUTE_KEYS: [&str; 6] = ["name", "type", "health", "level", "attack", "defense"];

/// A validated, partial set of character attribute changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeUpdate {
    pub(crate) name: Option<CharacterName>,
    pub(crate) kind: Option<CharacterType>,
    pub(crate) health: Option<i32>,
    pub(crate) level: Option<i32>,
    pub(crate) attack: Option<i32>,
    pub(crate) defense: Option<i32>,
}

impl AttributeUpdate {
    /// An empty update; applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: CharacterName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_kind(mut self, kind: CharacterType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Returns true if the update carries no fields.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns true if the update touches name or type.
    pub fn touches_identity(&self) -> bool {
        self.name.is_some() || self.kind.is_some()
    }
}

impl TryFrom<&Value> for AttributeUpdate {
    type Error = DomainError;

    /// Parse a JSON patch such as `{"health": 50, "type": "Bowman"}`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The value is not an object
    /// - Any key is not one of [`ATTRIBUTE_KEYS`]
    /// - `name` or `type` violate the construction rules
    /// - A numeric attribute is not an integer within `i32` range
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(attrs) = value else {
            return Err(DomainError::validation(format!(
                "Attributes must be an object, got {}",
                json_kind(value)
            )));
        };

        if let Some(key) = attrs.keys().find(|k| !ATTRIBUTE_KEYS.contains(&k.as_str())) {
            return Err(DomainError::validation(format!(
                "Invalid character attributes: unknown key '{key}'"
            )));
        }

        Ok(Self {
            name: attrs.get("name").map(CharacterName::try_from).transpose()?,
            kind: attrs.get("type").map(CharacterType::try_from).transpose()?,
            health: integer_attribute(attrs, "health")?,
            level: integer_attribute(attrs, "level")?,
            attack: integer_attribute(attrs, "attack")?,
            defense: integer_attribute(attrs, "defense")?,
        })
    }
}

fn integer_attribute(attrs: &Map<String, Value>, key: &str) -> Result<Option<i32>, DomainError> {
    let Some(value) = attrs.get(key) else {
        return Ok(None);
    };
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| DomainError::validation(format!("Attribute '{key}' must be an integer")))
}
