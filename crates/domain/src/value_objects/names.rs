//! Validated name newtype for roster characters
//!
//! A `CharacterName` is valid by construction: 2 to 10 characters inclusive.
//! Length is counted in Unicode scalar values so that "Максимилиан" (11
//! letters) is rejected while "Робин" (5 letters) is accepted. Names are stored
//! exactly as given; no trimming is applied.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::DomainError;

/// Minimum length for a character name
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length for a character name
pub const MAX_NAME_LENGTH: usize = 10;

pub(crate) const INVALID_NAME_MESSAGE: &str = "Name must be a string of 2 to 10 characters";

/// A validated character name (2..=10 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is shorter than 2 or
    /// longer than 10 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let len = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
            return Err(DomainError::validation(INVALID_NAME_MESSAGE));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CharacterName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

/// Non-string JSON values are rejected with the same message as a bad length.
impl TryFrom<&Value> for CharacterName {
    type Error = DomainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Self::new(s.as_str()),
            _ => Err(DomainError::validation(INVALID_NAME_MESSAGE)),
        }
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}
