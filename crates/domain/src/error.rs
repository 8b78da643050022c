//! Unified error types for the domain layer
//!
//! Every roster operation reports failure through [`DomainError`]. Callers can
//! match on the variant to tell validation problems apart from membership
//! precondition violations.

use serde_json::Value;
use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A team operation was handed something that is not a character
    #[error("Expected a Character, got {found}")]
    NotACharacter { found: &'static str },

    /// Entity is already a member of the collection
    #[error("{entity_type} {id} is already a member")]
    Duplicate {
        entity_type: &'static str,
        id: String,
    },

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value cannot be accepted as-is:
    /// - Names outside the allowed length
    /// - Unknown character types
    /// - Malformed attribute updates
    ///
    /// # Example
    /// ```
    /// use roster_domain::DomainError;
    ///
    /// let err = DomainError::validation("Invalid character type");
    /// assert_eq!(err.to_string(), "Validation failed: Invalid character type");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a wrong-kind error, describing what was received instead.
    pub fn not_a_character(found: &Value) -> Self {
        Self::NotACharacter {
            found: json_kind(found),
        }
    }

    /// Create a duplicate membership error
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Name of the JSON kind of `value`, as reported in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
