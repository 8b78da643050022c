//! Shared vocabulary types
//!
//! Simple enumerations used across the roster model.

mod character_type;
pub use character_type::CharacterType;
