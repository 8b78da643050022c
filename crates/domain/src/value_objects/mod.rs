//! Value objects - validated, immutable building blocks for aggregates

mod attributes;
mod names;

pub use attributes::{AttributeUpdate, ATTRIBUTE_KEYS};
pub use names::{CharacterName, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
