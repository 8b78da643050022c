//! Roster domain model
//!
//! Characters with validated identity and combat attributes, and teams that
//! hold references to them with identity-based uniqueness.
//!
//! ```
//! use roster_domain::{Character, CharacterRef, CharacterType, Team};
//!
//! let mut team = Team::new();
//! team.add(CharacterRef::new(Character::create("Reece", "Bowman")?))?;
//! team.add_all([
//!     CharacterRef::new(Character::create("Liam", "Swordsman")?),
//!     CharacterRef::new(Character::create("Noah", "Magician")?),
//! ]);
//!
//! let magicians = team.of_type(CharacterType::Magician);
//! assert_eq!(magicians[0].name(), "Noah");
//! # Ok::<(), roster_domain::DomainError>(())
//! ```

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::{Candidate, Character, CharacterRef, MemberSet, Team, TeamIter};
pub use error::DomainError;
pub use events::{BulkAddOutcome, CharacterUpdate, MembershipChange};
pub use ids::{CharacterId, TeamId};
pub use types::CharacterType;
pub use value_objects::{AttributeUpdate, CharacterName, ATTRIBUTE_KEYS};
