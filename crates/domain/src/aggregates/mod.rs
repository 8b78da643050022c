//! Aggregate roots - domain objects that guard their own invariants
//!
//! Each aggregate:
//! - Has a unique identity
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! | Aggregate | Identity | Guards |
//! |-----------|----------|--------|
//! | `Character` | `CharacterId` | name length, type membership |
//! | `Team` | `TeamId` | no duplicate references, characters only |

pub mod character;
pub mod member;
pub mod team;

pub use character::Character;
pub use member::{Candidate, CharacterRef, MemberSet};
pub use team::{Team, TeamIter};
