//! Domain events - outcome values returned from aggregate mutations

mod character_events;
mod team_events;

pub use character_events::CharacterUpdate;
pub use team_events::{BulkAddOutcome, MembershipChange};
