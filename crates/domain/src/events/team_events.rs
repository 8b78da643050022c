//! Team membership events

use crate::ids::CharacterId;

/// Outcome of a successful single-member team operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipChange {
    Added { id: CharacterId },
    Removed { id: CharacterId },
    /// All members dropped; `removed` may be zero.
    Cleared { removed: usize },
}

/// Outcome of `Team::add_all`, which never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkAddOutcome {
    /// Characters appended to the team
    pub added: usize,
    /// Candidates ignored because they were not characters
    pub skipped_invalid: usize,
    /// Characters ignored because they were already members
    pub skipped_duplicates: usize,
}
