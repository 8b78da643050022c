//! Team aggregate - an ordered, identity-keyed roster of characters
//!
//! # Membership rules
//!
//! | Operation | Not a character | Already a member | Not a member |
//! |-----------|-----------------|------------------|--------------|
//! | `add`     | `NotACharacter` | `Duplicate`      | appended     |
//! | `add_all` | skipped         | skipped          | appended     |
//! | `remove`  | `NotACharacter` | removed          | `NotFound`   |
//!
//! `add` is strict while `add_all` is permissive; callers rely on both.
//!
//! # Iteration
//!
//! [`Team::iter`] captures a snapshot of the members at the moment it is
//! called. The returned [`TeamIter`] owns that snapshot and does not borrow the
//! team, so the team can be changed while the iterator is alive without
//! affecting what it yields.

use std::iter::FusedIterator;

use crate::aggregates::{Candidate, CharacterRef, MemberSet};
use crate::error::DomainError;
use crate::events::{BulkAddOutcome, MembershipChange};
use crate::ids::TeamId;
use crate::types::CharacterType;

/// A team of characters
///
/// # Example
///
/// ```
/// use roster_domain::aggregates::{Character, CharacterRef, Team};
///
/// let reece = CharacterRef::new(Character::create("Reece", "Bowman").unwrap());
/// let noah = CharacterRef::new(Character::create("Noah", "Magician").unwrap());
///
/// let mut team = Team::new();
/// team.add(&reece).unwrap();
/// team.add_all([&noah, &reece]);
///
/// let names: Vec<String> = team.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["Reece", "Noah"]);
/// assert!(team.add(&reece).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Team {
    id: TeamId,
    members: MemberSet,
}

impl Team {
    /// Create an empty team.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Read-only view of the live member set.
    ///
    /// The view reflects every later change to the team, but offers no way to
    /// mutate it; all changes go through the team's own operations.
    #[inline]
    pub fn members(&self) -> &MemberSet {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, character: &CharacterRef) -> bool {
        self.members.contains(character)
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Add a single character.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotACharacter` if the candidate is not a character
    /// - `DomainError::Duplicate` if the character is already a member
    pub fn add(&mut self, candidate: impl Into<Candidate>) -> Result<MembershipChange, DomainError> {
        let character = candidate.into().into_character()?;
        let id = character.id();
        if !self.members.insert(character) {
            return Err(DomainError::duplicate("Character", id.to_string()));
        }
        tracing::debug!(team_id = %self.id, character_id = %id, "Character added to team");
        Ok(MembershipChange::Added { id })
    }

    /// Add every candidate that is a character and not yet a member.
    ///
    /// Anything else is skipped without error, including repeats within the
    /// same call.
    pub fn add_all<I>(&mut self, candidates: I) -> BulkAddOutcome
    where
        I: IntoIterator,
        I::Item: Into<Candidate>,
    {
        let mut outcome = BulkAddOutcome::default();
        for candidate in candidates {
            match candidate.into() {
                Candidate::Character(character) => {
                    let id = character.id();
                    if self.members.insert(character) {
                        outcome.added += 1;
                    } else {
                        tracing::debug!(team_id = %self.id, character_id = %id, "Skipping duplicate member");
                        outcome.skipped_duplicates += 1;
                    }
                }
                Candidate::Other(value) => {
                    tracing::debug!(team_id = %self.id, %value, "Skipping non-character candidate");
                    outcome.skipped_invalid += 1;
                }
            }
        }
        tracing::trace!(team_id = %self.id, ?outcome, "Bulk add finished");
        outcome
    }

    /// Remove a single character.
    ///
    /// The character itself is left untouched; only the team's reference is
    /// dropped.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotACharacter` if the candidate is not a character
    /// - `DomainError::NotFound` if the character is not a member
    pub fn remove(&mut self, candidate: impl Into<Candidate>) -> Result<MembershipChange, DomainError> {
        let character = candidate.into().into_character()?;
        let id = character.id();
        self.members
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Character", id.to_string()))?;
        tracing::debug!(team_id = %self.id, character_id = %id, "Character removed from team");
        Ok(MembershipChange::Removed { id })
    }

    /// Remove every member.
    pub fn clear(&mut self) -> MembershipChange {
        let removed = self.members.clear();
        tracing::debug!(team_id = %self.id, removed, "Team cleared");
        MembershipChange::Cleared { removed }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Members in insertion order, as a new vector independent of the team.
    pub fn to_vec(&self) -> Vec<CharacterRef> {
        self.members.as_slice().to_vec()
    }

    /// Snapshot iterator over the current members.
    pub fn iter(&self) -> TeamIter {
        TeamIter {
            snapshot: self.to_vec().into_iter(),
        }
    }

    /// Members of the given type, in insertion order.
    pub fn of_type(&self, kind: CharacterType) -> Vec<CharacterRef> {
        self.iter().filter(|member| member.kind() == kind).collect()
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = CharacterRef;
    type IntoIter = TeamIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a snapshot of a team's members.
#[derive(Debug, Clone)]
pub struct TeamIter {
    snapshot: std::vec::IntoIter<CharacterRef>,
}

impl Iterator for TeamIter {
    type Item = CharacterRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.snapshot.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshot.size_hint()
    }
}

impl ExactSizeIterator for TeamIter {}

impl FusedIterator for TeamIter {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::Character;
    use serde_json::{json, Value};

    fn character(name: &str, kind: &str) -> CharacterRef {
        CharacterRef::new(Character::create(name, kind).unwrap())
    }

    fn incorrect_data() -> Vec<Value> {
        vec![
            json!({}),
            json!(123),
            json!("test"),
            json!(null),
            json!(true),
            json!(false),
            json!([]),
        ]
    }

    fn set_of(members: &[&CharacterRef]) -> MemberSet {
        members.iter().map(|m| (*m).clone()).collect()
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_team_is_empty() {
            let team = Team::new();
            assert!(team.is_empty());
            assert_eq!(team.len(), 0);
            assert!(team.to_vec().is_empty());
            assert_eq!(*team.members(), MemberSet::new());
        }

        #[test]
        fn teams_get_distinct_ids() {
            assert_ne!(Team::new().id(), Team::new().id());
        }
    }

    mod add {
        use super::*;

        #[test]
        fn adds_character() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();

            let change = team.add(&a).unwrap();

            assert_eq!(change, MembershipChange::Added { id: a.id() });
            assert_eq!(*team.members(), set_of(&[&a]));
        }

        #[test]
        fn duplicate_is_rejected_and_team_unchanged() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();
            team.add(&a).unwrap();

            let err = team.add(&a).unwrap_err();

            assert!(matches!(err, DomainError::Duplicate { .. }));
            assert!(err.to_string().contains("already a member"));
            assert_eq!(*team.members(), set_of(&[&a]));
        }

        #[test]
        fn same_name_and_type_are_distinct_members() {
            let a = character("Twin", "Demon");
            let b = character("Twin", "Demon");
            let mut team = Team::new();

            team.add(&a).unwrap();
            team.add(&b).unwrap();

            assert_eq!(team.len(), 2);
        }

        #[test]
        fn non_characters_are_rejected() {
            let mut team = Team::new();
            for data in incorrect_data() {
                let err = team.add(data).unwrap_err();
                assert!(matches!(err, DomainError::NotACharacter { .. }));
                assert!(err.to_string().starts_with("Expected a Character"));
            }
            assert!(team.is_empty());
        }

        #[test]
        fn missing_argument_is_rejected() {
            let mut team = Team::new();
            let err = team.add(None::<CharacterRef>).unwrap_err();
            assert_eq!(err, DomainError::NotACharacter { found: "null" });
        }
    }

    mod add_all {
        use super::*;

        #[test]
        fn adds_unique_characters() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();

            let outcome = team.add_all([&a, &b]);

            assert_eq!(outcome.added, 2);
            assert_eq!(*team.members(), set_of(&[&a, &b]));
        }

        #[test]
        fn skips_non_characters_silently() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();

            let outcome = team.add_all([
                Candidate::from(&a),
                Candidate::from(&b),
                json!({}).into(),
                json!(123).into(),
                json!("test").into(),
            ]);

            assert_eq!(
                outcome,
                BulkAddOutcome {
                    added: 2,
                    skipped_invalid: 3,
                    skipped_duplicates: 0
                }
            );
            assert_eq!(*team.members(), set_of(&[&a, &b]));
        }

        #[test]
        fn only_non_characters_alongside_one_character() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();

            team.add_all([Candidate::from(&a), json!({}).into(), json!(123).into()]);

            assert_eq!(*team.members(), set_of(&[&a]));
        }

        #[test]
        fn skips_duplicates_silently() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();

            let outcome = team.add_all([&a, &b, &a]);

            assert_eq!(outcome.skipped_duplicates, 1);
            assert_eq!(team.to_vec(), vec![a.clone(), b.clone()]);
        }

        #[test]
        fn skips_existing_members() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();
            team.add(&a).unwrap();

            let outcome = team.add_all([&a]);

            assert_eq!(outcome.added, 0);
            assert_eq!(team.len(), 1);
        }

        #[test]
        fn nothing_to_add_leaves_team_empty() {
            let mut team = Team::new();
            let outcome = team.add_all(Vec::<CharacterRef>::new());
            assert_eq!(outcome, BulkAddOutcome::default());
            assert!(team.to_vec().is_empty());
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn removes_character() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();
            team.add_all([&a, &b]);

            let change = team.remove(&a).unwrap();

            assert_eq!(change, MembershipChange::Removed { id: a.id() });
            assert_eq!(*team.members(), set_of(&[&b]));
        }

        #[test]
        fn removal_does_not_touch_the_character() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();
            team.add(&a).unwrap();

            team.remove(&a).unwrap();

            assert_eq!(a.name(), "Лучник");
            assert_eq!(a.borrow().health(), 100);
        }

        #[test]
        fn absent_character_is_not_found_and_team_unchanged() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();
            team.add(&b).unwrap();

            let err = team.remove(&a).unwrap_err();

            assert!(matches!(err, DomainError::NotFound { .. }));
            assert!(err.to_string().contains(&a.id().to_string()));
            assert_eq!(*team.members(), set_of(&[&b]));
        }

        #[test]
        fn non_characters_are_rejected() {
            let a = character("Лучник", "Bowman");
            let mut team = Team::new();
            team.add(&a).unwrap();

            for data in incorrect_data() {
                let err = team.remove(data).unwrap_err();
                assert!(matches!(err, DomainError::NotACharacter { .. }));
            }
            assert_eq!(team.len(), 1);
        }
    }

    mod views {
        use super::*;

        #[test]
        fn to_vec_keeps_insertion_order() {
            let a = character("Aa", "Bowman");
            let b = character("Bb", "Demon");
            let c = character("Cc", "Magician");
            let mut team = Team::new();
            team.add(&c).unwrap();
            team.add_all([&a, &b]);

            assert_eq!(team.to_vec(), vec![c.clone(), a.clone(), b.clone()]);
        }

        #[test]
        fn to_vec_is_independent_of_the_team() {
            let a = character("Aa", "Bowman");
            let b = character("Bb", "Demon");
            let mut team = Team::new();
            team.add(&a).unwrap();

            let mut sequence = team.to_vec();
            sequence.push(b.clone());
            team.clear();

            assert_eq!(sequence.len(), 2);
            assert!(team.is_empty());
        }

        #[test]
        fn members_view_is_live() {
            let a = character("Aa", "Bowman");
            let mut team = Team::new();
            team.add(&a).unwrap();
            assert!(team.members().contains(&a));

            team.remove(&a).unwrap();
            assert!(!team.members().contains(&a));
        }

        #[test]
        fn clear_empties_populated_team() {
            let mut team = Team::new();
            team.add_all([character("Aa", "Bowman"), character("Bb", "Demon")]);

            let change = team.clear();

            assert_eq!(change, MembershipChange::Cleared { removed: 2 });
            assert!(team.to_vec().is_empty());
            assert_eq!(*team.members(), MemberSet::new());
        }

        #[test]
        fn clear_on_empty_team_is_fine() {
            let mut team = Team::new();
            assert_eq!(team.clear(), MembershipChange::Cleared { removed: 0 });
        }

        #[test]
        fn of_type_filters_in_order() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let c = character("Jakob", "Magician");
            let mut team = Team::new();
            team.add_all([&a, &b, &c]);

            assert_eq!(team.of_type(CharacterType::Magician), vec![c.clone()]);
            assert!(team.of_type(CharacterType::Zombie).is_empty());
        }
    }

    mod iteration {
        use super::*;

        fn five() -> Vec<CharacterRef> {
            vec![
                character("Лучник", "Bowman"),
                character("Демон", "Demon"),
                character("Jakob", "Magician"),
                character("Clara", "Demon"),
                character("Orlando", "Undead"),
            ]
        }

        #[test]
        fn steps_through_members_then_ends() {
            let a = character("Лучник", "Bowman");
            let b = character("Демон", "Demon");
            let mut team = Team::new();
            team.add_all([&a, &b]);

            let mut iter = team.iter();

            assert_eq!(iter.next(), Some(a.clone()));
            assert_eq!(iter.next(), Some(b.clone()));
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
        }

        #[test]
        fn for_loop_yields_every_member() {
            let characters = five();
            let mut team = Team::new();
            team.add_all(&characters);

            let mut members = Vec::new();
            for member in &team {
                members.push(member);
            }

            assert_eq!(members, characters);
        }

        #[test]
        fn fresh_iteration_reflects_each_addition() {
            let characters = five();
            let mut team = Team::new();
            let mut expected = Vec::new();

            for character in characters.iter().take(3) {
                team.add(character).unwrap();
                expected.push(character.clone());

                assert_eq!(team.iter().collect::<Vec<_>>(), expected);
            }
        }

        #[test]
        fn fresh_iteration_reflects_removal() {
            let characters = five();
            let mut team = Team::new();
            team.add_all(&characters);

            team.remove(&characters[0]).unwrap();

            assert_eq!(team.iter().collect::<Vec<_>>(), characters[1..].to_vec());
        }

        #[test]
        fn existing_iterator_keeps_its_snapshot() {
            let characters = five();
            let mut team = Team::new();
            team.add_all(&characters[..3]);

            let iter = team.iter();
            team.remove(&characters[1]).unwrap();
            team.add(&characters[4]).unwrap();

            assert_eq!(iter.len(), 3);
            assert_eq!(iter.collect::<Vec<_>>(), characters[..3].to_vec());
            assert_eq!(team.iter().len(), 3);
        }

        #[test]
        fn filter_by_type_through_iteration() {
            let characters = five();
            let mut team = Team::new();
            team.add_all(&characters[..3]);

            let magicians: Vec<_> = team
                .iter()
                .filter(|member| member.kind() == CharacterType::Magician)
                .collect();

            assert_eq!(magicians, vec![characters[2].clone()]);
        }

        #[test]
        fn empty_team_ends_immediately() {
            let team = Team::new();
            let mut iter = team.iter();
            assert_eq!(iter.next(), None);
            assert_eq!(team.iter().count(), 0);
        }
    }

    #[test]
    fn end_to_end_roster_flow() {
        let reece = character("Reece", "Bowman");
        let liam = character("Liam", "Swordsman");
        let noah = character("Noah", "Magician");
        let mut team = Team::new();

        team.add(&reece).unwrap();
        team.add_all([&liam, &noah]);
        assert_eq!(team.to_vec(), vec![reece.clone(), liam.clone(), noah.clone()]);

        team.remove(&liam).unwrap();
        assert_eq!(team.to_vec(), vec![reece.clone(), noah.clone()]);

        assert_eq!(team.of_type(CharacterType::Magician), vec![noah.clone()]);

        team.clear();
        assert!(team.to_vec().is_empty());
    }
}
