//! Shared character handles and the identity-keyed member set
//!
//! A team holds *references* to characters, not the characters themselves.
//! [`CharacterRef`] is that reference: cloning it clones the handle, and two
//! handles compare equal only when they point at the same entity. Two
//! characters with identical name and type are still different members.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::aggregates::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::types::CharacterType;

// ============================================================================
// CharacterRef
// ============================================================================

/// A shared, mutable handle to a [`Character`].
///
/// # Example
///
/// ```
/// use roster_domain::aggregates::{Character, CharacterRef};
/// use serde_json::json;
///
/// let reece = CharacterRef::new(Character::create("Reece", "Bowman").unwrap());
/// let alias = reece.clone();
///
/// alias.borrow_mut().update_attributes(&json!({ "level": 2 })).unwrap();
/// assert_eq!(reece.borrow().level(), 2);
/// assert_eq!(reece, alias);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterRef {
    // Cached so identity checks never need to borrow the cell.
    id: CharacterId,
    inner: Rc<RefCell<Character>>,
}

impl CharacterRef {
    pub fn new(character: Character) -> Self {
        Self {
            id: character.id(),
            inner: Rc::new(RefCell::new(character)),
        }
    }

    /// The identity key of the referenced character.
    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// Immutably borrow the character.
    ///
    /// # Panics
    ///
    /// Panics if the character is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, Character> {
        self.inner.borrow()
    }

    /// Mutably borrow the character.
    ///
    /// # Panics
    ///
    /// Panics if the character is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, Character> {
        self.inner.borrow_mut()
    }

    pub fn kind(&self) -> CharacterType {
        self.inner.borrow().kind()
    }

    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }
}

impl PartialEq for CharacterRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for CharacterRef {}

impl Hash for CharacterRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<Character> for CharacterRef {
    fn from(character: Character) -> Self {
        Self::new(character)
    }
}

impl Serialize for CharacterRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.borrow().serialize(serializer)
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// A value offered to a team operation.
///
/// Team operations accept anything convertible into a `Candidate`, so callers
/// holding loosely-typed data (JSON payloads, optional handles) can pass it
/// straight through. Only the `Character` variant can ever become a member.
#[derive(Debug, Clone)]
pub enum Candidate {
    Character(CharacterRef),
    Other(Value),
}

impl Candidate {
    /// Resolve to a character handle or a wrong-kind error.
    pub fn into_character(self) -> Result<CharacterRef, DomainError> {
        match self {
            Candidate::Character(character) => Ok(character),
            Candidate::Other(value) => Err(DomainError::not_a_character(&value)),
        }
    }
}

impl From<CharacterRef> for Candidate {
    fn from(character: CharacterRef) -> Self {
        Candidate::Character(character)
    }
}

impl From<&CharacterRef> for Candidate {
    fn from(character: &CharacterRef) -> Self {
        Candidate::Character(character.clone())
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        Candidate::Other(value)
    }
}

/// A missing handle is treated like `null`.
impl From<Option<CharacterRef>> for Candidate {
    fn from(character: Option<CharacterRef>) -> Self {
        character.map_or(Candidate::Other(Value::Null), Candidate::Character)
    }
}

// ============================================================================
// MemberSet
// ============================================================================

/// Insertion-ordered set of character handles, keyed by identity.
///
/// Only the crate can mutate a `MemberSet` that belongs to a team;
/// `Team::members` hands out a shared reference to the live set.
/// Equality is set equality: order is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemberSet {
    order: Vec<CharacterRef>,
    index: HashSet<CharacterId>,
}

impl MemberSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, character: &CharacterRef) -> bool {
        self.index.contains(&character.id())
    }

    pub fn contains_id(&self, id: CharacterId) -> bool {
        self.index.contains(&id)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRef> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[CharacterRef] {
        &self.order
    }

    /// Returns false (and leaves the set untouched) if already present.
    pub(crate) fn insert(&mut self, character: CharacterRef) -> bool {
        if !self.index.insert(character.id()) {
            return false;
        }
        self.order.push(character);
        true
    }

    pub(crate) fn remove(&mut self, id: CharacterId) -> Option<CharacterRef> {
        if !self.index.remove(&id) {
            return None;
        }
        let position = self.order.iter().position(|member| member.id() == id)?;
        Some(self.order.remove(position))
    }

    /// Drops every member and returns how many there were.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.order.clear();
        self.index.clear();
        removed
    }
}

impl PartialEq for MemberSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for MemberSet {}

/// Builds a standalone set, e.g. an expected value in a comparison.
impl FromIterator<CharacterRef> for MemberSet {
    fn from_iter<I: IntoIterator<Item = CharacterRef>>(iter: I) -> Self {
        let mut set = Self::new();
        for character in iter {
            set.insert(character);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MemberSet {
    type Item = &'a CharacterRef;
    type IntoIter = std::slice::Iter<'a, CharacterRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
