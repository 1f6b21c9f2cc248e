//! # Jurisdiction List
//!
//! A fixed-capacity, insertion-ordered set of [`JurisdictionId`]s, most
//! authoritative first. This is the uniqueness and ordering backbone of
//! every resolution: candidates, overlaps, ancestors, and defaults all
//! append through [`JurisdictionList::push_unique`].
//!
//! ## Invariants
//!
//! - No duplicates.
//! - [`JurisdictionId::UNSET`] is never a member.
//! - Existing entries are never reordered or overwritten.
//! - A push beyond capacity is rejected with [`ListError::Full`].
//!
//! Storage is an inline array; the list never allocates. Membership is a
//! linear scan, which is the right trade at 16 entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListError;

pub use crate::identity::JurisdictionId;

/// Capacity of a [`JurisdictionList`].
pub const JURISDICTION_LIST_CAPACITY: usize = 16;

/// Ordered set of jurisdictions in force, most authoritative first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JurisdictionList {
    ids: [JurisdictionId; JURISDICTION_LIST_CAPACITY],
    count: usize,
}

impl JurisdictionList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            ids: [JurisdictionId::UNSET; JURISDICTION_LIST_CAPACITY],
            count: 0,
        }
    }

    /// Build a list from ids in order, skipping repeats.
    ///
    /// # Errors
    ///
    /// Fails on the first id that [`push_unique`](Self::push_unique) rejects.
    pub fn from_ids<I>(ids: I) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = JurisdictionId>,
    {
        let mut list = Self::new();
        for id in ids {
            list.push_unique(id)?;
        }
        Ok(list)
    }

    /// Append `id` unless it is already present.
    ///
    /// Pushing an id that is already a member is a successful no-op, even
    /// when the list is full.
    ///
    /// # Errors
    ///
    /// - [`ListError::Unset`] if `id` is [`JurisdictionId::UNSET`].
    /// - [`ListError::Full`] if `id` is new and the list is at capacity.
    pub fn push_unique(&mut self, id: JurisdictionId) -> Result<(), ListError> {
        if id.is_unset() {
            return Err(ListError::Unset);
        }
        if self.contains(id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(ListError::Full {
                capacity: JURISDICTION_LIST_CAPACITY,
            });
        }
        self.ids[self.count] = id;
        self.count += 1;
        Ok(())
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: JurisdictionId) -> bool {
        self.as_slice().iter().any(|&member| member == id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the list has no members.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether no further distinct id can be pushed.
    pub fn is_full(&self) -> bool {
        self.count == JURISDICTION_LIST_CAPACITY
    }

    /// Fixed capacity of every list.
    pub const fn capacity(&self) -> usize {
        JURISDICTION_LIST_CAPACITY
    }

    /// Members in insertion order.
    pub fn as_slice(&self) -> &[JurisdictionId] {
        &self.ids[..self.count]
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, JurisdictionId> {
        self.as_slice().iter()
    }

    /// The most authoritative member, if any.
    pub fn first(&self) -> Option<JurisdictionId> {
        self.as_slice().first().copied()
    }
}

impl Default for JurisdictionList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a JurisdictionList {
    type Item = &'a JurisdictionId;
    type IntoIter = std::slice::Iter<'a, JurisdictionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for JurisdictionList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

// -- Validating Deserialize for JurisdictionList ------------------------------

impl<'de> Deserialize<'de> for JurisdictionList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<JurisdictionId>::deserialize(deserializer)?;
        let mut list = Self::new();
        for id in raw {
            if list.contains(id) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate jurisdiction id {id}"
                )));
            }
            list.push_unique(id).map_err(serde::de::Error::custom)?;
        }
        Ok(list)
    }
}
