//! # Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces lexloc works with.
//! These prevent accidental identifier confusion: you cannot pass a
//! `DomainId` where a `JurisdictionId` is expected.
//!
//! Both identifiers reserve `0`. For jurisdictions it means "absent/unset"
//! and is never a member of a list; for domains it means "no parent".

use serde::{Deserialize, Serialize};

/// Opaque 64-bit identity of a legal authority (a polity, treaty zone,
/// server rule set, ...).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JurisdictionId(u64);

impl JurisdictionId {
    /// The reserved "absent" jurisdiction.
    pub const UNSET: Self = Self(0);

    /// Wrap a raw identifier. `0` yields [`JurisdictionId::UNSET`].
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the reserved unset value.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for JurisdictionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a spatial region ("domain") in world space.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DomainId(u64);

impl DomainId {
    /// The reserved "no parent" value.
    pub const ROOT: Self = Self(0);

    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is the reserved "no parent" value.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for DomainId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_unset() {
        assert!(JurisdictionId::new(0).is_unset());
        assert_eq!(JurisdictionId::default(), JurisdictionId::UNSET);
        assert!(!JurisdictionId::new(1).is_unset());
    }

    #[test]
    fn zero_is_root() {
        assert!(DomainId::ROOT.is_root());
        assert!(!DomainId::new(9).is_root());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&JurisdictionId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: DomainId = serde_json::from_str("17").unwrap();
        assert_eq!(back, DomainId::new(17));
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(JurisdictionId::new(3) < JurisdictionId::new(4));
        assert!(DomainId::new(10) > DomainId::new(2));
    }
}
