//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout lexloc. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - List errors are caller-visible capacity or identity failures. They are
//!   never raised as panics and never silently overwrite existing entries.
//! - Validation errors name the offending domain so a malformed world table
//!   can be fixed at the source.
//! - Geometric uncertainty is NOT an error. It travels as advisory flags on
//!   a resolution, never through this hierarchy.

use thiserror::Error;

use crate::identity::{DomainId, JurisdictionId};

/// Top-level error type for lexloc.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexlocError {
    /// A jurisdiction list rejected an insertion.
    #[error("jurisdiction list error: {0}")]
    List(#[from] ListError),

    /// A domain table or world description is malformed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Rejected insertion into a fixed-capacity jurisdiction list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Jurisdiction `0` is the "unset" sentinel and never a list member.
    #[error("jurisdiction id 0 is reserved as unset")]
    Unset,

    /// The list already holds `capacity` entries.
    #[error("jurisdiction list is full (capacity {capacity})")]
    Full {
        /// Capacity of the list that rejected the push.
        capacity: usize,
    },
}

/// A domain table entry or world description violates a structural rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Domain id `0` is reserved for "no parent".
    #[error("domain id 0 is reserved for \"no parent\"")]
    ReservedDomainId,

    /// Two entries in the same table share an id.
    #[error("duplicate domain id {0}")]
    DuplicateDomain(DomainId),

    /// A domain names itself as its parent.
    #[error("domain {0} is its own parent")]
    SelfParent(DomainId),

    /// A domain carries more bindings than a binding table can hold.
    #[error("domain {domain} has {count} bindings (max {max})")]
    TooManyBindings {
        /// The offending domain.
        domain: DomainId,
        /// Number of bindings supplied.
        count: usize,
        /// Maximum permitted.
        max: usize,
    },

    /// A binding names the unset jurisdiction.
    #[error("domain {0} binds the unset jurisdiction id 0")]
    UnsetBinding(DomainId),

    /// A domain binds the same jurisdiction twice.
    #[error("domain {domain} binds jurisdiction {jurisdiction} more than once")]
    DuplicateBinding {
        /// The offending domain.
        domain: DomainId,
        /// The repeated jurisdiction.
        jurisdiction: JurisdictionId,
    },

    /// A volume description is geometrically invalid.
    #[error("invalid volume: {0}")]
    InvalidVolume(String),

    /// A point could not be parsed.
    #[error("invalid point: {0}")]
    InvalidPoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_error_wraps_into_top_level() {
        let err: LexlocError = ListError::Full { capacity: 16 }.into();
        assert_eq!(
            err.to_string(),
            "jurisdiction list error: jurisdiction list is full (capacity 16)"
        );
    }

    #[test]
    fn validation_error_names_domain() {
        let err = ValidationError::TooManyBindings {
            domain: DomainId::new(7),
            count: 17,
            max: 16,
        };
        assert_eq!(err.to_string(), "domain 7 has 17 bindings (max 16)");
    }
}
