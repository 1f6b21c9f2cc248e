//! # Domain Table
//!
//! The authoritative table of spatial domains the resolver reads. Tables are
//! owned by the world layer and are read-only here.
//!
//! ## Architecture
//!
//! - **Domains** are regions of world space with an optional volume, an
//!   optional parent, and a domain precedence used to order overlaps.
//! - **Bindings** attach jurisdictions to a domain, each with its own
//!   precedence used to order jurisdictions within that domain.
//!
//! A domain without a volume is never a containment candidate, but it can
//! still contribute bindings as an ancestor of one.

use serde::{Deserialize, Serialize};

use lexloc_core::{DomainId, JurisdictionId, ValidationError};

/// Maximum bindings per domain.
pub const MAX_DOMAIN_BINDINGS: usize = 16;

/// Maximum domains scanned for containment per point. Domains beyond this
/// position in the table are not considered.
pub const MAX_SCANNED_DOMAINS: usize = 32;

// ---------------------------------------------------------------------------
// JurisdictionBinding
// ---------------------------------------------------------------------------

/// One jurisdiction attached to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JurisdictionBinding {
    /// The bound jurisdiction.
    pub jurisdiction_id: JurisdictionId,
    /// Ordering weight within the domain; higher wins.
    #[serde(default)]
    pub precedence: u32,
}

impl JurisdictionBinding {
    /// Construct a binding.
    pub const fn new(jurisdiction_id: JurisdictionId, precedence: u32) -> Self {
        Self {
            jurisdiction_id,
            precedence,
        }
    }

    /// Whether `self` is visited before `other`: higher precedence first,
    /// then lower jurisdiction id.
    pub fn outranks(&self, other: &Self) -> bool {
        self.precedence > other.precedence
            || (self.precedence == other.precedence
                && self.jurisdiction_id < other.jurisdiction_id)
    }
}

// ---------------------------------------------------------------------------
// DomainEntry
// ---------------------------------------------------------------------------

/// One domain in the authoritative domain table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry<V> {
    /// Identity of this domain. Never [`DomainId::ROOT`].
    pub domain_id: DomainId,
    /// Parent domain, or [`DomainId::ROOT`] for a top-level domain.
    #[serde(default)]
    pub parent_domain_id: DomainId,
    /// Ordering weight among overlapping domains; higher wins.
    #[serde(default)]
    pub domain_precedence: u32,
    /// Spatial extent. Absent volumes are never containment candidates.
    pub volume: Option<V>,
    /// Jurisdictions in force inside this domain.
    #[serde(default)]
    pub bindings: Vec<JurisdictionBinding>,
}

impl<V> DomainEntry<V> {
    /// A top-level domain with a volume and no bindings.
    pub fn new(domain_id: DomainId, volume: V) -> Self {
        Self {
            domain_id,
            parent_domain_id: DomainId::ROOT,
            domain_precedence: 0,
            volume: Some(volume),
            bindings: Vec::new(),
        }
    }

    /// A domain with no volume. It only contributes as an ancestor.
    pub fn without_volume(domain_id: DomainId) -> Self {
        Self {
            domain_id,
            parent_domain_id: DomainId::ROOT,
            domain_precedence: 0,
            volume: None,
            bindings: Vec::new(),
        }
    }

    /// Set the parent domain.
    pub fn with_parent(mut self, parent: DomainId) -> Self {
        self.parent_domain_id = parent;
        self
    }

    /// Set the domain precedence.
    pub fn with_precedence(mut self, precedence: u32) -> Self {
        self.domain_precedence = precedence;
        self
    }

    /// Append a binding.
    pub fn with_binding(mut self, jurisdiction_id: JurisdictionId, precedence: u32) -> Self {
        self.bindings
            .push(JurisdictionBinding::new(jurisdiction_id, precedence));
        self
    }

    /// Check this entry's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: reserved id, self
    /// parent, too many bindings, unset or repeated binding jurisdiction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.domain_id.is_root() {
            return Err(ValidationError::ReservedDomainId);
        }
        if self.parent_domain_id == self.domain_id {
            return Err(ValidationError::SelfParent(self.domain_id));
        }
        if self.bindings.len() > MAX_DOMAIN_BINDINGS {
            return Err(ValidationError::TooManyBindings {
                domain: self.domain_id,
                count: self.bindings.len(),
                max: MAX_DOMAIN_BINDINGS,
            });
        }
        for (i, binding) in self.bindings.iter().enumerate() {
            if binding.jurisdiction_id.is_unset() {
                return Err(ValidationError::UnsetBinding(self.domain_id));
            }
            if self.bindings[..i]
                .iter()
                .any(|earlier| earlier.jurisdiction_id == binding.jurisdiction_id)
            {
                return Err(ValidationError::DuplicateBinding {
                    domain: self.domain_id,
                    jurisdiction: binding.jurisdiction_id,
                });
            }
        }
        Ok(())
    }
}

/// Validate every entry of a table and reject repeated domain ids.
///
/// Parent references to ids absent from the table are allowed: the chain
/// simply ends there.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, in table order.
pub fn validate_domains<V>(domains: &[DomainEntry<V>]) -> Result<(), ValidationError> {
    for (i, entry) in domains.iter().enumerate() {
        entry.validate()?;
        if domains[..i]
            .iter()
            .any(|earlier| earlier.domain_id == entry.domain_id)
        {
            return Err(ValidationError::DuplicateDomain(entry.domain_id));
        }
    }
    Ok(())
}

/// First entry with `domain_id`, scanning the whole table.
pub fn find_domain<V>(domains: &[DomainEntry<V>], domain_id: DomainId) -> Option<&DomainEntry<V>> {
    domains.iter().find(|entry| entry.domain_id == domain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexloc_core::{Point3, Shape};

    fn j(raw: u64) -> JurisdictionId {
        JurisdictionId::new(raw)
    }

    fn d(raw: u64) -> DomainId {
        DomainId::new(raw)
    }

    #[test]
    fn binding_outranks_by_precedence_then_id() {
        let high = JurisdictionBinding::new(j(9), 5);
        let low = JurisdictionBinding::new(j(1), 1);
        assert!(high.outranks(&low));
        assert!(!low.outranks(&high));

        let a = JurisdictionBinding::new(j(2), 3);
        let b = JurisdictionBinding::new(j(4), 3);
        assert!(a.outranks(&b));
        assert!(!b.outranks(&a));
        assert!(!a.outranks(&a));
    }

    #[test]
    fn builder_sets_fields() {
        let entry = DomainEntry::new(d(5), Shape::sphere(Point3::ORIGIN, 2))
            .with_parent(d(1))
            .with_precedence(7)
            .with_binding(j(100), 2);
        assert_eq!(entry.parent_domain_id, d(1));
        assert_eq!(entry.domain_precedence, 7);
        assert_eq!(entry.bindings, vec![JurisdictionBinding::new(j(100), 2)]);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn rejects_reserved_id_and_self_parent() {
        let zero = DomainEntry::<Shape>::without_volume(DomainId::ROOT);
        assert_eq!(zero.validate(), Err(ValidationError::ReservedDomainId));

        let selfish = DomainEntry::<Shape>::without_volume(d(3)).with_parent(d(3));
        assert_eq!(selfish.validate(), Err(ValidationError::SelfParent(d(3))));
    }

    #[test]
    fn rejects_too_many_bindings() {
        let mut entry = DomainEntry::<Shape>::without_volume(d(1));
        for raw in 1..=17 {
            entry = entry.with_binding(j(raw), 0);
        }
        assert!(matches!(
            entry.validate(),
            Err(ValidationError::TooManyBindings { count: 17, .. })
        ));
    }

    #[test]
    fn rejects_unset_and_repeated_bindings() {
        let unset = DomainEntry::<Shape>::without_volume(d(1)).with_binding(JurisdictionId::UNSET, 0);
        assert_eq!(unset.validate(), Err(ValidationError::UnsetBinding(d(1))));

        let repeated = DomainEntry::<Shape>::without_volume(d(1))
            .with_binding(j(4), 0)
            .with_binding(j(4), 9);
        assert!(matches!(
            repeated.validate(),
            Err(ValidationError::DuplicateBinding { .. })
        ));
    }

    #[test]
    fn table_rejects_duplicate_ids() {
        let table = vec![
            DomainEntry::<Shape>::without_volume(d(1)),
            DomainEntry::<Shape>::without_volume(d(2)),
            DomainEntry::<Shape>::without_volume(d(1)),
        ];
        assert_eq!(
            validate_domains(&table),
            Err(ValidationError::DuplicateDomain(d(1)))
        );
    }

    #[test]
    fn table_allows_dangling_parent() {
        let table = vec![DomainEntry::<Shape>::without_volume(d(1)).with_parent(d(99))];
        assert!(validate_domains(&table).is_ok());
    }

    #[test]
    fn find_domain_scans_whole_table() {
        let table: Vec<DomainEntry<Shape>> = (1..=40).map(|raw| DomainEntry::without_volume(d(raw))).collect();
        assert_eq!(find_domain(&table, d(40)).map(|e| e.domain_id), Some(d(40)));
        assert!(find_domain(&table, d(41)).is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let yaml = r#"
domain_id: 8
volume:
  kind: sphere
  center: [0, 0, 0]
  radius: 3
bindings:
  - jurisdiction_id: 42
"#;
        let entry: DomainEntry<Shape> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.parent_domain_id, DomainId::ROOT);
        assert_eq!(entry.domain_precedence, 0);
        assert_eq!(entry.bindings[0].precedence, 0);
        assert!(entry.volume.is_some());
    }

    #[test]
    fn missing_volume_deserializes_as_none() {
        let entry: DomainEntry<Shape> =
            serde_yaml::from_str("domain_id: 9
parent_domain_id: 8
").unwrap();
        assert_eq!(entry.volume, None);
        assert_eq!(entry.parent_domain_id, d(8));
        assert!(entry.bindings.is_empty());
    }
}
