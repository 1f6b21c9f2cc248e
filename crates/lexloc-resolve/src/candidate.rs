//! # Candidate Collection
//!
//! Scans a domain table against one point and classifies every domain with
//! a volume as contained, excluded, or indeterminate.
//!
//! ## Classification
//!
//! | Containment answer | Effect |
//! |---|---|
//! | `status == Refused` or `confidence == Unknown` | sets `refused` and `uncertain`; not contained |
//! | `confidence == Approximate` | sets `uncertain`; not contained |
//! | `Exact`, inside | candidate |
//! | `Exact`, outside | excluded |
//!
//! Exactness is a hard gate: a domain the geometry layer is unsure about
//! never contributes bindings as if it were definite.
//!
//! ## Specificity
//!
//! Each candidate carries a `size_key`, the L1 extent of its volume's
//! bounds. A volume with no resolvable bounds gets `u64::MAX`. The smallest
//! key wins, ties broken by the lowest domain id.

use lexloc_core::{Confidence, ContainmentStatus, DomainId, GeometryBudget, Point3, Volume};

use crate::domain::{DomainEntry, MAX_SCANNED_DOMAINS};

/// A domain whose volume exactly contains the point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the domain in the scanned table.
    pub index: usize,
    /// The domain's id.
    pub domain_id: DomainId,
    /// The domain's precedence among overlaps.
    pub domain_precedence: u32,
    /// L1 extent of the volume's bounds, or `u64::MAX` without bounds.
    pub size_key: u64,
}

impl Candidate {
    /// Whether `self` is more specific than `other`: smaller size, then
    /// lower domain id.
    pub fn more_specific_than(&self, other: &Self) -> bool {
        self.size_key < other.size_key
            || (self.size_key == other.size_key && self.domain_id < other.domain_id)
    }

    /// Whether `self` precedes `other` among overlapping domains: higher
    /// precedence, then lower domain id.
    pub fn outranks(&self, other: &Self) -> bool {
        self.domain_precedence > other.domain_precedence
            || (self.domain_precedence == other.domain_precedence
                && self.domain_id < other.domain_id)
    }
}

/// Result of scanning a domain table against one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSet {
    entries: [Candidate; MAX_SCANNED_DOMAINS],
    count: usize,
    /// Some domain refused the query or answered with unknown confidence.
    pub refused: bool,
    /// Some domain answered with less than exact confidence.
    pub uncertain: bool,
    /// The table held more domains than are scanned.
    pub scan_truncated: bool,
}

impl CandidateSet {
    fn new() -> Self {
        Self {
            entries: [Candidate::default(); MAX_SCANNED_DOMAINS],
            count: 0,
            refused: false,
            uncertain: false,
            scan_truncated: false,
        }
    }

    fn push(&mut self, candidate: Candidate) {
        // At most MAX_SCANNED_DOMAINS domains are scanned, so this never
        // overflows.
        if self.count < MAX_SCANNED_DOMAINS {
            self.entries[self.count] = candidate;
            self.count += 1;
        }
    }

    /// Contained domains in scan order.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.entries[..self.count]
    }

    /// Number of contained domains.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no domain contains the point.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position (within [`as_slice`](Self::as_slice)) of the most specific
    /// candidate, or `None` when the set is empty.
    pub fn smallest(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in self.as_slice().iter().enumerate() {
            best = match best {
                Some(b) if !candidate.more_specific_than(&self.entries[b]) => Some(b),
                _ => Some(i),
            };
        }
        best
    }
}

/// Scan up to [`MAX_SCANNED_DOMAINS`] domains and classify each against
/// `point`.
pub fn collect<V: Volume>(
    domains: &[DomainEntry<V>],
    point: &Point3,
    budget: &mut GeometryBudget,
) -> CandidateSet {
    let mut set = CandidateSet::new();

    if domains.len() > MAX_SCANNED_DOMAINS {
        set.scan_truncated = true;
        tracing::warn!(
            domains = domains.len(),
            scanned = MAX_SCANNED_DOMAINS,
            "domain table exceeds scan cap; trailing domains not considered"
        );
    }

    for (index, entry) in domains.iter().take(MAX_SCANNED_DOMAINS).enumerate() {
        let Some(volume) = entry.volume.as_ref() else {
            continue;
        };

        let answer = volume.contains(point, budget);
        tracing::trace!(
            domain = %entry.domain_id,
            inside = answer.inside,
            status = ?answer.status,
            confidence = ?answer.confidence,
            "containment classified"
        );

        if answer.status == ContainmentStatus::Refused || answer.confidence == Confidence::Unknown
        {
            set.refused = true;
            set.uncertain = true;
            continue;
        }
        if answer.confidence != Confidence::Exact {
            set.uncertain = true;
            continue;
        }
        if answer.inside {
            set.push(Candidate {
                index,
                domain_id: entry.domain_id,
                domain_precedence: entry.domain_precedence,
                size_key: volume.bounds().map_or(u64::MAX, |b| b.l1_extent()),
            });
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexloc_core::{Aabb, Containment, Shape};

    fn d(raw: u64) -> DomainId {
        DomainId::new(raw)
    }

    /// A volume that always gives the same answer.
    struct Fixed(Containment);

    impl Volume for Fixed {
        fn contains(&self, _point: &Point3, _budget: &mut GeometryBudget) -> Containment {
            self.0
        }

        fn bounds(&self) -> Option<Aabb> {
            None
        }
    }

    #[test]
    fn exact_inside_becomes_candidate() {
        let table = vec![DomainEntry::new(d(1), Shape::sphere(Point3::ORIGIN, 4))];
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].domain_id, d(1));
        assert_eq!(set.as_slice()[0].size_key, 24);
        assert!(!set.refused && !set.uncertain);
    }

    #[test]
    fn exact_outside_is_excluded_without_flags() {
        let table = vec![DomainEntry::new(d(1), Shape::sphere(Point3::ORIGIN, 2))];
        let set = collect(&table, &Point3::new(5, 0, 0), &mut GeometryBudget::unlimited());
        assert!(set.is_empty());
        assert!(!set.refused && !set.uncertain);
    }

    #[test]
    fn domain_without_volume_is_skipped() {
        let table = vec![DomainEntry::<Shape>::without_volume(d(1))];
        let mut budget = GeometryBudget::limited(0);
        let set = collect(&table, &Point3::ORIGIN, &mut budget);
        assert!(set.is_empty());
        assert!(!set.refused);
    }

    #[test]
    fn approximate_sets_uncertain_only() {
        let table = vec![DomainEntry::new(d(1), Fixed(Containment::approximate(true)))];
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert!(set.is_empty());
        assert!(set.uncertain);
        assert!(!set.refused);
    }

    #[test]
    fn unknown_confidence_sets_both_flags() {
        let unknown = Containment {
            inside: true,
            status: ContainmentStatus::Ok,
            confidence: Confidence::Unknown,
        };
        let table = vec![DomainEntry::new(d(1), Fixed(unknown))];
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert!(set.is_empty());
        assert!(set.refused && set.uncertain);
    }

    #[test]
    fn exhausted_budget_refuses() {
        let table = vec![
            DomainEntry::new(d(1), Shape::sphere(Point3::ORIGIN, 4)),
            DomainEntry::new(d(2), Shape::sphere(Point3::ORIGIN, 8)),
        ];
        let mut budget = GeometryBudget::limited(1);
        let set = collect(&table, &Point3::ORIGIN, &mut budget);
        assert_eq!(set.len(), 1);
        assert!(set.refused && set.uncertain);
    }

    #[test]
    fn unbounded_volume_gets_maximal_size_key() {
        let table = vec![DomainEntry::new(d(1), Shape::Unbounded)];
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert_eq!(set.as_slice()[0].size_key, u64::MAX);
    }

    #[test]
    fn smallest_prefers_size_then_id() {
        let table = vec![
            DomainEntry::new(d(9), Shape::sphere(Point3::ORIGIN, 8)),
            DomainEntry::new(d(7), Shape::sphere(Point3::ORIGIN, 3)),
            DomainEntry::new(d(4), Shape::sphere(Point3::new(1, 0, 0), 3)),
        ];
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        let smallest = set.smallest().map(|i| set.as_slice()[i].domain_id);
        assert_eq!(smallest, Some(d(4)));
    }

    #[test]
    fn smallest_of_empty_set_is_none() {
        let table: Vec<DomainEntry<Shape>> = Vec::new();
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert_eq!(set.smallest(), None);
    }

    #[test]
    fn scan_cap_truncates() {
        let table: Vec<DomainEntry<Shape>> = (1..=40)
            .map(|raw| DomainEntry::new(d(raw), Shape::sphere(Point3::ORIGIN, raw)))
            .collect();
        let set = collect(&table, &Point3::ORIGIN, &mut GeometryBudget::unlimited());
        assert!(set.scan_truncated);
        assert_eq!(set.len(), MAX_SCANNED_DOMAINS);
        assert!(set.as_slice().iter().all(|c| c.domain_id.get() <= 32));
    }
}
