//! # Point and Path Resolution
//!
//! Orchestrates candidate collection, specificity selection, overlap
//! ordering, ancestor walking, and default appending into one
//! [`Resolution`] per point, and unions resolutions along a path.
//!
//! ## Emission Order
//!
//! 1. Explicit context, in caller order.
//! 2. Bindings of the most specific contained domain.
//! 3. Bindings of the other contained domains, by domain precedence.
//! 4. Bindings of the most specific domain's ancestors, nearest first.
//! 5. World default, server default, fallback.
//!
//! Every step appends through `push_unique`, so an id keeps the position of
//! its first emission.
//!
//! ## Order Independence
//!
//! Every ordering decision compares explicit keys (size, precedence, id) and
//! never array positions. Two tables that are permutations of each other
//! resolve to identical lists, provided both fit within the scan cap.
//!
//! ## Failure Channels
//!
//! - Hard errors are argument errors ([`ResolveError`]); nothing is mutated.
//! - Geometric refusal or doubt sets advisory flags and never aborts.
//! - Capacity overflow and cycle bounds set `truncated` and never abort.

use serde::{Deserialize, Serialize};

use lexloc_core::{
    DomainId, GeometryBudget, JurisdictionId, JurisdictionList, ListError, Point3, Volume,
};

use crate::ancestry::emit_ancestors;
use crate::candidate::collect;
use crate::domain::DomainEntry;
use crate::error::ResolveError;
use crate::overlap::emit_overlaps;
use crate::select::emit_bindings;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// The ordered jurisdictions in force at a point or along a path.
///
/// All three flags are OR-accumulators: once set within a resolution they
/// stay set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Jurisdictions in force, most authoritative first.
    pub ordered: JurisdictionList,
    /// The geometry layer refused or could not answer some query.
    pub refused: bool,
    /// Some containment answer was less than exact.
    pub uncertain: bool,
    /// Some jurisdiction or domain could not be reported: the list was full,
    /// the table exceeded the scan cap, or the parent chain was cyclic.
    #[serde(default)]
    pub truncated: bool,
}

impl Resolution {
    /// An empty resolution with no flags set.
    pub const fn new() -> Self {
        Self {
            ordered: JurisdictionList::new(),
            refused: false,
            uncertain: false,
            truncated: false,
        }
    }

    /// Append `id` unless present. Unset ids are ignored; a full list marks
    /// the resolution truncated.
    pub fn push(&mut self, id: JurisdictionId) {
        match self.ordered.push_unique(id) {
            Ok(()) | Err(ListError::Unset) => {}
            Err(ListError::Full { capacity }) => {
                if !self.truncated {
                    tracing::warn!(
                        jurisdiction = %id,
                        capacity,
                        "jurisdiction list full; resolution truncated"
                    );
                }
                self.truncated = true;
            }
        }
    }

    /// Union `other` into `self`, keeping first-seen order and OR-ing flags.
    pub fn merge(&mut self, other: &Resolution) {
        for &id in other.ordered.iter() {
            self.push(id);
        }
        self.refused |= other.refused;
        self.uncertain |= other.uncertain;
        self.truncated |= other.truncated;
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Jurisdictions appended after every spatial source, in field order.
/// Unset entries are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// The world's own jurisdiction.
    #[serde(default)]
    pub world: JurisdictionId,
    /// The hosting server's rule set.
    #[serde(default)]
    pub server: JurisdictionId,
    /// Last-resort jurisdiction.
    #[serde(default)]
    pub fallback: JurisdictionId,
}

impl Defaults {
    /// Construct defaults from the three ids.
    pub const fn new(world: JurisdictionId, server: JurisdictionId, fallback: JurisdictionId) -> Self {
        Self {
            world,
            server,
            fallback,
        }
    }

    fn append_to(&self, out: &mut Resolution) {
        out.push(self.world);
        out.push(self.server);
        out.push(self.fallback);
    }
}

// ---------------------------------------------------------------------------
// resolve_point / resolve_multi
// ---------------------------------------------------------------------------

/// Resolve the jurisdictions in force at `point`.
///
/// `budget` bounds geometry cost for this call; `None` means unlimited.
/// This never fails: uncertainty and overflow travel as flags.
pub fn resolve_point<V: Volume>(
    domains: &[DomainEntry<V>],
    explicit_context: Option<&JurisdictionList>,
    point: &Point3,
    budget: Option<&mut GeometryBudget>,
    defaults: &Defaults,
) -> Resolution {
    let mut out = Resolution::new();

    if let Some(context) = explicit_context {
        for &id in context.iter() {
            out.push(id);
        }
    }

    let mut local_budget = GeometryBudget::unlimited();
    let budget = budget.unwrap_or(&mut local_budget);

    let candidates = collect(domains, point, budget);
    out.refused |= candidates.refused;
    out.uncertain |= candidates.uncertain;
    out.truncated |= candidates.scan_truncated;

    let smallest = candidates.smallest();
    let most_specific = smallest.map(|i| candidates.as_slice()[i]);
    if let Some(candidate) = most_specific {
        if let Some(entry) = domains.get(candidate.index) {
            emit_bindings(&entry.bindings, &mut out);
        }
    }

    emit_overlaps(domains, &candidates, smallest, &mut out);

    let walk = most_specific
        .map(|candidate| emit_ancestors(domains, candidate.domain_id, &mut out));

    defaults.append_to(&mut out);

    tracing::debug!(
        point = %point,
        candidates = candidates.len(),
        smallest = %most_specific.map_or(DomainId::ROOT, |c| c.domain_id),
        walk = ?walk,
        ordered = out.ordered.len(),
        refused = out.refused,
        uncertain = out.uncertain,
        truncated = out.truncated,
        "point resolved"
    );

    out
}

/// Resolve every point of a path in order and union the results.
///
/// Each jurisdiction appears once, at the position of its first sighting
/// along the path; flags are OR-combined. A shared `budget` is charged
/// across all points; `None` gives each point its own unlimited budget.
///
/// # Errors
///
/// Returns [`ResolveError::EmptyPath`] when `points` is empty.
pub fn resolve_multi<V: Volume>(
    domains: &[DomainEntry<V>],
    explicit_context: Option<&JurisdictionList>,
    points: &[Point3],
    mut budget: Option<&mut GeometryBudget>,
    defaults: &Defaults,
) -> Result<Resolution, ResolveError> {
    if points.is_empty() {
        return Err(ResolveError::EmptyPath);
    }

    let mut out = Resolution::new();
    for point in points {
        let scratch = resolve_point(
            domains,
            explicit_context,
            point,
            budget.as_deref_mut(),
            defaults,
        );
        out.merge(&scratch);
    }

    tracing::debug!(
        points = points.len(),
        ordered = out.ordered.len(),
        refused = out.refused,
        uncertain = out.uncertain,
        truncated = out.truncated,
        "path resolved"
    );

    Ok(out)
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// A domain table paired with its defaults.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, V> {
    domains: &'a [DomainEntry<V>],
    defaults: Defaults,
}

impl<'a, V: Volume> Resolver<'a, V> {
    /// Bind a table and defaults.
    pub fn new(domains: &'a [DomainEntry<V>], defaults: Defaults) -> Self {
        Self { domains, defaults }
    }

    /// The bound table.
    pub fn domains(&self) -> &'a [DomainEntry<V>] {
        self.domains
    }

    /// The bound defaults.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// See [`resolve_point`].
    pub fn resolve_point(
        &self,
        explicit_context: Option<&JurisdictionList>,
        point: &Point3,
        budget: Option<&mut GeometryBudget>,
    ) -> Resolution {
        resolve_point(self.domains, explicit_context, point, budget, &self.defaults)
    }

    /// See [`resolve_multi`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyPath`] when `points` is empty.
    pub fn resolve_path(
        &self,
        explicit_context: Option<&JurisdictionList>,
        points: &[Point3],
        budget: Option<&mut GeometryBudget>,
    ) -> Result<Resolution, ResolveError> {
        resolve_multi(self.domains, explicit_context, points, budget, &self.defaults)
    }
}
