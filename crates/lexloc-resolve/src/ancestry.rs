//! # Parent-Chain Walk
//!
//! Walks `parent_domain_id` links upward from the most specific domain and
//! emits each ancestor's bindings, nearest first. Ancestors contribute
//! whether or not their own volume contains the point.
//!
//! ## Cycle Safety
//!
//! Caller tables are not trusted to be acyclic. The walk is bounded to
//! `domains.len() + 1` steps; an acyclic chain always ends before that.
//! Hitting the bound stops the walk quietly (no error) and marks the
//! resolution truncated.

use lexloc_core::DomainId;

use crate::domain::{find_domain, DomainEntry};
use crate::resolver::Resolution;
use crate::select::emit_bindings;

/// How the walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// Reached a root, a missing start, or a parent absent from the table.
    Root,
    /// Stopped on the step bound; the table contains a parent cycle.
    Bounded,
}

/// Emit ancestor bindings starting above `start`.
pub fn emit_ancestors<V>(
    domains: &[DomainEntry<V>],
    start: DomainId,
    out: &mut Resolution,
) -> WalkEnd {
    let bound = domains.len().saturating_add(1);
    let mut current = start;

    for _ in 0..bound {
        let Some(entry) = find_domain(domains, current) else {
            return WalkEnd::Root;
        };
        let parent = entry.parent_domain_id;
        if parent.is_root() {
            return WalkEnd::Root;
        }
        let Some(parent_entry) = find_domain(domains, parent) else {
            return WalkEnd::Root;
        };
        emit_bindings(&parent_entry.bindings, out);
        current = parent;
    }

    tracing::warn!(
        start = %start,
        steps = bound,
        "parent chain did not terminate; domain table contains a cycle"
    );
    out.truncated = true;
    WalkEnd::Bounded
}
