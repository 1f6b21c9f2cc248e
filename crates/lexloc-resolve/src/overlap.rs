//! # Overlap Ordering
//!
//! Orders the contained domains other than the most specific one. These are
//! siblings that also contain the point without a strict nesting relation
//! (two treaty zones over the same ground, say). Domain precedence is the
//! only disambiguator here; spatial size plays no part.

use lexloc_core::Volume;

use crate::candidate::CandidateSet;
use crate::domain::DomainEntry;
use crate::resolver::Resolution;
use crate::select::{emit_bindings, visit_by_priority};

/// Emit the bindings of every candidate except `smallest`, by descending
/// domain precedence then ascending domain id.
pub fn emit_overlaps<V: Volume>(
    domains: &[DomainEntry<V>],
    candidates: &CandidateSet,
    smallest: Option<usize>,
    out: &mut Resolution,
) {
    visit_by_priority(
        candidates.as_slice(),
        smallest,
        |a, b| a.outranks(b),
        |candidate| {
            if let Some(entry) = domains.get(candidate.index) {
                emit_bindings(&entry.bindings, out);
            }
        },
    );
}
