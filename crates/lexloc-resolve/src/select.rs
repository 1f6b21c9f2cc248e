//! # Stable Priority Selection
//!
//! Repeated "find the best unvisited element" scans. Both the binding
//! selector and the overlap orderer visit their inputs this way so that the
//! tie-break rules (precedence descending, id ascending) are applied by
//! explicit comparison and never by array position.
//!
//! The scan is O(n²) over at most [`MAX_PRIORITY_SELECTION`] elements and
//! tracks visited slots in an inline bitmap, so it never allocates.

use crate::domain::{JurisdictionBinding, MAX_DOMAIN_BINDINGS};
use crate::resolver::Resolution;

/// Largest input a single selection pass considers. Elements beyond this
/// position are ignored.
pub const MAX_PRIORITY_SELECTION: usize = 32;

/// Visit `items` best-first according to `outranks`, skipping the element at
/// `skip` if given.
///
/// `outranks(a, b)` must be a strict order on the keys that matter: among
/// elements that never outrank each other, the earlier one is visited first.
pub fn visit_by_priority<T, F, G>(items: &[T], skip: Option<usize>, outranks: F, mut visit: G)
where
    F: Fn(&T, &T) -> bool,
    G: FnMut(&T),
{
    let len = items.len().min(MAX_PRIORITY_SELECTION);
    let mut visited = [false; MAX_PRIORITY_SELECTION];
    if let Some(index) = skip {
        if index < len {
            visited[index] = true;
        }
    }

    loop {
        let mut best: Option<usize> = None;
        for i in 0..len {
            if visited[i] {
                continue;
            }
            best = match best {
                Some(b) if !outranks(&items[i], &items[b]) => Some(b),
                _ => Some(i),
            };
        }
        let Some(b) = best else { break };
        visited[b] = true;
        visit(&items[b]);
    }
}

/// Append a domain's bindings to `out` in precedence order.
///
/// A domain with no bindings contributes nothing. Bindings the list rejects
/// for capacity mark the resolution truncated; unset ids are skipped.
///
/// Only the first [`MAX_DOMAIN_BINDINGS`] bindings are ranked. A longer
/// slice only reaches here from an unvalidated table; the excess is
/// dropped and the resolution marked truncated.
pub fn emit_bindings(bindings: &[JurisdictionBinding], out: &mut Resolution) {
    let considered = &bindings[..bindings.len().min(MAX_DOMAIN_BINDINGS)];
    if considered.len() < bindings.len() {
        tracing::warn!(
            bindings = bindings.len(),
            ranked = MAX_DOMAIN_BINDINGS,
            "domain exceeds binding cap; trailing bindings not considered"
        );
        out.truncated = true;
    }

    visit_by_priority(
        considered,
        None,
        |a, b| a.outranks(b),
        |binding| out.push(binding.jurisdiction_id),
    );
}
