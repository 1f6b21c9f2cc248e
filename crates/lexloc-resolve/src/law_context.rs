//! # Law Context
//!
//! The fixed-size record handed to command and query authorization. It is
//! a lossy copy of a [`Resolution`]: at most
//! [`LAW_CONTEXT_MAX_JURISDICTIONS`] ids survive, in order, and the
//! advisory flags are packed into `jurisdiction_flags`.
//!
//! ## Flag Bits
//!
//! | Bit | Constant | Meaning |
//! |---|---|---|
//! | 0 | [`JURISDICTION_FLAG_REFUSED`] | geometry refused a query |
//! | 1 | [`JURISDICTION_FLAG_UNCERTAIN`] | some containment was not exact |
//! | 2 | [`JURISDICTION_FLAG_TRUNCATED`] | the resolution or this copy dropped ids |

use serde::{Deserialize, Deserializer, Serialize};

use lexloc_core::JurisdictionId;

use crate::resolver::Resolution;

/// Jurisdiction slots in a [`LawContext`].
pub const LAW_CONTEXT_MAX_JURISDICTIONS: usize = 8;

/// Geometry refused a query during resolution.
pub const JURISDICTION_FLAG_REFUSED: u32 = 1 << 0;
/// Some containment answer was less than exact.
pub const JURISDICTION_FLAG_UNCERTAIN: u32 = 1 << 1;
/// Ids were dropped, either by the resolution or by the context clamp.
pub const JURISDICTION_FLAG_TRUNCATED: u32 = 1 << 2;

/// Authority and jurisdictions in force for one authorization check.
///
/// Deserialization rejects a `jurisdiction_count` above
/// [`LAW_CONTEXT_MAX_JURISDICTIONS`] and unset ids in live slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LawContext {
    /// Opaque id of the acting authority.
    pub authority_id: u64,
    /// Opaque kind of the acting authority.
    pub authority_kind: u32,
    /// Jurisdiction slots; only the first `jurisdiction_count` are live.
    pub jurisdiction_ids: [JurisdictionId; LAW_CONTEXT_MAX_JURISDICTIONS],
    /// Number of live slots.
    pub jurisdiction_count: usize,
    /// Bit set of `JURISDICTION_FLAG_*`.
    pub jurisdiction_flags: u32,
}

impl LawContext {
    /// Live jurisdictions, most authoritative first.
    pub fn jurisdictions(&self) -> &[JurisdictionId] {
        let count = self.jurisdiction_count.min(LAW_CONTEXT_MAX_JURISDICTIONS);
        &self.jurisdiction_ids[..count]
    }

    /// Whether the geometry layer refused during resolution.
    pub fn is_refused(&self) -> bool {
        self.jurisdiction_flags & JURISDICTION_FLAG_REFUSED != 0
    }

    /// Whether some containment was not exact.
    pub fn is_uncertain(&self) -> bool {
        self.jurisdiction_flags & JURISDICTION_FLAG_UNCERTAIN != 0
    }

    /// Whether jurisdictions were dropped on the way here.
    pub fn is_truncated(&self) -> bool {
        self.jurisdiction_flags & JURISDICTION_FLAG_TRUNCATED != 0
    }
}

/// Wire shape of [`LawContext`] before validation.
#[derive(Deserialize)]
struct RawLawContext {
    authority_id: u64,
    authority_kind: u32,
    jurisdiction_ids: [JurisdictionId; LAW_CONTEXT_MAX_JURISDICTIONS],
    jurisdiction_count: usize,
    jurisdiction_flags: u32,
}

impl<'de> Deserialize<'de> for LawContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawLawContext::deserialize(deserializer)?;
        if raw.jurisdiction_count > LAW_CONTEXT_MAX_JURISDICTIONS {
            return Err(serde::de::Error::custom(format!(
                "jurisdiction_count {} exceeds capacity {LAW_CONTEXT_MAX_JURISDICTIONS}",
                raw.jurisdiction_count
            )));
        }
        if raw.jurisdiction_ids[..raw.jurisdiction_count]
            .iter()
            .any(|id| id.is_unset())
        {
            return Err(serde::de::Error::custom(
                "unset jurisdiction id in a live slot",
            ));
        }
        Ok(Self {
            authority_id: raw.authority_id,
            authority_kind: raw.authority_kind,
            jurisdiction_ids: raw.jurisdiction_ids,
            jurisdiction_count: raw.jurisdiction_count,
            jurisdiction_flags: raw.jurisdiction_flags,
        })
    }
}

/// Copy `resolution` into a law context for `authority_id`/`authority_kind`.
///
/// Entries beyond [`LAW_CONTEXT_MAX_JURISDICTIONS`] are dropped, which is an
/// accepted lossy conversion; the truncated bit records it.
pub fn build_law_context(
    authority_id: u64,
    authority_kind: u32,
    resolution: &Resolution,
) -> LawContext {
    let mut jurisdiction_ids = [JurisdictionId::UNSET; LAW_CONTEXT_MAX_JURISDICTIONS];
    let live = resolution.ordered.as_slice();
    let count = live.len().min(LAW_CONTEXT_MAX_JURISDICTIONS);
    jurisdiction_ids[..count].copy_from_slice(&live[..count]);

    let mut flags = 0;
    if resolution.refused {
        flags |= JURISDICTION_FLAG_REFUSED;
    }
    if resolution.uncertain {
        flags |= JURISDICTION_FLAG_UNCERTAIN;
    }
    if resolution.truncated || live.len() > count {
        flags |= JURISDICTION_FLAG_TRUNCATED;
    }

    LawContext {
        authority_id,
        authority_kind,
        jurisdiction_ids,
        jurisdiction_count: count,
        jurisdiction_flags: flags,
    }
}
