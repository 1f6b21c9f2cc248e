//! # lexloc-resolve — Spatial Jurisdiction Resolution
//!
//! Resolves, for a point or a path of points, the ordered set of
//! jurisdictions in force there, and packages the result into a fixed-size
//! law context for authorization checks.
//!
//! - **Domain table** (`domain.rs`): domains, their parents, precedence, and
//!   jurisdiction bindings.
//!
//! - **Selection** (`select.rs`): the stable priority selection scan and the
//!   binding selector built on it.
//!
//! - **Candidates** (`candidate.rs`): containment classification against one
//!   point and selection of the most specific domain.
//!
//! - **Overlaps** (`overlap.rs`) and **ancestry** (`ancestry.rs`): ordering
//!   of sibling domains and the cycle-safe parent walk.
//!
//! - **Resolver** (`resolver.rs`): `resolve_point` and `resolve_multi`.
//!
//! - **Law context** (`law_context.rs`): the lossy copy handed to
//!   authorization.
//!
//! - **World** (`world.rs`): YAML/JSON world files over reference shapes.
//!
//! ## Determinism
//!
//! Resolution is a pure function of containment answers, domain and binding
//! metadata, explicit context, and defaults. It performs no I/O, reads no
//! clock, and is independent of the order in which the table lists its
//! domains.
//!
//! ## Crate Policy
//!
//! - The resolution path allocates nothing; all working sets are inline
//!   fixed-capacity arrays.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod ancestry;
pub mod candidate;
pub mod domain;
pub mod error;
pub mod law_context;
pub mod overlap;
pub mod resolver;
pub mod select;
pub mod world;

pub use candidate::{Candidate, CandidateSet};
pub use domain::{
    validate_domains, DomainEntry, JurisdictionBinding, MAX_DOMAIN_BINDINGS, MAX_SCANNED_DOMAINS,
};
pub use error::{ResolveError, WorldError};
pub use law_context::{
    build_law_context, LawContext, JURISDICTION_FLAG_REFUSED, JURISDICTION_FLAG_TRUNCATED,
    JURISDICTION_FLAG_UNCERTAIN, LAW_CONTEXT_MAX_JURISDICTIONS,
};
pub use resolver::{resolve_multi, resolve_point, Defaults, Resolution, Resolver};
pub use world::{BudgetConfig, WorldConfig};
