//! # lexloc-core — Foundational Types for Jurisdiction Resolution
//!
//! This crate is the leaf of the lexloc workspace. It defines the value
//! types every resolution is built from and the boundary to the geometry
//! layer that answers containment queries.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `JurisdictionId` and `DomainId` are distinct
//!    types; both reserve `0` ("unset" / "no parent").
//!
//! 2. **Fixed capacity, observable overflow.** `JurisdictionList` holds at
//!    most 16 ids inline and rejects a push beyond that with an error rather
//!    than dropping or overwriting an entry.
//!
//! 3. **Integer geometry.** `Point3` and `Aabb` are `i64` fixed-point. No
//!    floating point enters the resolution path.
//!
//! 4. **Geometry behind a trait.** Containment is answered by a caller's
//!    `Volume` implementation, charged against a `GeometryBudget`. `Shape`
//!    is the reference implementation used by world files and tests.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lexloc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No allocation on the list or containment paths.

pub mod error;
pub mod geometry;
pub mod identity;
pub mod jurisdiction;
pub mod volume;

// Re-export primary types for ergonomic imports.
pub use error::{LexlocError, ListError, ValidationError};
pub use geometry::{Aabb, Point3};
pub use identity::{DomainId, JurisdictionId};
pub use jurisdiction::{JurisdictionList, JURISDICTION_LIST_CAPACITY};
pub use volume::{
    Confidence, Containment, ContainmentStatus, GeometryBudget, Shape, Volume, SHAPE_QUERY_COST,
};
