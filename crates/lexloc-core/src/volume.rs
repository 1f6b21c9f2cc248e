//! # Containment Boundary
//!
//! The geometric containment predicate is owned by the world layer. This
//! module fixes its call boundary, the [`Volume`] trait, and the bookkeeping
//! types that cross it:
//!
//! - [`Containment`] — `(inside, status, confidence)` answer for one query.
//! - [`GeometryBudget`] — per-resolution cost bound, decremented by volumes.
//! - [`Shape`] — deterministic reference volumes (sphere, box, unbounded)
//!   used by world files and tests.
//!
//! ## Budget Semantics
//!
//! A volume that cannot afford a query answers
//! [`Containment::refused()`]: `status = Refused`, `confidence = Unknown`.
//! The resolver turns that into advisory flags instead of aborting.
//!
//! A single budget is mutable state. Do not share one across concurrent
//! resolutions; allocate one per call.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::{Aabb, Point3};

/// Whether the predicate evaluated the query at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentStatus {
    /// The query was evaluated.
    Ok,
    /// The query was refused, typically because the budget ran out.
    Refused,
}

/// Certainty of a containment answer. Only [`Confidence::Exact`] answers are
/// treated as definite jurisdiction membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The answer is exact.
    Exact,
    /// The answer is an approximation (e.g. a bounding-volume shortcut).
    Approximate,
    /// Nothing is known.
    Unknown,
}

/// One containment answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Containment {
    /// Whether the point is reported inside.
    pub inside: bool,
    /// Whether the query was evaluated.
    pub status: ContainmentStatus,
    /// How certain the answer is.
    pub confidence: Confidence,
}

impl Containment {
    /// An evaluated, exact answer.
    pub const fn exact(inside: bool) -> Self {
        Self {
            inside,
            status: ContainmentStatus::Ok,
            confidence: Confidence::Exact,
        }
    }

    /// An evaluated, approximate answer.
    pub const fn approximate(inside: bool) -> Self {
        Self {
            inside,
            status: ContainmentStatus::Ok,
            confidence: Confidence::Approximate,
        }
    }

    /// A refused query.
    pub const fn refused() -> Self {
        Self {
            inside: false,
            status: ContainmentStatus::Refused,
            confidence: Confidence::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// GeometryBudget
// ---------------------------------------------------------------------------

/// Cost bound for containment queries within one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBudget {
    /// Units left, or `None` when unlimited.
    remaining: Option<u32>,
    /// Units spent so far.
    spent: u32,
}

impl GeometryBudget {
    /// A budget that never refuses.
    pub const fn unlimited() -> Self {
        Self {
            remaining: None,
            spent: 0,
        }
    }

    /// A budget allowing `units` of evaluation cost.
    pub const fn limited(units: u32) -> Self {
        Self {
            remaining: Some(units),
            spent: 0,
        }
    }

    /// Spend `cost` units. Returns `false`, spending nothing, when the
    /// budget cannot cover it.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        match self.remaining {
            None => {
                self.spent = self.spent.saturating_add(cost);
                true
            }
            Some(left) if left >= cost => {
                self.remaining = Some(left - cost);
                self.spent = self.spent.saturating_add(cost);
                true
            }
            Some(_) => false,
        }
    }

    /// Units left, or `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Units spent so far.
    pub fn spent(&self) -> u32 {
        self.spent
    }

    /// Whether no further unit can be spent.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

impl Default for GeometryBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

// ---------------------------------------------------------------------------
// Volume
// ---------------------------------------------------------------------------

/// A region of world space that can answer containment queries.
pub trait Volume {
    /// Answer whether `point` lies inside, charging `budget` for the work.
    fn contains(&self, point: &Point3, budget: &mut GeometryBudget) -> Containment;

    /// Axis-aligned source bounds, if the volume has resolvable ones.
    fn bounds(&self) -> Option<Aabb>;
}

impl<V: Volume + ?Sized> Volume for &V {
    fn contains(&self, point: &Point3, budget: &mut GeometryBudget) -> Containment {
        (**self).contains(point, budget)
    }

    fn bounds(&self) -> Option<Aabb> {
        (**self).bounds()
    }
}

impl<V: Volume + ?Sized> Volume for Box<V> {
    fn contains(&self, point: &Point3, budget: &mut GeometryBudget) -> Containment {
        (**self).contains(point, budget)
    }

    fn bounds(&self) -> Option<Aabb> {
        (**self).bounds()
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Evaluation cost of one reference-shape query.
pub const SHAPE_QUERY_COST: u32 = 1;

/// Reference volumes with exact, integer-only containment.
///
/// Containment is strict: points on a sphere's shell or a box's faces are
/// outside, matching a signed distance `d < 0` test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Ball of `radius` around `center`.
    Sphere {
        /// Center point.
        center: Point3,
        /// Radius in world units.
        radius: u64,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Minimum corner.
        min: Point3,
        /// Maximum corner.
        max: Point3,
    },
    /// Contains every point, with no source bounds.
    Unbounded,
}

impl Shape {
    /// Sphere constructor.
    pub const fn sphere(center: Point3, radius: u64) -> Self {
        Self::Sphere { center, radius }
    }

    /// Box constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVolume`] for inverted corners.
    pub fn cuboid(min: Point3, max: Point3) -> Result<Self, ValidationError> {
        Aabb::new(min, max)?;
        Ok(Self::Cuboid { min, max })
    }

    /// Check structural validity (deserialized shapes bypass constructors).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVolume`] for inverted box corners.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Cuboid { min, max } => Aabb::new(*min, *max).map(|_| ()),
            Self::Sphere { .. } | Self::Unbounded => Ok(()),
        }
    }
}

impl Volume for Shape {
    fn contains(&self, point: &Point3, budget: &mut GeometryBudget) -> Containment {
        if !budget.try_spend(SHAPE_QUERY_COST) {
            return Containment::refused();
        }
        match self {
            Self::Sphere { center, radius } => {
                let r = u128::from(*radius);
                Containment::exact(center.distance_squared(point) < r * r)
            }
            Self::Cuboid { min, max } => Containment::exact(
                Aabb {
                    min: *min,
                    max: *max,
                }
                .contains_strict(point),
            ),
            Self::Unbounded => Containment::exact(true),
        }
    }

    fn bounds(&self) -> Option<Aabb> {
        match self {
            Self::Sphere { center, radius } => {
                let r = i64::try_from(*radius).unwrap_or(i64::MAX);
                Some(Aabb {
                    min: Point3::new(
                        center.x.saturating_sub(r),
                        center.y.saturating_sub(r),
                        center.z.saturating_sub(r),
                    ),
                    max: Point3::new(
                        center.x.saturating_add(r),
                        center.y.saturating_add(r),
                        center.z.saturating_add(r),
                    ),
                })
            }
            Self::Cuboid { min, max } => Some(Aabb {
                min: *min,
                max: *max,
            }),
            Self::Unbounded => None,
        }
    }
}
