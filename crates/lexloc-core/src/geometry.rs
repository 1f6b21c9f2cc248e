//! # Fixed-Point Geometry Primitives
//!
//! World positions and axis-aligned extents. Coordinates are `i64`
//! fixed-point world units; no floating point enters the resolution path,
//! so every comparison is bit-identical across platforms and replays.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A point in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct Point3 {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
}

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Construct a point.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Squared euclidean distance, saturating at `u128::MAX`.
    pub fn distance_squared(&self, other: &Point3) -> u128 {
        let dx = u128::from(self.x.abs_diff(other.x));
        let dy = u128::from(self.y.abs_diff(other.y));
        let dz = u128::from(self.z.abs_diff(other.z));
        (dx * dx).saturating_add(dy * dy).saturating_add(dz * dz)
    }
}

impl From<[i64; 3]> for Point3 {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [i64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Point3 {
    type Err = ValidationError;

    /// Parse `x,y,z` (whitespace around components is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ValidationError::InvalidPoint(format!(
                "point must have three comma-separated coordinates, got {s:?}"
            )));
        }
        let mut coords = [0i64; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                ValidationError::InvalidPoint(format!("invalid coordinate {part:?} in {s:?}"))
            })?;
        }
        Ok(Self::from(coords))
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Construct a box from its corners.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVolume`] if `min` exceeds `max` on
    /// any axis.
    pub fn new(min: Point3, max: Point3) -> Result<Self, ValidationError> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(ValidationError::InvalidVolume(format!(
                "box min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// L1 extent `|Δx| + |Δy| + |Δz|`, saturating at `u64::MAX`.
    ///
    /// This is the specificity key: smaller extents are more specific.
    pub fn l1_extent(&self) -> u64 {
        self.max
            .x
            .abs_diff(self.min.x)
            .saturating_add(self.max.y.abs_diff(self.min.y))
            .saturating_add(self.max.z.abs_diff(self.min.z))
    }

    /// Whether `point` lies strictly inside the box on every axis.
    pub fn contains_strict(&self, point: &Point3) -> bool {
        self.min.x < point.x
            && point.x < self.max.x
            && self.min.y < point.y
            && point.y < self.max.y
            && self.min.z < point.z
            && point.z < self.max.z
    }
}
