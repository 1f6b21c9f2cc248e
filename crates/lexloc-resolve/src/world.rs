//! # World Configuration
//!
//! A world file describes one domain table over the reference [`Shape`]
//! volumes, the default jurisdictions, and an optional geometry budget.
//! It is loaded from YAML or JSON and validated before any resolution.
//!
//! ```yaml
//! name: archipelago
//! defaults:
//!   world: 1
//!   server: 2
//!   fallback: 3
//! budget:
//!   max_evaluations: 64
//! domains:
//!   - domain_id: 10
//!     volume: { kind: sphere, center: [0, 0, 0], radius: 8 }
//!     bindings:
//!       - { jurisdiction_id: 100, precedence: 1 }
//!   - domain_id: 11
//!     parent_domain_id: 10
//!     volume: { kind: sphere, center: [0, 0, 0], radius: 3 }
//!     bindings:
//!       - { jurisdiction_id: 101 }
//! ```

use serde::{Deserialize, Serialize};

use lexloc_core::{GeometryBudget, Shape, ValidationError};

use crate::domain::{validate_domains, DomainEntry};
use crate::error::WorldError;
use crate::resolver::{Defaults, Resolver};

/// Geometry budget applied to each resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Maximum containment evaluations per resolution; absent = unlimited.
    #[serde(default)]
    pub max_evaluations: Option<u32>,
}

impl BudgetConfig {
    /// A fresh budget for one resolution.
    pub fn budget(&self) -> GeometryBudget {
        match self.max_evaluations {
            Some(units) => GeometryBudget::limited(units),
            None => GeometryBudget::unlimited(),
        }
    }
}

/// A world: domain table, defaults, and budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Default jurisdictions appended to every resolution.
    #[serde(default)]
    pub defaults: Defaults,
    /// Per-resolution geometry budget.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// The domain table.
    #[serde(default)]
    pub domains: Vec<DomainEntry<Shape>>,
}

impl WorldConfig {
    /// Parse and validate a YAML world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Yaml`] on parse failure and
    /// [`WorldError::Validation`] on a structural violation.
    pub fn from_yaml_str(source: &str) -> Result<Self, WorldError> {
        let world: Self = serde_yaml::from_str(source)?;
        world.validate()?;
        Ok(world)
    }

    /// Parse and validate a JSON world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Json`] on parse failure and
    /// [`WorldError::Validation`] on a structural violation.
    pub fn from_json_str(source: &str) -> Result<Self, WorldError> {
        let world: Self = serde_json::from_str(source)?;
        world.validate()?;
        Ok(world)
    }

    /// Check the domain table and every volume.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_domains(&self.domains)?;
        for entry in &self.domains {
            if let Some(volume) = &entry.volume {
                volume.validate()?;
            }
        }
        Ok(())
    }

    /// A resolver over this world's table and defaults.
    pub fn resolver(&self) -> Resolver<'_, Shape> {
        Resolver::new(&self.domains, self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexloc_core::{DomainId, JurisdictionId, Point3};

    const WORLD: &str = r#"
name: archipelago
defaults:
  world: 1
  server: 2
  fallback: 3
budget:
  max_evaluations: 64
domains:
  - domain_id: 10
    volume: { kind: sphere, center: [0, 0, 0], radius: 8 }
    bindings:
      - { jurisdiction_id: 100, precedence: 1 }
  - domain_id: 11
    parent_domain_id: 10
    volume: { kind: sphere, center: [0, 0, 0], radius: 3 }
    bindings:
      - { jurisdiction_id: 101 }
"#;

    #[test]
    fn loads_documented_example() {
        let world = WorldConfig::from_yaml_str(WORLD).unwrap();
        assert_eq!(world.name.as_deref(), Some("archipelago"));
        assert_eq!(world.domains.len(), 2);
        assert_eq!(world.domains[1].parent_domain_id, DomainId::new(10));
        assert_eq!(world.budget.max_evaluations, Some(64));

        let mut budget = world.budget.budget();
        let out = world
            .resolver()
            .resolve_point(None, &Point3::new(1, 0, 0), Some(&mut budget));
        let ids: Vec<u64> = out.ordered.iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![101, 100, 1, 2, 3]);
        assert_eq!(budget.spent(), 2);
    }

    #[test]
    fn empty_document_fields_default() {
        let world = WorldConfig::from_yaml_str("{}").unwrap();
        assert!(world.domains.is_empty());
        assert_eq!(world.defaults.world, JurisdictionId::UNSET);
        assert_eq!(world.budget.budget(), GeometryBudget::unlimited());
    }

    #[test]
    fn json_is_accepted() {
        let json = r#"{"domains":[{"domain_id":4,"volume":{"kind":"unbounded"}}]}"#;
        let world = WorldConfig::from_json_str(json).unwrap();
        assert_eq!(world.domains[0].volume, Some(Shape::Unbounded));
    }

    #[test]
    fn rejects_duplicate_domain_ids() {
        let yaml = "domains:\n  - domain_id: 1\n  - domain_id: 1\n";
        assert!(matches!(
            WorldConfig::from_yaml_str(yaml),
            Err(WorldError::Validation(ValidationError::DuplicateDomain(_)))
        ));
    }

    #[test]
    fn rejects_inverted_cuboid() {
        let yaml = r#"
domains:
  - domain_id: 1
    volume: { kind: cuboid, min: [5, 0, 0], max: [0, 0, 0] }
"#;
        assert!(matches!(
            WorldConfig::from_yaml_str(yaml),
            Err(WorldError::Validation(ValidationError::InvalidVolume(_)))
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            WorldConfig::from_yaml_str("domains: [ {domain_id: }"),
            Err(WorldError::Yaml(_))
        ));
    }

    #[test]
    fn volumeless_domain_loads_as_ancestor() {
        let yaml = r#"
domains:
  - domain_id: 1
    bindings:
      - { jurisdiction_id: 50 }
  - domain_id: 2
    parent_domain_id: 1
    volume: { kind: unbounded }
    bindings:
      - { jurisdiction_id: 60 }
"#;
        let world = WorldConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(world.domains[0].volume, None);

        let out = world.resolver().resolve_point(None, &Point3::ORIGIN, None);
        let ids: Vec<u64> = out.ordered.iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![60, 50]);
    }
}
