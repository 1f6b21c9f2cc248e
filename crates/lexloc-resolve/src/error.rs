//! Resolution errors.
//!
//! Only invalid calls are errors. Geometric refusal, doubt, and capacity
//! overflow are reported on the [`Resolution`](crate::Resolution) itself.

use thiserror::Error;

use lexloc_core::ValidationError;

/// Hard failure of a resolve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path resolver was given no points.
    #[error("path resolution requires at least one point")]
    EmptyPath,
}

/// Failure to load or validate a world description.
#[derive(Error, Debug)]
pub enum WorldError {
    /// The YAML document could not be parsed.
    #[error("invalid world YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("invalid world JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed world violates a structural rule.
    #[error("invalid world: {0}")]
    Validation(#[from] ValidationError),
}
