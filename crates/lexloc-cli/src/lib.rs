//! # lexloc-cli — Jurisdiction Resolution Command-Line Interface
//!
//! Loads a world file (domain table, defaults, geometry budget) and runs
//! the resolver from `lexloc-resolve` against points given on the command
//! line. Results are printed to stdout as JSON; logs go to stderr.
//!
//! ## Subcommands
//!
//! - `resolve` — resolve one point
//! - `path` — resolve a sequence of points as one path
//! - `context` — resolve and print the derived law context
//! - `check` — load and validate a world file
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates; no resolution logic
//!   lives here.
//! - Handlers write to a caller-supplied sink so they can be tested
//!   without capturing stdout.

pub mod check;
pub mod context;
pub mod resolve;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use lexloc_core::{JurisdictionId, JurisdictionList};
use lexloc_resolve::WorldConfig;

/// Arguments shared by every subcommand that resolves against a world.
#[derive(Args, Debug, Clone)]
pub struct WorldArgs {
    /// World file (YAML or JSON).
    #[arg(long)]
    pub world: PathBuf,

    /// Explicit jurisdiction ids, most authoritative first. They are placed
    /// ahead of everything the domain table contributes.
    #[arg(long, value_delimiter = ',')]
    pub context: Vec<u64>,
}

impl WorldArgs {
    /// Load the world named by `--world`.
    pub fn load(&self) -> Result<WorldConfig> {
        load_world(&self.world)
    }

    /// The explicit context as a list, or `None` when `--context` is absent.
    pub fn explicit_context(&self) -> Result<Option<JurisdictionList>> {
        parse_context(&self.context)
    }
}

/// Read and validate a world file.
///
/// Files ending in `.json` are parsed as JSON; anything else is parsed as
/// YAML.
pub fn load_world(path: &Path) -> Result<WorldConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read world file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let world = if is_json {
        WorldConfig::from_json_str(&source)
    } else {
        WorldConfig::from_yaml_str(&source)
    };
    let world = world.with_context(|| format!("invalid world file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        domains = world.domains.len(),
        "world loaded"
    );
    Ok(world)
}

/// Build an explicit context from raw ids. An empty slice means no
/// explicit context.
pub fn parse_context(ids: &[u64]) -> Result<Option<JurisdictionList>> {
    if ids.is_empty() {
        return Ok(None);
    }
    let list = JurisdictionList::from_ids(ids.iter().copied().map(JurisdictionId::new))
        .context("invalid --context")?;
    Ok(Some(list))
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::{write_world, WORLD_YAML};
    use super::*;

    #[test]
    fn loads_yaml_world() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_world(&dir, "world.yaml", WORLD_YAML);
        let world = load_world(&path).unwrap();
        assert_eq!(world.name.as_deref(), Some("harbor"));
        assert_eq!(world.domains.len(), 3);
    }

    #[test]
    fn json_extension_selects_json_parser() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_world(
            &dir,
            "world.JSON",
            r#"{"domains":[{"domain_id":1,"volume":{"kind":"unbounded"}}]}"#,
        );
        let world = load_world(&path).unwrap();
        assert_eq!(world.domains.len(), 1);
    }

    #[test]
    fn unknown_extension_parses_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_world(&dir, "world.cfg", "domains:\n  - domain_id: 4\n");
        let world = load_world(&path).unwrap();
        assert_eq!(world.domains[0].domain_id.get(), 4);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_world(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn invalid_world_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_world(&dir, "world.yaml", "domains:\n  - domain_id: 0\n");
        let err = load_world(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid world file"));
    }

    #[test]
    fn empty_context_is_none() {
        assert!(parse_context(&[]).unwrap().is_none());
    }

    #[test]
    fn context_keeps_order_and_drops_duplicates() {
        let list = parse_context(&[7, 3, 7]).unwrap().unwrap();
        let ids: Vec<u64> = list.iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn context_rejects_unset_id() {
        assert!(parse_context(&[5, 0]).is_err());
    }

    #[test]
    fn context_rejects_overflow() {
        let ids: Vec<u64> = (1..=17).collect();
        assert!(parse_context(&ids).is_err());
    }
}
