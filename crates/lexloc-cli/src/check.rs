//! # Check CLI — World file validation.
//!
//! Loads a world, runs structural validation, and prints a short summary.
//! A world that fails to parse or validate exits non-zero with the reason.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lexloc_core::JurisdictionId;

use crate::load_world;

/// `check` arguments.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// World file (YAML or JSON).
    #[arg(long)]
    pub world: PathBuf,
}

/// Execute `check`.
pub fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<u8> {
    let world = load_world(&args.world)?;

    let volumes = world.domains.iter().filter(|d| d.volume.is_some()).count();
    let bindings: usize = world.domains.iter().map(|d| d.bindings.len()).sum();
    let defaults = [
        world.defaults.world,
        world.defaults.server,
        world.defaults.fallback,
    ]
    .iter()
    .filter(|id| !id.is_unset())
    .map(JurisdictionId::to_string)
    .collect::<Vec<_>>();

    let write = |out: &mut dyn Write| -> std::io::Result<()> {
        writeln!(out, "OK: {}", args.world.display())?;
        writeln!(out, "  name:     {}", world.name.as_deref().unwrap_or("-"))?;
        writeln!(out, "  domains:  {} ({volumes} with volume)", world.domains.len())?;
        writeln!(out, "  bindings: {bindings}")?;
        if defaults.is_empty() {
            writeln!(out, "  defaults: none")?;
        } else {
            writeln!(out, "  defaults: {}", defaults.join(", "))?;
        }
        match world.budget.max_evaluations {
            Some(max) => writeln!(out, "  budget:   {max} evaluations"),
            None => writeln!(out, "  budget:   unlimited"),
        }
    };
    write(out).context("failed to write output")?;
    Ok(0)
}
