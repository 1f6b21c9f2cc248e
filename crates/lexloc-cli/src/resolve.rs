//! # Resolve CLI — Point and path resolution.
//!
//! ## Usage
//!
//! ```bash
//! # Jurisdictions in force at one point:
//! lexloc resolve --world harbor.yaml --point 1,0,0
//!
//! # Union over a path, first-seen order:
//! lexloc path --world harbor.yaml --point 0,0,0 --point 50,0,0
//!
//! # Force jurisdictions ahead of the spatial ones:
//! lexloc resolve --world harbor.yaml --point 1,0,0 --context 7,3
//! ```
//!
//! Both commands print the `Resolution` (ordered ids plus the refused,
//! uncertain and truncated flags) as JSON.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use lexloc_core::Point3;

use crate::{write_json, WorldArgs};

/// `resolve` arguments.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    /// Point to resolve, as `x,y,z`.
    #[arg(long, allow_hyphen_values = true)]
    pub point: Point3,
}

/// `path` arguments.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    /// Path points in order, as `x,y,z`. Repeat for each point.
    #[arg(long = "point", required = true, allow_hyphen_values = true)]
    pub points: Vec<Point3>,
}

/// Execute `resolve`.
pub fn run_resolve(args: &ResolveArgs, out: &mut dyn Write) -> Result<u8> {
    let world = args.world.load()?;
    let explicit = args.world.explicit_context()?;

    let mut budget = world.budget.budget();
    let resolution =
        world
            .resolver()
            .resolve_point(explicit.as_ref(), &args.point, Some(&mut budget));
    tracing::info!(point = %args.point, spent = budget.spent(), "point resolved");

    write_json(out, &resolution)?;
    Ok(0)
}

/// Execute `path`.
pub fn run_path(args: &PathArgs, out: &mut dyn Write) -> Result<u8> {
    let world = args.world.load()?;
    let explicit = args.world.explicit_context()?;

    let mut budget = world.budget.budget();
    let resolution =
        world
            .resolver()
            .resolve_path(explicit.as_ref(), &args.points, Some(&mut budget))?;
    tracing::info!(points = args.points.len(), spent = budget.spent(), "path resolved");

    write_json(out, &resolution)?;
    Ok(0)
}
