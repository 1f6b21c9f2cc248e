//! # Context CLI — Law-context derivation.
//!
//! Resolves one point, or a path when `--point` is repeated, and prints the
//! bounded law context an authorization layer would receive for the given
//! authority.
//!
//! ```bash
//! lexloc context --world harbor.yaml --point 1,0,0 \
//!     --authority-id 42 --authority-kind 1
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;

use lexloc_core::Point3;
use lexloc_resolve::build_law_context;

use crate::{write_json, WorldArgs};

/// `context` arguments.
#[derive(Args, Debug)]
pub struct ContextArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    /// Point(s) as `x,y,z`. Several points are resolved as a path.
    #[arg(long = "point", required = true, allow_hyphen_values = true)]
    pub points: Vec<Point3>,

    /// Opaque id of the acting authority.
    #[arg(long)]
    pub authority_id: u64,

    /// Opaque kind of the acting authority.
    #[arg(long)]
    pub authority_kind: u32,
}

/// Execute `context`.
pub fn run_context(args: &ContextArgs, out: &mut dyn Write) -> Result<u8> {
    let world = args.world.load()?;
    let explicit = args.world.explicit_context()?;
    let resolver = world.resolver();

    let mut budget = world.budget.budget();
    let resolution = match args.points.as_slice() {
        [point] => resolver.resolve_point(explicit.as_ref(), point, Some(&mut budget)),
        points => resolver.resolve_path(explicit.as_ref(), points, Some(&mut budget))?,
    };

    let context = build_law_context(args.authority_id, args.authority_kind, &resolution);
    if context.is_truncated() {
        tracing::warn!(
            resolved = resolution.ordered.len(),
            kept = context.jurisdiction_count,
            "law context is truncated"
        );
    }

    write_json(out, &context)?;
    Ok(0)
}
