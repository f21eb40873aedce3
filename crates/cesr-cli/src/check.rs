//! # Check Subcommand
//!
//! Deterministic verification: compiles the codex source in memory and
//! compares each artifact with the file on disk. Nothing is written. Exits
//! with status 1 when any artifact is missing or stale, so CI can require
//! committed tables to be current.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use cesr_schema::ArtifactStatus;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only report problems; stay silent when everything is current.
    #[arg(long)]
    pub quiet: bool,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, output_dir: &Path) -> Result<u8> {
    let checks = cesr_schema::check(output_dir)
        .with_context(|| format!("failed to check artifacts in {}", output_dir.display()))?;

    let mut out_of_date = 0usize;
    for c in &checks {
        let label = match c.status {
            ArtifactStatus::Current => "ok",
            ArtifactStatus::Stale => "STALE",
            ArtifactStatus::Missing => "MISSING",
        };
        if c.status != ArtifactStatus::Current {
            out_of_date += 1;
            tracing::warn!(
                artifact = %c.kind,
                path = %c.path.display(),
                status = ?c.status,
                "artifact out of date"
            );
        }
        if !args.quiet || c.status != ArtifactStatus::Current {
            println!("  {label:<8} {}", c.path.display());
        }
    }

    if out_of_date == 0 {
        Ok(0)
    } else {
        println!();
        println!(
            "{out_of_date} of {} artifacts out of date; run `cesr generate`",
            checks.len()
        );
        Ok(1)
    }
}
