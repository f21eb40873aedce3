//! # List Subcommand
//!
//! Prints a summary of the compiled codex table: one line per codex with its
//! declared entry count and the number of distinct codes that survive
//! first-wins deduplication, followed by the size families. With `--codex`
//! the entries of a single codex are printed instead.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use cesr_core::CodexKind;
use cesr_schema::{Artifacts, CounterState};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the code table of one codex, by label (`Matter`) or type name
    /// (`MatterCodex`).
    #[arg(long)]
    pub codex: Option<String>,
}

/// Execute the list subcommand.
///
/// The output directory is not read; listing always reflects the codex
/// source compiled into this binary.
pub fn run_list(args: &ListArgs, _output_dir: &Path) -> Result<u8> {
    let artifacts = Artifacts::compile_reference(CounterState::new())
        .context("failed to compile the reference codex source")?;

    if let Some(ref requested) = args.codex {
        let kind: CodexKind = requested.parse()?;
        let compiled = artifacts
            .codex
            .get(kind.label())
            .with_context(|| format!("codex {} missing from compiled table", kind.label()))?;
        println!("{} ({} codes)", kind.type_name(), compiled.len());
        for (code, name) in compiled.iter() {
            println!("  {code:<8} {name}");
        }
        return Ok(0);
    }

    println!("Codices:");
    for kind in CodexKind::all() {
        let distinct = artifacts.codex.get(kind.label()).map_or(0, |c| c.len());
        println!(
            "  {:<24} {:>4} entries {:>4} codes",
            kind.label(),
            kind.entries().len(),
            distinct
        );
    }

    println!();
    println!("Size tables:");
    for family in artifacts.sizes.families() {
        let records = artifacts.sizes.family_len(family).unwrap_or(0);
        println!("  {family:<24} {records:>4} records");
    }

    println!();
    println!("{} names registered", artifacts.names.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_list(&ListArgs { codex: None }, dir.path()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn list_single_codex_by_label_and_type_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Counter", "CounterCodex"] {
            let args = ListArgs {
                codex: Some(name.to_string()),
            };
            assert_eq!(run_list(&args, dir.path()).unwrap(), 0);
        }
    }

    #[test]
    fn list_unknown_codex_errors() {
        let dir = tempfile::tempdir().unwrap();
        let args = ListArgs {
            codex: Some("Nope".to_string()),
        };
        let err = run_list(&args, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown codex"));
    }

    #[test]
    fn list_does_not_write_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        run_list(&ListArgs { codex: None }, dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
