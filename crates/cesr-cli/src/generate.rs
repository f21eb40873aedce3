//! # Generate Subcommand
//!
//! Compiles the codex source and writes the four artifacts into the output
//! directory, merging into any `counter.json` already there.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Suppress the per-artifact digest report.
    #[arg(long)]
    pub quiet: bool,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, output_dir: &Path) -> Result<u8> {
    let written = cesr_schema::generate(output_dir).with_context(|| {
        format!("failed to generate artifacts in {}", output_dir.display())
    })?;

    if !args.quiet {
        for artifact in &written {
            println!(
                "  {:<14} {}  {}",
                artifact.kind.as_str(),
                artifact.sha256,
                artifact.path.display()
            );
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cesr_schema::{COUNTER_FILE, NAMES_FILE};

    #[test]
    fn generate_into_empty_dir_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_generate(&GenerateArgs { quiet: true }, dir.path()).unwrap();
        assert_eq!(code, 0);
        assert!(dir.path().join(NAMES_FILE).is_file());
        assert!(dir.path().join(COUNTER_FILE).is_file());
    }

    #[test]
    fn generate_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        run_generate(&GenerateArgs { quiet: true }, &nested).unwrap();
        assert!(nested.join(NAMES_FILE).is_file());
    }

    #[test]
    fn generate_with_malformed_state_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(COUNTER_FILE), b"not json").unwrap();
        let err = run_generate(&GenerateArgs { quiet: true }, dir.path()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("malformed counter state"), "{chain}");
    }
}
