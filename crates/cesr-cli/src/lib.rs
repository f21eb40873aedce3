//! # cesr-cli: Command-Line Interface for the CESR Schema Compiler
//!
//! Provides the `cesr` binary. Argument parsing lives here; all compilation
//! logic is delegated to `cesr-schema`.
//!
//! ## Subcommands
//!
//! - `cesr generate`: compile the codex source and write `names.json`,
//!   `codex.json`, `sizes.json` and `counter.json`.
//! - `cesr check`: compile in memory and report artifacts that are missing
//!   or out of date, without writing.
//! - `cesr list`: summarise the codex families and size tables.
//!
//! ```bash
//! cesr generate --output-dir schema/
//! cesr -v check --output-dir schema/
//! cesr list --codex Counter
//! ```

pub mod check;
pub mod generate;
pub mod list;

use std::path::{Path, PathBuf};

/// Resolve the artifact directory: the `--output-dir` value if given,
/// otherwise `cwd`.
pub fn resolve_output_dir(output_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    match output_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    }
}
