//! # Artifact Pipeline
//!
//! Runs the four compilation stages in order and renders the results:
//!
//! | Artifact | File | Stage |
//! |----------|------|-------|
//! | names | `names.json` | [`NameRegistry::build`] |
//! | codex | `codex.json` | [`compile_all`] |
//! | sizes | `sizes.json` | [`build_size_table`] |
//! | counter state | `counter.json` | [`CounterState::merge`] |
//!
//! ## Read-Compute-Write
//!
//! The prior counter state is read first. Every stage then runs in memory,
//! and all four documents are rendered before the first byte is written.
//! Any integrity failure therefore aborts with the output directory
//! untouched. Each file is written to a temporary sibling and renamed over
//! the target, so a reader never sees a half-written artifact.
//!
//! ## Format
//!
//! JSON with two-space indentation, ASCII-only strings and no trailing
//! newline (see [`crate::json`]). Names are sorted; every other table keeps
//! definition or on-disk order.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use cesr_core::{CodexDefinition, CodexError, CodexKind};
use sha2::{Digest, Sha256};

use crate::compile::{compile_all, CodexTable};
use crate::counter::{CounterState, MergeSummary};
use crate::json::to_artifact_string;
use crate::registry::NameRegistry;
use crate::sizes::{build_size_table, SizeSource, SizeTable};

/// Sorted field names.
pub const NAMES_FILE: &str = "names.json";
/// Compiled codex tables.
pub const CODEX_FILE: &str = "codex.json";
/// Size tables.
pub const SIZES_FILE: &str = "sizes.json";
/// Persisted counter state.
pub const COUNTER_FILE: &str = "counter.json";

/// The four emitted artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Names,
    Codex,
    Sizes,
    CounterState,
}

impl ArtifactKind {
    /// All artifacts in emission order.
    pub fn all() -> &'static [ArtifactKind] {
        &[Self::Names, Self::Codex, Self::Sizes, Self::CounterState]
    }

    /// File name of the artifact inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Names => NAMES_FILE,
            Self::Codex => CODEX_FILE,
            Self::Sizes => SIZES_FILE,
            Self::CounterState => COUNTER_FILE,
        }
    }

    /// Short identifier used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Codex => "codex",
            Self::Sizes => "sizes",
            Self::CounterState => "counter-state",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-memory result of one compilation run.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub names: NameRegistry,
    pub codex: CodexTable,
    pub sizes: SizeTable,
    pub counter: CounterState,
    pub merge: MergeSummary,
}

impl Artifacts {
    /// Run all four stages over the given inputs.
    ///
    /// # Errors
    ///
    /// Fails on the first integrity violation. Nothing is partially built.
    pub fn compile(
        definitions: &[CodexDefinition],
        size_sources: &[SizeSource],
        prior_counter: CounterState,
    ) -> Result<Self, CodexError> {
        let names = NameRegistry::build(definitions);
        let (codex, codes) = compile_all(definitions, &names)?;
        tracing::debug!(codices = codex.len(), codes = codes.len(), "compiled codex table");

        let sizes = build_size_table(size_sources, &codes)?;

        let mut counter = prior_counter;
        let merge = counter.merge(&codex)?;

        Ok(Self {
            names,
            codex,
            sizes,
            counter,
            merge,
        })
    }

    /// Run all four stages over the reference codex source.
    pub fn compile_reference(prior_counter: CounterState) -> Result<Self, CodexError> {
        Self::compile(
            &CodexKind::all_definitions(),
            &SizeSource::reference(),
            prior_counter,
        )
    }

    /// Render every artifact, in emission order.
    pub fn render(&self) -> Result<Vec<RenderedArtifact>, CodexError> {
        ArtifactKind::all()
            .iter()
            .map(|kind| -> Result<RenderedArtifact, CodexError> {
                let text = match kind {
                    ArtifactKind::Names => to_artifact_string(&self.names)?,
                    ArtifactKind::Codex => to_artifact_string(&self.codex)?,
                    ArtifactKind::Sizes => to_artifact_string(&self.sizes)?,
                    ArtifactKind::CounterState => self.counter.to_json_pretty()?,
                };
                Ok(RenderedArtifact {
                    kind: *kind,
                    bytes: text.into_bytes(),
                })
            })
            .collect()
    }
}

/// One rendered artifact document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub bytes: Vec<u8>,
}

impl RenderedArtifact {
    /// Lowercase hex SHA-256 of the document bytes.
    pub fn sha256_hex(&self) -> String {
        sha256_hex(&self.bytes)
    }

    /// Target path inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.kind.file_name())
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// An artifact written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub sha256: String,
}

/// Freshness of one on-disk artifact relative to a fresh compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// The file matches byte for byte.
    Current,
    /// The file exists but differs.
    Stale,
    /// The file does not exist.
    Missing,
}

/// Result of [`check`] for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// Compile the reference configuration against the counter state in
/// `output_dir` and write all four artifacts there.
///
/// # Errors
///
/// Integrity and malformed-state failures abort before any file is written.
/// I/O failures are reported with the path involved.
pub fn generate(output_dir: &Path) -> Result<Vec<WrittenArtifact>, CodexError> {
    let rendered = compile_in(output_dir)?.render()?;

    fs::create_dir_all(output_dir).map_err(|e| CodexError::io(output_dir, e))?;

    let mut written = Vec::with_capacity(rendered.len());
    for artifact in rendered {
        let path = artifact.path_in(output_dir);
        write_atomic(&path, &artifact.bytes)?;
        let sha256 = artifact.sha256_hex();
        tracing::info!(artifact = %artifact.kind, path = %path.display(), %sha256, "wrote artifact");
        written.push(WrittenArtifact {
            kind: artifact.kind,
            path,
            sha256,
        });
    }
    Ok(written)
}

/// Compile as [`generate`] would and compare against `output_dir` without
/// writing anything.
pub fn check(output_dir: &Path) -> Result<Vec<ArtifactCheck>, CodexError> {
    let rendered = compile_in(output_dir)?.render()?;

    let mut checks = Vec::with_capacity(rendered.len());
    for artifact in rendered {
        let path = artifact.path_in(output_dir);
        let status = match fs::read(&path) {
            Ok(existing) if existing == artifact.bytes => ArtifactStatus::Current,
            Ok(_) => ArtifactStatus::Stale,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ArtifactStatus::Missing,
            Err(e) => return Err(CodexError::io(&path, e)),
        };
        tracing::debug!(artifact = %artifact.kind, ?status, "checked artifact");
        checks.push(ArtifactCheck {
            kind: artifact.kind,
            path,
            status,
        });
    }
    Ok(checks)
}

fn compile_in(output_dir: &Path) -> Result<Artifacts, CodexError> {
    let prior = CounterState::load(output_dir.join(COUNTER_FILE))?;
    Artifacts::compile_reference(prior)
}

/// Write `bytes` to `path` through a temporary sibling and a rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CodexError> {
    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(CodexError::io(&tmp_path, e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CodexError::io(path, e)
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp.{}", std::process::id()));
    path.with_file_name(name)
}
