//! # cesr-schema: Codex Table Compilation
//!
//! Compiles the codex source in `cesr-core` into four cross-validated
//! artifact tables for downstream CESR parsers and encoders.
//!
//! ## Stages
//!
//! The stages run strictly in order; each consumes state produced by the one
//! before it.
//!
//! 1. [`registry`]: [`NameRegistry::build`] collects every field name.
//! 2. [`compile`]: [`compile_all`] builds one `code → name` table per codex
//!    (first entry wins on a duplicate code) and the [`GlobalCodeSet`].
//! 3. [`sizes`]: [`build_size_table`] copies the size records of the
//!    size-bearing families, rejecting codes outside the global code set.
//! 4. [`counter`]: [`CounterState::merge`] folds the `Counter` and
//!    `AltCounter` tables into the persisted counter state without ever
//!    removing an entry.
//!
//! [`artifact`] ties the stages together and owns file output.
//!
//! ## Crate Policy
//!
//! - Depends only on `cesr-core` internally.
//! - Every check is eager and fail-fast. Errors are never accumulated and no
//!   artifact is written once a check has failed.
//! - Output is deterministic: identical inputs give byte-identical files.

pub mod artifact;
pub mod compile;
pub mod counter;
pub mod json;
pub mod registry;
pub mod sizes;

pub use artifact::{
    check, generate, ArtifactCheck, ArtifactKind, ArtifactStatus, Artifacts, RenderedArtifact,
    WrittenArtifact, CODEX_FILE, COUNTER_FILE, NAMES_FILE, SIZES_FILE,
};
pub use compile::{compile_all, compile_codex, CodexTable, CompiledCodex, GlobalCodeSet};
pub use counter::{CounterRecord, CounterState, MergeSummary, COUNTER_FAMILIES};
pub use registry::NameRegistry;
pub use sizes::{build_size_table, SizeDescriptor, SizeSource, SizeTable};
