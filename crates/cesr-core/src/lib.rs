//! # cesr-core: Codex Source for the CESR Schema Compiler
//!
//! This crate is the leaf of the workspace. It holds the hand-authored codex
//! tables of the CESR encoding scheme and exposes them as plain data; the
//! `cesr-schema` crate compiles them into artifacts.
//!
//! ## Key Design Principles
//!
//! 1. **Closed set of codices.** `CodexKind` has one variant per codex
//!    family, 22 in total. Each variant owns a statically declared, ordered
//!    `(field name, code)` table. No reflection, no registration at runtime.
//!
//! 2. **Size records are opaque.** `SizeFamily` exposes each size-bearing
//!    family's `(code, RawSize)` pairs. Consumers pass the fields through in
//!    declaration order and never interpret the numbers.
//!
//! 3. **One error taxonomy.** `CodexError` covers integrity failures, a
//!    malformed persisted state, and I/O. Integrity failures are always fatal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cesr-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codex;
pub mod error;
pub mod sizes;
mod tables;

pub use codex::{
    label_from_type_name, CodexDefinition, CodexEntry, CodexKind, CODEX_KIND_COUNT, CODEX_SUFFIX,
};
pub use error::{CodexError, IntegrityError};
pub use sizes::{Cizage, RawSize, SizeFamily, Sizage, Xizage, SIZE_FAMILY_COUNT};
