//! # Codex Definitions: Closed Set of Code Tables
//!
//! Defines the `CodexKind` enum with all 22 codex families of the CESR 1.x
//! reference configuration, and the `CodexDefinition` value the compiler
//! consumes. Every codex is a variant of one capability: it exposes an
//! ordered list of `(field name, code)` pairs. Each variant declares that
//! list statically in [`crate::tables`].
//!
//! ## Labels
//!
//! A codex label is its type name with the `Codex` suffix stripped, so
//! `MatterCodex` becomes `Matter`. Labels key the codex artifact and select
//! the counter families for the persisted merge.
//!
//! ## Duplicates
//!
//! Field names and codes are freely shared across codices, and a single
//! codex may map several names to one code (`ProtocolGenus` does). Neither
//! is an error here; the compiler decides precedence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CodexError;
use crate::tables;

/// Suffix stripped from a codex type name to form its label.
pub const CODEX_SUFFIX: &str = "Codex";

/// Derive a codex label from its type name.
///
/// Names without the suffix are returned unchanged.
pub fn label_from_type_name(type_name: &str) -> &str {
    type_name.strip_suffix(CODEX_SUFFIX).unwrap_or(type_name)
}

/// All codex families known to the compiler, in compilation order.
///
/// # Families
///
/// | # | Label | Contents |
/// |---|-------|----------|
/// |  1 | Cold | Stream cold-start selectors |
/// |  2 | Matter | Every primitive code |
/// |  3 | SmallVarRawSize | Lead bytes of small variable-size codes |
/// |  4 | LargeVarRawSize | Lead bytes of large variable-size codes |
/// |  5 | NonTrans | Non-transferable prefixes |
/// |  6 | Dig | Digests |
/// |  7 | Num | Numbers |
/// |  8 | Bext | Base64 text |
/// |  9 | Text | Raw bytes |
/// | 10 | CipherX25519Var | Variable-size X25519 ciphertext |
/// | 11 | CipherX25519FixQB64 | Fixed-size X25519 ciphertext of qb64 plaintext |
/// | 12 | CipherX25519VarQB64 | Variable-size X25519 ciphertext of qb64 plaintext |
/// | 13 | CipherX25519AllQB64 | All X25519 ciphertext of qb64 plaintext |
/// | 14 | CipherX25519QB2Var | Variable-size X25519 ciphertext of qb2 plaintext |
/// | 15 | Pre | Identifier prefixes |
/// | 16 | Indexer | Every indexed signature code |
/// | 17 | IndexedSig | Indexed signatures |
/// | 18 | IndexedCurrentSig | Current-only indexed signatures |
/// | 19 | IndexedBothSig | Both-list indexed signatures |
/// | 20 | Counter | Framing counters |
/// | 21 | ProtocolGenus | Protocol genus selectors |
/// | 22 | AltCounter | Alternate framing counters |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodexKind {
    Cold,
    Matter,
    SmallVarRawSize,
    LargeVarRawSize,
    NonTrans,
    Dig,
    Num,
    Bext,
    Text,
    CipherX25519Var,
    CipherX25519FixQB64,
    CipherX25519VarQB64,
    CipherX25519AllQB64,
    CipherX25519QB2Var,
    Pre,
    Indexer,
    IndexedSig,
    IndexedCurrentSig,
    IndexedBothSig,
    Counter,
    ProtocolGenus,
    AltCounter,
}

/// Total number of codex families. Used for compile-time assertions.
pub const CODEX_KIND_COUNT: usize = 22;

impl CodexKind {
    /// Returns all codex families in compilation order.
    pub fn all() -> &'static [CodexKind] {
        &[
            Self::Cold,
            Self::Matter,
            Self::SmallVarRawSize,
            Self::LargeVarRawSize,
            Self::NonTrans,
            Self::Dig,
            Self::Num,
            Self::Bext,
            Self::Text,
            Self::CipherX25519Var,
            Self::CipherX25519FixQB64,
            Self::CipherX25519VarQB64,
            Self::CipherX25519AllQB64,
            Self::CipherX25519QB2Var,
            Self::Pre,
            Self::Indexer,
            Self::IndexedSig,
            Self::IndexedCurrentSig,
            Self::IndexedBothSig,
            Self::Counter,
            Self::ProtocolGenus,
            Self::AltCounter,
        ]
    }

    /// The codex type name, e.g. `"MatterCodex"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cold => "ColdCodex",
            Self::Matter => "MatterCodex",
            Self::SmallVarRawSize => "SmallVarRawSizeCodex",
            Self::LargeVarRawSize => "LargeVarRawSizeCodex",
            Self::NonTrans => "NonTransCodex",
            Self::Dig => "DigCodex",
            Self::Num => "NumCodex",
            Self::Bext => "BextCodex",
            Self::Text => "TextCodex",
            Self::CipherX25519Var => "CipherX25519VarCodex",
            Self::CipherX25519FixQB64 => "CipherX25519FixQB64Codex",
            Self::CipherX25519VarQB64 => "CipherX25519VarQB64Codex",
            Self::CipherX25519AllQB64 => "CipherX25519AllQB64Codex",
            Self::CipherX25519QB2Var => "CipherX25519QB2VarCodex",
            Self::Pre => "PreCodex",
            Self::Indexer => "IndexerCodex",
            Self::IndexedSig => "IndexedSigCodex",
            Self::IndexedCurrentSig => "IndexedCurrentSigCodex",
            Self::IndexedBothSig => "IndexedBothSigCodex",
            Self::Counter => "CounterCodex",
            Self::ProtocolGenus => "ProtocolGenusCodex",
            Self::AltCounter => "AltCounterCodex",
        }
    }

    /// The codex label: type name without the `Codex` suffix.
    pub fn label(&self) -> &'static str {
        label_from_type_name(self.type_name())
    }

    /// The statically declared `(field name, code)` pairs, in order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Cold => tables::COLD,
            Self::Matter => tables::MATTER,
            Self::SmallVarRawSize => tables::SMALL_VAR_RAW_SIZE,
            Self::LargeVarRawSize => tables::LARGE_VAR_RAW_SIZE,
            Self::NonTrans => tables::NON_TRANS,
            Self::Dig => tables::DIG,
            Self::Num => tables::NUM,
            Self::Bext => tables::BEXT,
            Self::Text => tables::TEXT,
            Self::CipherX25519Var => tables::CIPHER_X25519_VAR,
            Self::CipherX25519FixQB64 => tables::CIPHER_X25519_FIX_QB64,
            Self::CipherX25519VarQB64 => tables::CIPHER_X25519_VAR_QB64,
            Self::CipherX25519AllQB64 => tables::CIPHER_X25519_ALL_QB64,
            Self::CipherX25519QB2Var => tables::CIPHER_X25519_QB2_VAR,
            Self::Pre => tables::PRE,
            Self::Indexer => tables::INDEXER,
            Self::IndexedSig => tables::INDEXED_SIG,
            Self::IndexedCurrentSig => tables::INDEXED_CURRENT_SIG,
            Self::IndexedBothSig => tables::INDEXED_BOTH_SIG,
            Self::Counter => tables::COUNTER,
            Self::ProtocolGenus => tables::PROTOCOL_GENUS,
            Self::AltCounter => tables::ALT_COUNTER,
        }
    }

    /// Build the owned definition the compiler consumes.
    pub fn definition(&self) -> CodexDefinition {
        CodexDefinition::new(self.label(), self.entries().iter().copied())
    }

    /// Definitions for every codex family, in compilation order.
    pub fn all_definitions() -> Vec<CodexDefinition> {
        Self::all().iter().map(CodexKind::definition).collect()
    }
}

impl std::fmt::Display for CodexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CodexKind {
    type Err = CodexError;

    /// Parse a codex family from its label or its full type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = label_from_type_name(s);
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| CodexError::UnknownCodex(s.to_string()))
    }
}

/// One `(field name, code)` pair of a codex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodexEntry {
    /// Semantic field name, e.g. `Ed25519_Seed`.
    pub name: String,
    /// Short symbolic code, e.g. `A`.
    pub code: String,
}

/// An immutable, labelled enumeration of codex entries.
///
/// Constructed once per run, either from a [`CodexKind`] or directly from
/// pairs when compiling a codex subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodexDefinition {
    label: String,
    entries: Vec<CodexEntry>,
}

impl CodexDefinition {
    /// Build a definition from a label and ordered `(name, code)` pairs.
    pub fn new<N, C>(label: impl Into<String>, entries: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            label: label.into(),
            entries: entries
                .into_iter()
                .map(|(name, code)| CodexEntry {
                    name: name.into(),
                    code: code.into(),
                })
                .collect(),
        }
    }

    /// The codex label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Entries in enumeration order.
    pub fn entries(&self) -> &[CodexEntry] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the codex has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
