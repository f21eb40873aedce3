//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout the codex compiler. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Integrity errors name the offending codex or size family together with
//!   the field name or code that fell outside the known universe.
//! - A malformed persisted counter state is fatal. There is no fallback to an
//!   empty state.
//! - I/O errors carry the path they occurred on and are otherwise surfaced
//!   unchanged.

use thiserror::Error;

/// Top-level error type for codex compilation.
#[derive(Error, Debug)]
pub enum CodexError {
    /// A referential-integrity check failed.
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// The persisted counter state exists but is not well-formed.
    #[error("malformed counter state '{path}': {reason}")]
    MalformedState {
        /// Path (or origin label) of the persisted state.
        path: String,
        /// Why the document was rejected.
        reason: String,
    },

    /// A codex label did not name any known codex.
    #[error("unknown codex: {0:?}")]
    UnknownCodex(String),

    /// Reading or writing an artifact failed.
    #[error("io error at '{path}': {source}")]
    Io {
        /// Path the operation was performed on.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodexError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// A name or code referenced outside the expected universe.
///
/// These indicate that the codex source itself is inconsistent. No artifact
/// produced alongside one of these can be trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// A codex entry uses a field name missing from the name registry.
    #[error("field name {name:?} of codex {codex} is not in the name registry")]
    UnknownName {
        /// Label of the codex being compiled.
        codex: String,
        /// The offending field name.
        name: String,
    },

    /// A size record is keyed by a code no compiled codex produced.
    #[error("size code {code:?} of family {family} is not in the global code set")]
    UnknownSizeCode {
        /// Name of the size-bearing family.
        family: String,
        /// The offending code.
        code: String,
    },

    /// A counter family required for the merge has no compiled codex.
    #[error("counter family {label} has no compiled codex")]
    MissingCodex {
        /// The missing codex label.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_error_display_names_codex_and_field() {
        let err = IntegrityError::UnknownName {
            codex: "Matter".to_string(),
            name: "Bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Matter"));
        assert!(msg.contains("\"Bogus\""));
    }

    #[test]
    fn integrity_converts_into_codex_error() {
        let err: CodexError = IntegrityError::UnknownSizeCode {
            family: "Counter".to_string(),
            code: "-?".to_string(),
        }
        .into();
        assert!(matches!(err, CodexError::Integrity(_)));
        assert!(err.to_string().starts_with("integrity error:"));
    }

    #[test]
    fn io_error_carries_path() {
        let err = CodexError::io(
            "out/counter.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/counter.json"));
        assert!(msg.contains("denied"));
    }
}
