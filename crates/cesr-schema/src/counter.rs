//! # Persisted Counter State
//!
//! The counter state is the one artifact that survives across runs. It maps
//! each counter family to `code → record`, where a record is an arbitrary
//! JSON object holding at least `name`. Curators may add their own keys to a
//! record, and their own top-level entries to the document; the merge must
//! never lose or alter them.
//!
//! ## Merge Semantics
//!
//! For each of [`COUNTER_FAMILIES`]:
//!
//! 1. A missing family is created empty. Other top-level entries are never
//!    touched, whatever their shape.
//! 2. A missing code gets an empty record.
//! 3. `record["name"]` is set to the compiled field name, unconditionally.
//! 4. Families and codes absent from the compiled codex stay. The state is a
//!    durable registry of every code ever seen, so it only grows.
//!
//! The name is rewritten even when it already matches, so the merge cannot
//! tell a refreshed entry from one that was already current.
//!
//! ## Failure Mode
//!
//! A state file that exists but is not a JSON object, or whose `Counter` or
//! `AltCounter` entry is not a `code → object` mapping, is rejected with
//! `CodexError::MalformedState`. There is no fallback to an empty state:
//! that would silently discard curated fields.

use std::path::Path;

use cesr_core::{CodexError, IntegrityError};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::compile::CodexTable;
use crate::json::to_artifact_string;

/// Codex labels merged into the persisted state, in merge order.
pub const COUNTER_FAMILIES: [&str; 2] = ["Counter", "AltCounter"];

/// Key refreshed on every merge.
pub const NAME_KEY: &str = "name";

/// A free-form counter record. Always a JSON object.
pub type CounterRecord = Map<String, Value>;

/// The persisted document, in on-disk order with new keys appended.
///
/// Invariant: every entry named in [`COUNTER_FAMILIES`] that is present is
/// an object whose values are all objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CounterState {
    document: Map<String, Value>,
}

/// What a merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Families created by this merge.
    pub families_added: usize,
    /// Codes that had no record before this merge.
    pub codes_added: usize,
    /// Records whose `name` was written (new and existing alike).
    pub names_written: usize,
}

impl CounterState {
    /// An empty state, as on the first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted state from `path`.
    ///
    /// A missing file yields an empty state.
    ///
    /// # Errors
    ///
    /// Returns `CodexError::MalformedState` if the file exists but is not a
    /// well-formed state document, and `CodexError::Io` if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodexError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no prior counter state; starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(CodexError::io(path, e)),
        };
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Parse a state document. `origin` names the source in errors.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, CodexError> {
        let malformed = |reason: String| CodexError::MalformedState {
            path: origin.to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
        let document = match value {
            Value::Object(document) => document,
            other => {
                return Err(malformed(format!(
                    "expected an object, found {}",
                    kind_of(&other)
                )))
            }
        };

        for family in COUNTER_FAMILIES {
            let Some(records) = document.get(family) else {
                continue;
            };
            let Value::Object(records) = records else {
                return Err(malformed(format!(
                    "family {family} must be an object, found {}",
                    kind_of(records)
                )));
            };
            for (code, record) in records {
                if !record.is_object() {
                    return Err(malformed(format!(
                        "record {family}.{code} must be an object, found {}",
                        kind_of(record)
                    )));
                }
            }
        }

        Ok(Self { document })
    }

    /// Merge the compiled counter codices into this state.
    ///
    /// Both counter families must be present in `codex`; the check happens
    /// before anything is modified.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::MissingCodex` if a counter family was not
    /// compiled.
    pub fn merge(&mut self, codex: &CodexTable) -> Result<MergeSummary, CodexError> {
        let mut compiled = Vec::with_capacity(COUNTER_FAMILIES.len());
        for family in COUNTER_FAMILIES {
            let table = codex.get(family).ok_or_else(|| IntegrityError::MissingCodex {
                label: family.to_string(),
            })?;
            compiled.push((family, table));
        }

        let mut summary = MergeSummary::default();
        for (family, table) in compiled {
            let entry = self.document.entry(family).or_insert_with(|| {
                summary.families_added += 1;
                Value::Object(Map::new())
            });
            // Shape checked on load.
            let Value::Object(records) = entry else {
                continue;
            };
            for (code, name) in table.iter() {
                let record = records.entry(code).or_insert_with(|| {
                    summary.codes_added += 1;
                    Value::Object(Map::new())
                });
                if let Value::Object(record) = record {
                    record.insert(NAME_KEY.to_string(), Value::String(name.to_string()));
                    summary.names_written += 1;
                }
            }
        }

        tracing::debug!(
            families_added = summary.families_added,
            codes_added = summary.codes_added,
            names_written = summary.names_written,
            "merged counter state"
        );
        Ok(summary)
    }

    /// Records of `family`, if present and an object.
    pub fn family(&self, family: &str) -> Option<&Map<String, Value>> {
        self.document.get(family)?.as_object()
    }

    /// Record of `code` in `family`, if present.
    pub fn record(&self, family: &str, code: &str) -> Option<&CounterRecord> {
        self.family(family)?.get(code)?.as_object()
    }

    /// Top-level entry for `key`, whatever its shape.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Top-level keys in state order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Render the state in artifact form.
    pub fn to_json_pretty(&self) -> Result<String, CodexError> {
        to_artifact_string(self)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
