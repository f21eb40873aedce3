//! # Codex Compilation
//!
//! Turns each codex definition into a `code → field name` table and
//! accumulates the global set of codes.
//!
//! ## Precedence
//!
//! When a definition maps several names to one code, the **first** entry in
//! enumeration order keeps the code. The later entries are dropped from the
//! table, but their code is still recorded in the [`GlobalCodeSet`].
//! Downstream consumers depend on this exact precedence; it is neither
//! last-wins nor a rejection.
//!
//! ## Integrity
//!
//! Every field name is checked against the [`NameRegistry`] even though a
//! registry built from the same definitions always contains it. The compiler
//! is also run against registries built from a different subset, where the
//! check does fire.

use std::collections::BTreeSet;

use cesr_core::{CodexDefinition, CodexError, IntegrityError};
use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::NameRegistry;

/// A compiled codex: `code → field name`, in first-seen code order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompiledCodex {
    #[serde(skip)]
    label: String,
    table: IndexMap<String, String>,
}

impl CompiledCodex {
    /// Label of the source definition.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Field name mapped to `code`, if any.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.table.get(code).map(String::as_str)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// `(code, field name)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

/// Every distinct code observed across all compiled codices, including the
/// codes of entries that lost the first-write-wins tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalCodeSet {
    codes: BTreeSet<String>,
}

impl GlobalCodeSet {
    /// Returns true if `code` was observed.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no codes were observed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Extend<String> for GlobalCodeSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.codes.extend(iter);
    }
}

/// All compiled codices keyed by label, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodexTable {
    codices: IndexMap<String, CompiledCodex>,
}

impl CodexTable {
    /// Compiled codex for `label`, if present.
    pub fn get(&self, label: &str) -> Option<&CompiledCodex> {
        self.codices.get(label)
    }

    /// Number of compiled codices.
    pub fn len(&self) -> usize {
        self.codices.len()
    }

    /// Returns true if nothing was compiled.
    pub fn is_empty(&self) -> bool {
        self.codices.is_empty()
    }

    /// Compiled codices in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledCodex> {
        self.codices.values()
    }

    /// Insert a compiled codex under its label. A repeated label replaces the
    /// earlier table but keeps its position.
    pub fn insert(&mut self, codex: CompiledCodex) {
        if let Some(previous) = self.codices.insert(codex.label.clone(), codex) {
            tracing::warn!(codex = %previous.label, "codex label compiled twice; keeping the later table");
        }
    }
}

/// Compile one definition against the registry.
///
/// Returns the compiled table and every code the definition uses, including
/// duplicates dropped from the table.
///
/// # Errors
///
/// Returns `IntegrityError::UnknownName` for the first entry whose field name
/// is not registered.
pub fn compile_codex(
    definition: &CodexDefinition,
    registry: &NameRegistry,
) -> Result<(CompiledCodex, BTreeSet<String>), CodexError> {
    let mut table = IndexMap::new();
    let mut codes = BTreeSet::new();

    for entry in definition.entries() {
        if !registry.contains(&entry.name) {
            return Err(IntegrityError::UnknownName {
                codex: definition.label().to_string(),
                name: entry.name.clone(),
            }
            .into());
        }
        if !table.contains_key(&entry.code) {
            table.insert(entry.code.clone(), entry.name.clone());
        }
        codes.insert(entry.code.clone());
    }

    tracing::debug!(
        codex = %definition.label(),
        entries = definition.len(),
        codes = table.len(),
        "compiled codex"
    );

    Ok((
        CompiledCodex {
            label: definition.label().to_string(),
            table,
        },
        codes,
    ))
}

/// Compile every definition in order, accumulating the global code set.
///
/// Stops at the first integrity failure.
pub fn compile_all<'a>(
    definitions: impl IntoIterator<Item = &'a CodexDefinition>,
    registry: &NameRegistry,
) -> Result<(CodexTable, GlobalCodeSet), CodexError> {
    let mut table = CodexTable::default();
    let mut global = GlobalCodeSet::default();

    for def in definitions {
        let (compiled, codes) = compile_codex(def, registry)?;
        global.extend(codes);
        table.insert(compiled);
    }

    Ok((table, global))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cesr_core::CodexKind;

    fn registry_for(defs: &[CodexDefinition]) -> NameRegistry {
        NameRegistry::build(defs)
    }

    #[test]
    fn first_entry_wins_on_duplicate_code() {
        let def = CodexDefinition::new("Dup", [("First", "X"), ("Second", "X"), ("Other", "Y")]);
        let registry = registry_for(std::slice::from_ref(&def));
        let (compiled, codes) = compile_codex(&def, &registry).unwrap();

        assert_eq!(compiled.get("X"), Some("First"));
        assert_eq!(compiled.len(), 2);
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("X"));
    }

    #[test]
    fn table_keeps_first_seen_code_order() {
        let def = CodexDefinition::new("Ord", [("c", "3"), ("a", "1"), ("b", "2"), ("d", "1")]);
        let registry = registry_for(std::slice::from_ref(&def));
        let (compiled, _) = compile_codex(&def, &registry).unwrap();
        let order: Vec<_> = compiled.iter().map(|(code, _)| code).collect();
        assert_eq!(order, ["3", "1", "2"]);
    }

    #[test]
    fn unknown_name_is_an_integrity_error() {
        let known = CodexDefinition::new("Known", [("Alpha", "A")]);
        let registry = registry_for(std::slice::from_ref(&known));
        let stray = CodexDefinition::new("Stray", [("Alpha", "A"), ("Beta", "B")]);

        let err = compile_codex(&stray, &registry).unwrap_err();
        match err {
            CodexError::Integrity(IntegrityError::UnknownName { codex, name }) => {
                assert_eq!(codex, "Stray");
                assert_eq!(name, "Beta");
            }
            other => panic!("expected UnknownName, got {other:?}"),
        }
    }

    #[test]
    fn global_set_records_dropped_duplicates() {
        // "--AAA" is claimed by KERI_ACDC_SPAC; KERI and ACDC lose the tie
        // but the code still lands in the global set exactly once.
        let defs = vec![CodexKind::ProtocolGenus.definition()];
        let registry = registry_for(&defs);
        let (table, global) = compile_all(&defs, &registry).unwrap();

        let genus = table.get("ProtocolGenus").unwrap();
        assert_eq!(genus.len(), 1);
        assert_eq!(genus.get("--AAA"), Some("KERI_ACDC_SPAC"));
        assert!(global.contains("--AAA"));
        assert_eq!(global.len(), 1);
    }

    #[test]
    fn compile_all_reference_configuration() {
        let defs = CodexKind::all_definitions();
        let registry = registry_for(&defs);
        let (table, global) = compile_all(&defs, &registry).unwrap();

        assert_eq!(table.len(), cesr_core::CODEX_KIND_COUNT);
        let labels: Vec<_> = table.iter().map(CompiledCodex::label).collect();
        let expected: Vec<_> = CodexKind::all().iter().map(CodexKind::label).collect();
        assert_eq!(labels, expected);

        for def in &defs {
            for entry in def.entries() {
                assert!(global.contains(&entry.code));
            }
        }
        assert_eq!(table.get("Matter").unwrap().get("A"), Some("Ed25519_Seed"));
        assert_eq!(table.get("Cold").unwrap().get("json"), Some("JSON"));
    }

    #[test]
    fn compile_all_stops_at_first_failure() {
        let good = CodexDefinition::new("Good", [("Alpha", "A")]);
        let bad = CodexDefinition::new("Bad", [("Missing", "M")]);
        let registry = registry_for(std::slice::from_ref(&good));

        let result = compile_all([&good, &bad], &registry);
        assert!(matches!(
            result,
            Err(CodexError::Integrity(IntegrityError::UnknownName { .. }))
        ));
    }

    #[test]
    fn repeated_label_keeps_position_and_takes_later_table() {
        let a1 = CodexDefinition::new("A", [("One", "1")]);
        let b = CodexDefinition::new("B", [("Two", "2")]);
        let a2 = CodexDefinition::new("A", [("Three", "3")]);
        let registry = NameRegistry::build([&a1, &b, &a2]);

        let (table, global) = compile_all([&a1, &b, &a2], &registry).unwrap();
        let labels: Vec<_> = table.iter().map(CompiledCodex::label).collect();
        assert_eq!(labels, ["A", "B"]);
        assert_eq!(table.get("A").unwrap().get("3"), Some("Three"));
        assert!(global.contains("1"));
    }

    #[test]
    fn codex_table_serializes_label_to_code_map() {
        let def = CodexDefinition::new("Tiny", [("Zero", "0"), ("One", "1")]);
        let registry = registry_for(std::slice::from_ref(&def));
        let (table, _) = compile_all([&def], &registry).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Tiny":{"0":"Zero","1":"One"}}"#);
    }
}
