//! # Name Registry
//!
//! The union of every field name across a set of codex definitions. Built
//! in one pass and read-only afterwards; the codex compiler uses it as the
//! validation oracle for field names.

use std::collections::BTreeSet;

use cesr_core::CodexDefinition;
use serde::Serialize;

/// Sorted set of every known field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameRegistry {
    names: BTreeSet<String>,
}

impl NameRegistry {
    /// Collect the field names of every definition.
    ///
    /// Empty input yields an empty registry. Never fails.
    pub fn build<'a>(definitions: impl IntoIterator<Item = &'a CodexDefinition>) -> Self {
        let mut names = BTreeSet::new();
        for def in definitions {
            for entry in def.entries() {
                names.insert(entry.name.clone());
            }
        }
        tracing::debug!(names = names.len(), "built name registry");
        Self { names }
    }

    /// Returns true if `name` is a registered field name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in sorted order, as an owned list.
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cesr_core::CodexKind;

    #[test]
    fn empty_input_yields_empty_registry() {
        let registry = NameRegistry::build(std::iter::empty());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn names_are_deduplicated_and_sorted() {
        let a = CodexDefinition::new("A", [("Zeta", "1"), ("Alpha", "2")]);
        let b = CodexDefinition::new("B", [("Alpha", "3"), ("Mid", "1")]);
        let registry = NameRegistry::build([&a, &b]);
        assert_eq!(registry.to_vec(), ["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn covers_every_reference_entry() {
        let defs = CodexKind::all_definitions();
        let registry = NameRegistry::build(&defs);
        for def in &defs {
            for entry in def.entries() {
                assert!(
                    registry.contains(&entry.name),
                    "{}.{} missing from registry",
                    def.label(),
                    entry.name
                );
            }
        }
    }

    #[test]
    fn serializes_as_sorted_array() {
        let def = CodexDefinition::new("X", [("b", "1"), ("a", "2")]);
        let registry = NameRegistry::build([&def]);
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
