//! # Size Tables
//!
//! Builds `family → (code → size descriptor)` tables for the size-bearing
//! families, checking every code against the [`GlobalCodeSet`] produced by
//! codex compilation. Descriptors are a field-for-field copy of the raw
//! record; no numeric interpretation happens here.

use cesr_core::{CodexError, IntegrityError, RawSize, SizeFamily};
use indexmap::IndexMap;
use serde::Serialize;

use crate::compile::GlobalCodeSet;

/// On-wire size attributes of one code, in the source record's field order.
///
/// A `None` value serializes as `null` and marks a variable full size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeDescriptor {
    fields: IndexMap<String, Option<u32>>,
}

impl SizeDescriptor {
    /// Copy a raw size record field for field.
    pub fn from_raw(raw: &RawSize) -> Self {
        Self {
            fields: raw
                .fields()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Value of `field`. The outer `None` means the field does not exist.
    pub fn get(&self, field: &str) -> Option<Option<u32>> {
        self.fields.get(field).copied()
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// A named source of raw size records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSource {
    name: String,
    records: Vec<(String, RawSize)>,
}

impl SizeSource {
    /// Build a source from a name and its `(code, record)` pairs.
    pub fn new(name: impl Into<String>, records: impl IntoIterator<Item = (String, RawSize)>) -> Self {
        Self {
            name: name.into(),
            records: records.into_iter().collect(),
        }
    }

    /// The source for one size-bearing family of the codex source.
    pub fn from_family(family: SizeFamily) -> Self {
        Self::new(
            family.name(),
            family
                .records()
                .into_iter()
                .map(|(code, raw)| (code.to_string(), raw)),
        )
    }

    /// Sources for every size-bearing family, in artifact order.
    pub fn reference() -> Vec<Self> {
        SizeFamily::all().iter().copied().map(Self::from_family).collect()
    }

    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of size records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the source has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `family → (code → descriptor)`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeTable {
    families: IndexMap<String, IndexMap<String, SizeDescriptor>>,
}

impl SizeTable {
    /// Descriptor of `code` in `family`.
    pub fn get(&self, family: &str, code: &str) -> Option<&SizeDescriptor> {
        self.families.get(family)?.get(code)
    }

    /// Number of records in `family`, if the family exists.
    pub fn family_len(&self, family: &str) -> Option<usize> {
        self.families.get(family).map(IndexMap::len)
    }

    /// Family names in source order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}

/// Build the size table for `sources`, validating every code.
///
/// # Errors
///
/// Returns `IntegrityError::UnknownSizeCode` for the first record whose code
/// is not in `codes`.
pub fn build_size_table(
    sources: &[SizeSource],
    codes: &GlobalCodeSet,
) -> Result<SizeTable, CodexError> {
    let mut families = IndexMap::new();

    for source in sources {
        let mut table = IndexMap::new();
        for (code, raw) in &source.records {
            if !codes.contains(code) {
                return Err(IntegrityError::UnknownSizeCode {
                    family: source.name.clone(),
                    code: code.clone(),
                }
                .into());
            }
            table.insert(code.clone(), SizeDescriptor::from_raw(raw));
        }
        tracing::debug!(family = %source.name, records = table.len(), "built size table");
        families.insert(source.name.clone(), table);
    }

    Ok(SizeTable { families })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_all;
    use crate::registry::NameRegistry;
    use cesr_core::{Cizage, CodexDefinition, CodexKind, Sizage};

    fn codes(pairs: &[(&str, &str)]) -> GlobalCodeSet {
        let def = CodexDefinition::new("T", pairs.iter().copied());
        let registry = NameRegistry::build([&def]);
        compile_all([&def], &registry).unwrap().1
    }

    fn counter(hs: u32, ss: u32, fs: u32) -> RawSize {
        RawSize::Counter(Cizage { hs, ss, fs })
    }

    #[test]
    fn unknown_size_code_is_an_integrity_error() {
        let codes = codes(&[("Known", "-A")]);
        let source = SizeSource::new(
            "Counter",
            vec![("-A".to_string(), counter(2, 2, 4)), ("-Q".to_string(), counter(2, 2, 4))],
        );

        let err = build_size_table(&[source], &codes).unwrap_err();
        match err {
            CodexError::Integrity(IntegrityError::UnknownSizeCode { family, code }) => {
                assert_eq!(family, "Counter");
                assert_eq!(code, "-Q");
            }
            other => panic!("expected UnknownSizeCode, got {other:?}"),
        }
    }

    #[test]
    fn known_size_code_passes_through_unchanged() {
        let codes = codes(&[("Var", "4A")]);
        let raw = RawSize::Matter(Sizage {
            hs: 2,
            ss: 2,
            xs: 0,
            fs: None,
            ls: 1,
        });
        let source = SizeSource::new("Matter", vec![("4A".to_string(), raw)]);

        let table = build_size_table(&[source], &codes).unwrap();
        let desc = table.get("Matter", "4A").unwrap();
        assert_eq!(desc, &SizeDescriptor::from_raw(&raw));
        assert_eq!(desc.get("hs"), Some(Some(2)));
        assert_eq!(desc.get("fs"), Some(None));
        assert_eq!(desc.get("ls"), Some(Some(1)));
        assert_eq!(desc.get("os"), None);

        let json = serde_json::to_string(desc).unwrap();
        assert_eq!(json, r#"{"hs":2,"ss":2,"xs":0,"fs":null,"ls":1}"#);
    }

    #[test]
    fn reference_sources_validate_against_reference_codes() {
        let defs = CodexKind::all_definitions();
        let registry = NameRegistry::build(&defs);
        let (_, global) = compile_all(&defs, &registry).unwrap();

        let table = build_size_table(&SizeSource::reference(), &global).unwrap();
        let families: Vec<_> = table.families().collect();
        assert_eq!(families, ["Matter", "Indexer", "Counter"]);
        for family in SizeFamily::all() {
            assert_eq!(
                table.family_len(family.name()),
                Some(family.records().len()),
                "{family} record count"
            );
        }
        assert_eq!(table.get("Counter", "--AAA").unwrap().get("hs"), Some(Some(5)));
    }

    #[test]
    fn empty_source_yields_empty_family() {
        let table = build_size_table(&[SizeSource::new("Empty", vec![])], &GlobalCodeSet::default())
            .unwrap();
        assert_eq!(table.family_len("Empty"), Some(0));
        assert_eq!(table.family_len("Missing"), None);
    }
}
