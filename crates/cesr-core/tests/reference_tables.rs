//! Integration tests over the reference codex configuration.
//!
//! These pin the cross-table relationships downstream parsers rely on: every
//! sized code belongs to the codex of the same family, and the indexed
//! signature subsets partition the signature codes of `Indexer`.

use std::collections::HashSet;

use cesr_core::{label_from_type_name, CodexKind, SizeFamily, CODEX_SUFFIX};
use proptest::prelude::*;

fn codes_of(kind: CodexKind) -> HashSet<&'static str> {
    kind.entries().iter().map(|(_, code)| *code).collect()
}

#[test]
fn every_size_family_is_a_codex_label() {
    for family in SizeFamily::all() {
        let kind: CodexKind = family
            .name()
            .parse()
            .unwrap_or_else(|e| panic!("size family {family} has no codex: {e}"));
        assert_eq!(kind.label(), family.name());
    }
}

#[test]
fn sized_codes_belong_to_their_own_codex() {
    for family in SizeFamily::all() {
        let kind: CodexKind = family.name().parse().unwrap();
        let codes = codes_of(kind);
        for (code, _) in family.records() {
            assert!(codes.contains(code), "{family} size code {code} not in {kind}");
        }
    }
}

#[test]
fn every_matter_and_indexer_code_is_sized() {
    for family in [SizeFamily::Matter, SizeFamily::Indexer] {
        let kind: CodexKind = family.name().parse().unwrap();
        let sized: HashSet<_> = family.records().into_iter().map(|(c, _)| c).collect();
        for code in codes_of(kind) {
            assert!(sized.contains(code), "{kind} code {code} has no size record");
        }
    }
}

#[test]
fn indexed_signature_subsets_partition_indexed_sig() {
    let all = codes_of(CodexKind::IndexedSig);
    let current = codes_of(CodexKind::IndexedCurrentSig);
    let both = codes_of(CodexKind::IndexedBothSig);

    assert!(current.is_disjoint(&both));
    let union: HashSet<_> = current.union(&both).copied().collect();
    assert_eq!(union, all);
    assert!(all.is_subset(&codes_of(CodexKind::Indexer)));
}

#[test]
fn counter_families_share_the_genus_code() {
    let genus = codes_of(CodexKind::ProtocolGenus);
    assert!(genus.is_subset(&codes_of(CodexKind::Counter)));
    assert!(genus.is_subset(&codes_of(CodexKind::AltCounter)));
}

proptest! {
    #[test]
    fn label_strips_exactly_one_suffix(base in "[A-Za-z0-9]{0,24}") {
        let type_name = format!("{base}{CODEX_SUFFIX}");
        prop_assert_eq!(label_from_type_name(&type_name), base.as_str());
    }

    #[test]
    fn label_without_suffix_is_identity(name in "[A-Za-z0-9]{0,24}") {
        prop_assume!(!name.ends_with(CODEX_SUFFIX));
        prop_assert_eq!(label_from_type_name(&name), name.as_str());
    }
}
