//! # Size-Bearing Code Families
//!
//! Three codex families carry per-code size metadata: primitive codes
//! (`Matter`), indexed signature codes (`Indexer`) and framing codes
//! (`Counter`). Each family uses its own raw record shape. The compiler does
//! not interpret the numbers; it only passes the fields through in their
//! declared order, which is what [`RawSize::fields`] exposes.
//!
//! Field legend: `hs` hard size, `ss` soft size, `xs` extra (pad) size,
//! `os` other-index size, `fs` full size (`None` for variable-size codes),
//! `ls` lead size. All are counts of Base64 characters.

use crate::tables;

/// Size record of a primitive (`Matter`) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizage {
    pub hs: u32,
    pub ss: u32,
    pub xs: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

/// Size record of an indexed signature (`Indexer`) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xizage {
    pub hs: u32,
    pub ss: u32,
    pub os: u32,
    pub fs: Option<u32>,
    pub ls: u32,
}

/// Size record of a framing (`Counter`) code. Counters are always fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cizage {
    pub hs: u32,
    pub ss: u32,
    pub fs: u32,
}

/// A raw size record in whichever shape its family declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSize {
    Matter(Sizage),
    Indexer(Xizage),
    Counter(Cizage),
}

impl RawSize {
    /// The record's fields in declaration order. `None` marks a variable
    /// full size.
    pub fn fields(&self) -> Vec<(&'static str, Option<u32>)> {
        match self {
            Self::Matter(s) => vec![
                ("hs", Some(s.hs)),
                ("ss", Some(s.ss)),
                ("xs", Some(s.xs)),
                ("fs", s.fs),
                ("ls", Some(s.ls)),
            ],
            Self::Indexer(x) => vec![
                ("hs", Some(x.hs)),
                ("ss", Some(x.ss)),
                ("os", Some(x.os)),
                ("fs", x.fs),
                ("ls", Some(x.ls)),
            ],
            Self::Counter(c) => vec![
                ("hs", Some(c.hs)),
                ("ss", Some(c.ss)),
                ("fs", Some(c.fs)),
            ],
        }
    }
}

/// The size-bearing families, in artifact order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeFamily {
    Matter,
    Indexer,
    Counter,
}

/// Number of size-bearing families.
pub const SIZE_FAMILY_COUNT: usize = 3;

impl SizeFamily {
    /// Returns all size-bearing families in artifact order.
    pub fn all() -> &'static [SizeFamily] {
        &[Self::Matter, Self::Indexer, Self::Counter]
    }

    /// Family name as used for the sizes artifact key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matter => "Matter",
            Self::Indexer => "Indexer",
            Self::Counter => "Counter",
        }
    }

    /// The family's `(code, record)` pairs in declaration order.
    pub fn records(&self) -> Vec<(&'static str, RawSize)> {
        match self {
            Self::Matter => tables::MATTER_SIZES
                .iter()
                .map(|(code, s)| (*code, RawSize::Matter(*s)))
                .collect(),
            Self::Indexer => tables::INDEXER_SIZES
                .iter()
                .map(|(code, x)| (*code, RawSize::Indexer(*x)))
                .collect(),
            Self::Counter => tables::COUNTER_SIZES
                .iter()
                .map(|(code, c)| (*code, RawSize::Counter(*c)))
                .collect(),
        }
    }
}

impl std::fmt::Display for SizeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_families_count() {
        assert_eq!(SizeFamily::all().len(), SIZE_FAMILY_COUNT);
    }

    #[test]
    fn records_are_key_unique() {
        for family in SizeFamily::all() {
            let mut seen = HashSet::new();
            for (code, _) in family.records() {
                assert!(seen.insert(code), "duplicate size code {code} in {family}");
            }
        }
    }

    #[test]
    fn matter_fields_keep_declaration_order() {
        let raw = RawSize::Matter(Sizage {
            hs: 2,
            ss: 2,
            xs: 0,
            fs: None,
            ls: 1,
        });
        let names: Vec<_> = raw.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["hs", "ss", "xs", "fs", "ls"]);
        assert_eq!(raw.fields()[3], ("fs", None));
    }

    #[test]
    fn indexer_and_counter_field_shapes() {
        let x = RawSize::Indexer(Xizage {
            hs: 1,
            ss: 1,
            os: 0,
            fs: Some(88),
            ls: 0,
        });
        let names: Vec<_> = x.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["hs", "ss", "os", "fs", "ls"]);

        let c = RawSize::Counter(Cizage { hs: 2, ss: 2, fs: 4 });
        assert_eq!(
            c.fields(),
            vec![("hs", Some(2)), ("ss", Some(2)), ("fs", Some(4))]
        );
    }

    #[test]
    fn fixed_size_codes_have_consistent_lengths() {
        // A fixed full size always covers at least the hard and soft parts.
        for (code, raw) in SizeFamily::Matter.records() {
            if let RawSize::Matter(s) = raw {
                if let Some(fs) = s.fs {
                    assert!(fs >= s.hs + s.ss, "{code}: fs {fs} < hs+ss");
                    assert_eq!(fs % 4, 0, "{code}: fs {fs} not a quadlet multiple");
                }
            }
        }
    }

    #[test]
    fn family_display_matches_name() {
        for family in SizeFamily::all() {
            assert_eq!(family.to_string(), family.name());
        }
    }
}
