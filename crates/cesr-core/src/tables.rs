//! Static codex and size tables for the CESR 1.x reference configuration.
//!
//! Every table is an ordered `(field name, code)` list. Order matters: it is
//! the enumeration order the compiler walks, and therefore decides which name
//! wins when two entries share a code.

use crate::sizes::{Cizage, Sizage, Xizage};

pub(crate) const COLD: &[(&str, &str)] = &[
    ("CtB64", "cntcode"),
    ("OpB64", "opcode"),
    ("JSON", "json"),
    ("MGPK1", "mgpk1"),
    ("CBOR", "cbor"),
    ("MGPK2", "mgpk2"),
    ("CtOpB2", "ctopb2"),
];

pub(crate) const MATTER: &[(&str, &str)] = &[
    ("Ed25519_Seed", "A"),
    ("Ed25519N", "B"),
    ("X25519", "C"),
    ("Ed25519", "D"),
    ("Blake3_256", "E"),
    ("Blake2b_256", "F"),
    ("Blake2s_256", "G"),
    ("SHA3_256", "H"),
    ("SHA2_256", "I"),
    ("ECDSA_256k1_Seed", "J"),
    ("Ed448_Seed", "K"),
    ("X448", "L"),
    ("Short", "M"),
    ("Big", "N"),
    ("X25519_Private", "O"),
    ("X25519_Cipher_Seed", "P"),
    ("ECDSA_256r1_Seed", "Q"),
    ("Tall", "R"),
    ("Large", "S"),
    ("Great", "T"),
    ("Vast", "U"),
    ("Label1", "V"),
    ("Label2", "W"),
    ("Tag3", "X"),
    ("Tag7", "Y"),
    ("Salt_128", "0A"),
    ("Ed25519_Sig", "0B"),
    ("ECDSA_256k1_Sig", "0C"),
    ("Blake3_512", "0D"),
    ("Blake2b_512", "0E"),
    ("SHA3_512", "0F"),
    ("SHA2_512", "0G"),
    ("Long", "0H"),
    ("ECDSA_256r1_Sig", "0I"),
    ("Tag1", "0J"),
    ("Tag2", "0K"),
    ("Tag5", "0L"),
    ("Tag6", "0M"),
    ("Tag9", "0N"),
    ("Tag10", "0O"),
    ("ECDSA_256k1N", "1AAA"),
    ("ECDSA_256k1", "1AAB"),
    ("Ed448N", "1AAC"),
    ("Ed448", "1AAD"),
    ("Ed448_Sig", "1AAE"),
    ("Tag4", "1AAF"),
    ("DateTime", "1AAG"),
    ("X25519_Cipher_Salt", "1AAH"),
    ("ECDSA_256r1N", "1AAI"),
    ("ECDSA_256r1", "1AAJ"),
    ("Null", "1AAK"),
    ("No", "1AAL"),
    ("Yes", "1AAM"),
    ("Tag8", "1AAN"),
    ("TBD0S", "1__-"),
    ("TBD0", "1___"),
    ("TBD1S", "2__-"),
    ("TBD1", "2___"),
    ("TBD2S", "3__-"),
    ("TBD2", "3___"),
    ("StrB64_L0", "4A"),
    ("StrB64_L1", "5A"),
    ("StrB64_L2", "6A"),
    ("StrB64_Big_L0", "7AAA"),
    ("StrB64_Big_L1", "8AAA"),
    ("StrB64_Big_L2", "9AAA"),
    ("Bytes_L0", "4B"),
    ("Bytes_L1", "5B"),
    ("Bytes_L2", "6B"),
    ("Bytes_Big_L0", "7AAB"),
    ("Bytes_Big_L1", "8AAB"),
    ("Bytes_Big_L2", "9AAB"),
    ("X25519_Cipher_L0", "4C"),
    ("X25519_Cipher_L1", "5C"),
    ("X25519_Cipher_L2", "6C"),
    ("X25519_Cipher_Big_L0", "7AAC"),
    ("X25519_Cipher_Big_L1", "8AAC"),
    ("X25519_Cipher_Big_L2", "9AAC"),
    ("X25519_Cipher_QB64_L0", "4D"),
    ("X25519_Cipher_QB64_L1", "5D"),
    ("X25519_Cipher_QB64_L2", "6D"),
    ("X25519_Cipher_QB64_Big_L0", "7AAD"),
    ("X25519_Cipher_QB64_Big_L1", "8AAD"),
    ("X25519_Cipher_QB64_Big_L2", "9AAD"),
    ("X25519_Cipher_QB2_L0", "4E"),
    ("X25519_Cipher_QB2_L1", "5E"),
    ("X25519_Cipher_QB2_L2", "6E"),
    ("X25519_Cipher_QB2_Big_L0", "7AAE"),
    ("X25519_Cipher_QB2_Big_L1", "8AAE"),
    ("X25519_Cipher_QB2_Big_L2", "9AAE"),
];

pub(crate) const SMALL_VAR_RAW_SIZE: &[(&str, &str)] =
    &[("Lead0", "4"), ("Lead1", "5"), ("Lead2", "6")];

pub(crate) const LARGE_VAR_RAW_SIZE: &[(&str, &str)] =
    &[("Lead0_Big", "7"), ("Lead1_Big", "8"), ("Lead2_Big", "9")];

pub(crate) const NON_TRANS: &[(&str, &str)] = &[
    ("Ed25519N", "B"),
    ("ECDSA_256k1N", "1AAA"),
    ("Ed448N", "1AAC"),
    ("ECDSA_256r1N", "1AAI"),
];

pub(crate) const DIG: &[(&str, &str)] = &[
    ("Blake3_256", "E"),
    ("Blake2b_256", "F"),
    ("Blake2s_256", "G"),
    ("SHA3_256", "H"),
    ("SHA2_256", "I"),
    ("Blake3_512", "0D"),
    ("Blake2b_512", "0E"),
    ("SHA3_512", "0F"),
    ("SHA2_512", "0G"),
];

pub(crate) const NUM: &[(&str, &str)] = &[
    ("Short", "M"),
    ("Long", "0H"),
    ("Tall", "R"),
    ("Big", "N"),
    ("Large", "S"),
    ("Great", "T"),
    ("Vast", "U"),
];

pub(crate) const BEXT: &[(&str, &str)] = &[
    ("StrB64_L0", "4A"),
    ("StrB64_L1", "5A"),
    ("StrB64_L2", "6A"),
    ("StrB64_Big_L0", "7AAA"),
    ("StrB64_Big_L1", "8AAA"),
    ("StrB64_Big_L2", "9AAA"),
];

pub(crate) const TEXT: &[(&str, &str)] = &[
    ("Bytes_L0", "4B"),
    ("Bytes_L1", "5B"),
    ("Bytes_L2", "6B"),
    ("Bytes_Big_L0", "7AAB"),
    ("Bytes_Big_L1", "8AAB"),
    ("Bytes_Big_L2", "9AAB"),
];

pub(crate) const CIPHER_X25519_VAR: &[(&str, &str)] = &[
    ("X25519_Cipher_L0", "4C"),
    ("X25519_Cipher_L1", "5C"),
    ("X25519_Cipher_L2", "6C"),
    ("X25519_Cipher_Big_L0", "7AAC"),
    ("X25519_Cipher_Big_L1", "8AAC"),
    ("X25519_Cipher_Big_L2", "9AAC"),
];

pub(crate) const CIPHER_X25519_FIX_QB64: &[(&str, &str)] = &[
    ("X25519_Cipher_Seed", "P"),
    ("X25519_Cipher_Salt", "1AAH"),
];

pub(crate) const CIPHER_X25519_VAR_QB64: &[(&str, &str)] = &[
    ("X25519_Cipher_QB64_L0", "4D"),
    ("X25519_Cipher_QB64_L1", "5D"),
    ("X25519_Cipher_QB64_L2", "6D"),
    ("X25519_Cipher_QB64_Big_L0", "7AAD"),
    ("X25519_Cipher_QB64_Big_L1", "8AAD"),
    ("X25519_Cipher_QB64_Big_L2", "9AAD"),
];

pub(crate) const CIPHER_X25519_ALL_QB64: &[(&str, &str)] = &[
    ("X25519_Cipher_Seed", "P"),
    ("X25519_Cipher_Salt", "1AAH"),
    ("X25519_Cipher_QB64_L0", "4D"),
    ("X25519_Cipher_QB64_L1", "5D"),
    ("X25519_Cipher_QB64_L2", "6D"),
    ("X25519_Cipher_QB64_Big_L0", "7AAD"),
    ("X25519_Cipher_QB64_Big_L1", "8AAD"),
    ("X25519_Cipher_QB64_Big_L2", "9AAD"),
];

pub(crate) const CIPHER_X25519_QB2_VAR: &[(&str, &str)] = &[
    ("X25519_Cipher_QB2_L0", "4E"),
    ("X25519_Cipher_QB2_L1", "5E"),
    ("X25519_Cipher_QB2_L2", "6E"),
    ("X25519_Cipher_QB2_Big_L0", "7AAE"),
    ("X25519_Cipher_QB2_Big_L1", "8AAE"),
    ("X25519_Cipher_QB2_Big_L2", "9AAE"),
];

pub(crate) const PRE: &[(&str, &str)] = &[
    ("Ed25519N", "B"),
    ("Ed25519", "D"),
    ("Blake3_256", "E"),
    ("Blake2b_256", "F"),
    ("Blake2s_256", "G"),
    ("SHA3_256", "H"),
    ("SHA2_256", "I"),
    ("Blake3_512", "0D"),
    ("Blake2b_512", "0E"),
    ("SHA3_512", "0F"),
    ("SHA2_512", "0G"),
    ("ECDSA_256k1N", "1AAA"),
    ("ECDSA_256k1", "1AAB"),
    ("Ed448N", "1AAC"),
    ("Ed448", "1AAD"),
    ("ECDSA_256r1N", "1AAI"),
    ("ECDSA_256r1", "1AAJ"),
];

pub(crate) const INDEXER: &[(&str, &str)] = &[
    ("Ed25519_Sig", "A"),
    ("Ed25519_Crt_Sig", "B"),
    ("ECDSA_256k1_Sig", "C"),
    ("ECDSA_256k1_Crt_Sig", "D"),
    ("ECDSA_256r1_Sig", "E"),
    ("ECDSA_256r1_Crt_Sig", "F"),
    ("Ed448_Sig", "0A"),
    ("Ed448_Crt_Sig", "0B"),
    ("Ed25519_Big_Sig", "2A"),
    ("Ed25519_Big_Crt_Sig", "2B"),
    ("ECDSA_256k1_Big_Sig", "2C"),
    ("ECDSA_256k1_Big_Crt_Sig", "2D"),
    ("ECDSA_256r1_Big_Sig", "2E"),
    ("ECDSA_256r1_Big_Crt_Sig", "2F"),
    ("Ed448_Big_Sig", "3A"),
    ("Ed448_Big_Crt_Sig", "3B"),
    ("TBD0", "0z"),
    ("TBD1", "1z"),
    ("TBD4", "4z"),
];

pub(crate) const INDEXED_SIG: &[(&str, &str)] = &[
    ("Ed25519_Sig", "A"),
    ("Ed25519_Crt_Sig", "B"),
    ("ECDSA_256k1_Sig", "C"),
    ("ECDSA_256k1_Crt_Sig", "D"),
    ("ECDSA_256r1_Sig", "E"),
    ("ECDSA_256r1_Crt_Sig", "F"),
    ("Ed448_Sig", "0A"),
    ("Ed448_Crt_Sig", "0B"),
    ("Ed25519_Big_Sig", "2A"),
    ("Ed25519_Big_Crt_Sig", "2B"),
    ("ECDSA_256k1_Big_Sig", "2C"),
    ("ECDSA_256k1_Big_Crt_Sig", "2D"),
    ("ECDSA_256r1_Big_Sig", "2E"),
    ("ECDSA_256r1_Big_Crt_Sig", "2F"),
    ("Ed448_Big_Sig", "3A"),
    ("Ed448_Big_Crt_Sig", "3B"),
];

pub(crate) const INDEXED_CURRENT_SIG: &[(&str, &str)] = &[
    ("Ed25519_Crt_Sig", "B"),
    ("ECDSA_256k1_Crt_Sig", "D"),
    ("ECDSA_256r1_Crt_Sig", "F"),
    ("Ed448_Crt_Sig", "0B"),
    ("Ed25519_Big_Crt_Sig", "2B"),
    ("ECDSA_256k1_Big_Crt_Sig", "2D"),
    ("ECDSA_256r1_Big_Crt_Sig", "2F"),
    ("Ed448_Big_Crt_Sig", "3B"),
];

pub(crate) const INDEXED_BOTH_SIG: &[(&str, &str)] = &[
    ("Ed25519_Sig", "A"),
    ("ECDSA_256k1_Sig", "C"),
    ("ECDSA_256r1_Sig", "E"),
    ("Ed448_Sig", "0A"),
    ("Ed25519_Big_Sig", "2A"),
    ("ECDSA_256k1_Big_Sig", "2C"),
    ("ECDSA_256r1_Big_Sig", "2E"),
    ("Ed448_Big_Sig", "3A"),
];

pub(crate) const COUNTER: &[(&str, &str)] = &[
    ("ControllerIdxSigs", "-A"),
    ("WitnessIdxSigs", "-B"),
    ("NonTransReceiptCouples", "-C"),
    ("TransReceiptQuadruples", "-D"),
    ("FirstSeenReplayCouples", "-E"),
    ("TransIdxSigGroups", "-F"),
    ("SealSourceCouples", "-G"),
    ("TransLastIdxSigGroups", "-H"),
    ("SealSourceTriples", "-I"),
    ("SadPathSigGroups", "-J"),
    ("RootSadPathSigGroups", "-K"),
    ("PathedMaterialQuadlets", "-L"),
    ("BigPathedMaterialQuadlets", "-0L"),
    ("AttachedMaterialQuadlets", "-V"),
    ("BigAttachedMaterialQuadlets", "-0V"),
    ("ESSRPayloadGroup", "-Z"),
    ("KERIACDCGenusVersion", "--AAA"),
];

// All three genera share one table set, hence one code.
pub(crate) const PROTOCOL_GENUS: &[(&str, &str)] = &[
    ("KERI_ACDC_SPAC", "--AAA"),
    ("KERI", "--AAA"),
    ("ACDC", "--AAA"),
];

pub(crate) const ALT_COUNTER: &[(&str, &str)] = &[
    ("GenericGroup", "-A"),
    ("BigGenericGroup", "-0A"),
    ("MessageGroup", "-B"),
    ("BigMessageGroup", "-0B"),
    ("AttachmentGroup", "-C"),
    ("BigAttachmentGroup", "-0C"),
    ("DatagramSegmentGroup", "-D"),
    ("BigDatagramSegmentGroup", "-0D"),
    ("ESSRWrapperGroup", "-E"),
    ("BigESSRWrapperGroup", "-0E"),
    ("FixedMessageBodyGroup", "-F"),
    ("BigFixedMessageBodyGroup", "-0F"),
    ("MapMessageBodyGroup", "-G"),
    ("BigMapMessageBodyGroup", "-0G"),
    ("GenericMapGroup", "-H"),
    ("BigGenericMapGroup", "-0H"),
    ("GenericListGroup", "-I"),
    ("BigGenericListGroup", "-0I"),
    ("ControllerIdxSigs", "-J"),
    ("BigControllerIdxSigs", "-0J"),
    ("WitnessIdxSigs", "-K"),
    ("BigWitnessIdxSigs", "-0K"),
    ("NonTransReceiptCouples", "-L"),
    ("BigNonTransReceiptCouples", "-0L"),
    ("TransReceiptQuadruples", "-M"),
    ("BigTransReceiptQuadruples", "-0M"),
    ("FirstSeenReplayCouples", "-N"),
    ("BigFirstSeenReplayCouples", "-0N"),
    ("TransIdxSigGroups", "-O"),
    ("BigTransIdxSigGroups", "-0O"),
    ("TransLastIdxSigGroups", "-P"),
    ("BigTransLastIdxSigGroups", "-0P"),
    ("SealSourceCouples", "-Q"),
    ("BigSealSourceCouples", "-0Q"),
    ("SealSourceTriples", "-R"),
    ("BigSealSourceTriples", "-0R"),
    ("PathedMaterialGroup", "-S"),
    ("BigPathedMaterialGroup", "-0S"),
    ("SadPathSigGroups", "-T"),
    ("BigSadPathSigGroups", "-0T"),
    ("RootSadPathSigGroups", "-U"),
    ("BigRootSadPathSigGroups", "-0U"),
    ("DigestSealSingles", "-V"),
    ("BigDigestSealSingles", "-0V"),
    ("MerkleRootSealSingles", "-W"),
    ("BigMerkleRootSealSingles", "-0W"),
    ("BackerRegistrarSealCouples", "-X"),
    ("BigBackerRegistrarSealCouples", "-0X"),
    ("SealSourceLastSingles", "-Y"),
    ("BigSealSourceLastSingles", "-0Y"),
    ("ESSRPayloadGroup", "-Z"),
    ("BigESSRPayloadGroup", "-0Z"),
    ("KERIACDCGenusVersion", "--AAA"),
];

// ---------------------------------------------------------------------------
// Size tables
// ---------------------------------------------------------------------------

const fn fix(hs: u32, ss: u32, xs: u32, fs: u32, ls: u32) -> Sizage {
    Sizage {
        hs,
        ss,
        xs,
        fs: Some(fs),
        ls,
    }
}

const fn var(hs: u32, ss: u32, ls: u32) -> Sizage {
    Sizage {
        hs,
        ss,
        xs: 0,
        fs: None,
        ls,
    }
}

pub(crate) const MATTER_SIZES: &[(&str, Sizage)] = &[
    ("A", fix(1, 0, 0, 44, 0)),
    ("B", fix(1, 0, 0, 44, 0)),
    ("C", fix(1, 0, 0, 44, 0)),
    ("D", fix(1, 0, 0, 44, 0)),
    ("E", fix(1, 0, 0, 44, 0)),
    ("F", fix(1, 0, 0, 44, 0)),
    ("G", fix(1, 0, 0, 44, 0)),
    ("H", fix(1, 0, 0, 44, 0)),
    ("I", fix(1, 0, 0, 44, 0)),
    ("J", fix(1, 0, 0, 44, 0)),
    ("K", fix(1, 0, 0, 76, 0)),
    ("L", fix(1, 0, 0, 76, 0)),
    ("M", fix(1, 0, 0, 4, 0)),
    ("N", fix(1, 0, 0, 12, 0)),
    ("O", fix(1, 0, 0, 44, 0)),
    ("P", fix(1, 0, 0, 124, 0)),
    ("Q", fix(1, 0, 0, 44, 0)),
    ("R", fix(1, 0, 0, 8, 0)),
    ("S", fix(1, 0, 0, 16, 0)),
    ("T", fix(1, 0, 0, 20, 0)),
    ("U", fix(1, 0, 0, 24, 0)),
    ("V", fix(1, 0, 0, 4, 1)),
    ("W", fix(1, 0, 0, 4, 0)),
    ("X", fix(1, 3, 0, 4, 0)),
    ("Y", fix(1, 7, 0, 8, 0)),
    ("0A", fix(2, 0, 0, 24, 0)),
    ("0B", fix(2, 0, 0, 88, 0)),
    ("0C", fix(2, 0, 0, 88, 0)),
    ("0D", fix(2, 0, 0, 88, 0)),
    ("0E", fix(2, 0, 0, 88, 0)),
    ("0F", fix(2, 0, 0, 88, 0)),
    ("0G", fix(2, 0, 0, 88, 0)),
    ("0H", fix(2, 0, 0, 8, 0)),
    ("0I", fix(2, 0, 0, 88, 0)),
    ("0J", fix(2, 2, 1, 4, 0)),
    ("0K", fix(2, 2, 0, 4, 0)),
    ("0L", fix(2, 6, 1, 8, 0)),
    ("0M", fix(2, 6, 0, 8, 0)),
    ("0N", fix(2, 10, 1, 12, 0)),
    ("0O", fix(2, 10, 0, 12, 0)),
    ("1AAA", fix(4, 0, 0, 48, 0)),
    ("1AAB", fix(4, 0, 0, 48, 0)),
    ("1AAC", fix(4, 0, 0, 80, 0)),
    ("1AAD", fix(4, 0, 0, 80, 0)),
    ("1AAE", fix(4, 0, 0, 156, 0)),
    ("1AAF", fix(4, 4, 0, 8, 0)),
    ("1AAG", fix(4, 0, 0, 36, 0)),
    ("1AAH", fix(4, 0, 0, 100, 0)),
    ("1AAI", fix(4, 0, 0, 48, 0)),
    ("1AAJ", fix(4, 0, 0, 48, 0)),
    ("1AAK", fix(4, 0, 0, 4, 0)),
    ("1AAL", fix(4, 0, 0, 4, 0)),
    ("1AAM", fix(4, 0, 0, 4, 0)),
    ("1AAN", fix(4, 8, 0, 12, 0)),
    ("1__-", fix(4, 2, 0, 12, 1)),
    ("1___", fix(4, 0, 0, 8, 0)),
    ("2__-", fix(4, 2, 0, 12, 1)),
    ("2___", fix(4, 0, 0, 8, 1)),
    ("3__-", fix(4, 2, 0, 12, 2)),
    ("3___", fix(4, 0, 0, 8, 2)),
    ("4A", var(2, 2, 0)),
    ("5A", var(2, 2, 1)),
    ("6A", var(2, 2, 2)),
    ("7AAA", var(4, 4, 0)),
    ("8AAA", var(4, 4, 1)),
    ("9AAA", var(4, 4, 2)),
    ("4B", var(2, 2, 0)),
    ("5B", var(2, 2, 1)),
    ("6B", var(2, 2, 2)),
    ("7AAB", var(4, 4, 0)),
    ("8AAB", var(4, 4, 1)),
    ("9AAB", var(4, 4, 2)),
    ("4C", var(2, 2, 0)),
    ("5C", var(2, 2, 1)),
    ("6C", var(2, 2, 2)),
    ("7AAC", var(4, 4, 0)),
    ("8AAC", var(4, 4, 1)),
    ("9AAC", var(4, 4, 2)),
    ("4D", var(2, 2, 0)),
    ("5D", var(2, 2, 1)),
    ("6D", var(2, 2, 2)),
    ("7AAD", var(4, 4, 0)),
    ("8AAD", var(4, 4, 1)),
    ("9AAD", var(4, 4, 2)),
    ("4E", var(2, 2, 0)),
    ("5E", var(2, 2, 1)),
    ("6E", var(2, 2, 2)),
    ("7AAE", var(4, 4, 0)),
    ("8AAE", var(4, 4, 1)),
    ("9AAE", var(4, 4, 2)),
];

const fn xiz(hs: u32, ss: u32, os: u32, fs: Option<u32>, ls: u32) -> Xizage {
    Xizage { hs, ss, os, fs, ls }
}

pub(crate) const INDEXER_SIZES: &[(&str, Xizage)] = &[
    ("A", xiz(1, 1, 0, Some(88), 0)),
    ("B", xiz(1, 1, 0, Some(88), 0)),
    ("C", xiz(1, 1, 0, Some(88), 0)),
    ("D", xiz(1, 1, 0, Some(88), 0)),
    ("E", xiz(1, 1, 0, Some(88), 0)),
    ("F", xiz(1, 1, 0, Some(88), 0)),
    ("0A", xiz(2, 2, 1, Some(156), 0)),
    ("0B", xiz(2, 2, 1, Some(156), 0)),
    ("2A", xiz(2, 4, 2, Some(92), 0)),
    ("2B", xiz(2, 4, 2, Some(92), 0)),
    ("2C", xiz(2, 4, 2, Some(92), 0)),
    ("2D", xiz(2, 4, 2, Some(92), 0)),
    ("2E", xiz(2, 4, 2, Some(92), 0)),
    ("2F", xiz(2, 4, 2, Some(92), 0)),
    ("3A", xiz(2, 6, 3, Some(160), 0)),
    ("3B", xiz(2, 6, 3, Some(160), 0)),
    ("0z", xiz(2, 2, 0, None, 0)),
    ("1z", xiz(2, 2, 1, Some(76), 1)),
    ("4z", xiz(2, 6, 3, Some(80), 1)),
];

const fn ciz(hs: u32, ss: u32, fs: u32) -> Cizage {
    Cizage { hs, ss, fs }
}

pub(crate) const COUNTER_SIZES: &[(&str, Cizage)] = &[
    ("-A", ciz(2, 2, 4)),
    ("-B", ciz(2, 2, 4)),
    ("-C", ciz(2, 2, 4)),
    ("-D", ciz(2, 2, 4)),
    ("-E", ciz(2, 2, 4)),
    ("-F", ciz(2, 2, 4)),
    ("-G", ciz(2, 2, 4)),
    ("-H", ciz(2, 2, 4)),
    ("-I", ciz(2, 2, 4)),
    ("-J", ciz(2, 2, 4)),
    ("-K", ciz(2, 2, 4)),
    ("-L", ciz(2, 2, 4)),
    ("-0L", ciz(3, 5, 8)),
    ("-V", ciz(2, 2, 4)),
    ("-0V", ciz(3, 5, 8)),
    ("-Z", ciz(2, 2, 4)),
    ("--AAA", ciz(5, 3, 8)),
];
