// Invented-language transliterations. Most are lossy on purpose: several
// latin letters share an output sequence, and the decoders collapse digraphs
// longest-first.

use std::sync::LazyLock;

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{PRIORITY_PATTERN, PRIORITY_UNICODE_RANGE},
};

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Aurebesh (Star Wars)",
            Category::Fantasy,
            Algorithm::Custom {
                encode: encode_aurebesh,
                decode: Some(decode_aurebesh),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE)
        .detect(detect_aurebesh),
        TransformSpec::new(
            "Dovahzul (Dragon)",
            Category::Fantasy,
            Algorithm::Custom {
                encode: encode_dovahzul,
                decode: Some(decode_dovahzul),
            },
        )
        .priority(PRIORITY_PATTERN)
        .detect(detect_dovahzul),
        TransformSpec::new(
            "Klingon",
            Category::Fantasy,
            Algorithm::Custom {
                encode: encode_klingon,
                decode: Some(decode_klingon),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE)
        .detect(detect_klingon),
        TransformSpec::new(
            "Quenya (Tolkien Elvish)",
            Category::Fantasy,
            Algorithm::Custom {
                encode: encode_quenya,
                decode: Some(decode_quenya),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE)
        .detect(detect_quenya),
        TransformSpec::new(
            "Tengwar Script",
            Category::Fantasy,
            Algorithm::FoldedCharMap(TENGWAR_MAP),
        )
        .priority(PRIORITY_UNICODE_RANGE),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

/// Apply a char-to-sequence table to the lowercased input.
fn fold_map(text: &str, table: &[(char, &str)]) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| {
            table
                .iter()
                .find(|&&(l, _)| l == c)
                .map(|&(_, s)| s.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

/// Decode by matching output sequences longest-first over the lowercased
/// input. Shared sequences make this lossy (documented per transform).
fn unfold_map(text: &str, reverse: &[(&str, char)]) -> String {
    let lower = text.to_lowercase();
    let mut out = String::new();
    let mut rest = lower.as_str();
    while !rest.is_empty() {
        match reverse.iter().find(|(seq, _)| rest.starts_with(seq)) {
            Some((seq, c)) => {
                out.push(*c);
                rest = &rest[seq.len()..];
            }
            None => {
                let c = rest.chars().next().expect("non-empty");
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn reverse_sorted(table: &'static [(char, &'static str)]) -> Vec<(&'static str, char)> {
    let mut rev: Vec<(&str, char)> = table
        .iter()
        .map(|&(c, s)| (s, c))
        .filter(|(s, _)| !s.is_empty())
        .collect();
    rev.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    rev
}

// ---------------------------------------------------------------------------
// Aurebesh
// ---------------------------------------------------------------------------

const AUREBESH_TABLE: &[(char, &str)] = &[
    ('a', "Aurek"), ('b', "Besh"), ('c', "Cresh"), ('d', "Dorn"), ('e', "Esk"),
    ('f', "Forn"), ('g', "Grek"), ('h', "Herf"), ('i', "Isk"), ('j', "Jenth"),
    ('k', "Krill"), ('l', "Leth"), ('m', "Mern"), ('n', "Nern"), ('o', "Osk"),
    ('p', "Peth"), ('q', "Qek"), ('r', "Resh"), ('s', "Senth"), ('t', "Trill"),
    ('u', "Usk"), ('v', "Vev"), ('w', "Wesk"), ('x', "Xesh"), ('y', "Yirt"),
    ('z', "Zerek"),
];

fn encode_aurebesh(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| {
            AUREBESH_TABLE
                .iter()
                .find(|&&(l, _)| l == c)
                .map(|&(_, name)| name.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_aurebesh(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            AUREBESH_TABLE
                .iter()
                .find(|&&(_, name)| name.to_lowercase() == lower)
                .map(|&(c, _)| c.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect()
}

fn detect_aurebesh(text: &str) -> bool {
    let lower = text.to_lowercase();
    AUREBESH_TABLE
        .iter()
        .filter(|&&(_, name)| lower.contains(&name.to_lowercase()))
        .count()
        >= 2
}

// ---------------------------------------------------------------------------
// Dovahzul
// ---------------------------------------------------------------------------

const DOVAHZUL_TABLE: &[(char, &str)] = &[
    ('a', "ah"), ('b', "b"), ('c', "k"), ('d', "d"), ('e', "eh"), ('f', "f"),
    ('g', "g"), ('h', "h"), ('i', "ii"), ('j', "j"), ('k', "k"), ('l', "l"),
    ('m', "m"), ('n', "n"), ('o', "o"), ('p', "p"), ('q', "kw"), ('r', "r"),
    ('s', "s"), ('t', "t"), ('u', "u"), ('v', "v"), ('w', "w"), ('x', "ks"),
    ('y', "y"), ('z', "z"),
];

static DOVAHZUL_REVERSE: LazyLock<Vec<(&'static str, char)>> =
    LazyLock::new(|| reverse_sorted(DOVAHZUL_TABLE));

fn encode_dovahzul(text: &str) -> String {
    fold_map(text, DOVAHZUL_TABLE)
}

fn decode_dovahzul(text: &str) -> String {
    unfold_map(text, &DOVAHZUL_REVERSE)
}

/// The vowel expansions (ah, eh, ii) and kw/ks digraphs are the fingerprint.
fn detect_dovahzul(text: &str) -> bool {
    if !text.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let lower = text.to_lowercase();
    let hits: usize = ["ah", "eh", "ii", "kw", "ks"]
        .iter()
        .map(|p| lower.matches(p).count())
        .sum();
    let min = if text.chars().count() < 30 { 1 } else { 2 };
    hits >= min
}

// ---------------------------------------------------------------------------
// Klingon
// ---------------------------------------------------------------------------

/// Case carries meaning in the romanized script (D, H, I, Q, S), so this
/// table maps both cases explicitly and the encoder does not fold.
const KLINGON_TABLE: &[(char, &str)] = &[
    ('c', "ch"), ('d', "D"), ('g', "gh"), ('h', "H"), ('i', "I"), ('k', "q"),
    ('q', "Q"), ('s', "S"), ('C', "CH"), ('G', "GH"), ('K', "Q"),
];

static KLINGON_REVERSE: LazyLock<Vec<(&'static str, char)>> = LazyLock::new(|| {
    let mut rev: Vec<(&str, char)> = KLINGON_TABLE.iter().map(|&(c, s)| (s, c)).collect();
    rev.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    rev
});

fn encode_klingon(text: &str) -> String {
    text.chars()
        .map(|c| {
            KLINGON_TABLE
                .iter()
                .find(|&&(l, _)| l == c)
                .map(|&(_, s)| s.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

fn decode_klingon(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        match KLINGON_REVERSE.iter().find(|(seq, _)| rest.starts_with(seq)) {
            Some((seq, c)) => {
                out.push(*c);
                rest = &rest[seq.len()..];
            }
            None => {
                let c = rest.chars().next().expect("non-empty");
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn detect_klingon(text: &str) -> bool {
    let digraphs = text.matches("ch").count()
        + text.matches("gh").count()
        + text.matches("CH").count()
        + text.matches("GH").count();
    let capital_mix = text.chars().any(|c| matches!(c, 'D' | 'H' | 'I' | 'Q' | 'S'))
        && text.chars().any(|c| c.is_ascii_lowercase());
    digraphs >= 1 || capital_mix
}

// ---------------------------------------------------------------------------
// Quenya
// ---------------------------------------------------------------------------

const QUENYA_TABLE: &[(char, &str)] = &[
    ('a', "a"), ('b', "v"), ('c', "k"), ('d', "d"), ('e', "e"), ('f', "f"),
    ('g', "g"), ('h', "h"), ('i', "i"), ('j', "y"), ('k', "k"), ('l', "l"),
    ('m', "m"), ('n', "n"), ('o', "o"), ('p', "p"), ('q', "kw"), ('r', "r"),
    ('s', "s"), ('t', "t"), ('u', "u"), ('v', "v"), ('w', "w"), ('x', "ks"),
    ('y', "y"), ('z', "z"),
];

static QUENYA_REVERSE: LazyLock<Vec<(&'static str, char)>> =
    LazyLock::new(|| reverse_sorted(QUENYA_TABLE));

fn encode_quenya(text: &str) -> String {
    fold_map(text, QUENYA_TABLE)
}

fn decode_quenya(text: &str) -> String {
    unfold_map(text, &QUENYA_REVERSE)
}

fn detect_quenya(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("kw") || lower.contains("ks")
}

// ---------------------------------------------------------------------------
// Tengwar (runic substitute glyphs)
// ---------------------------------------------------------------------------

const TENGWAR_MAP: &[(char, char)] = &[
    ('a', 'ᚪ'), ('b', 'ᛒ'), ('c', 'ᛣ'), ('d', 'ᛞ'), ('e', 'ᛖ'), ('f', 'ᚠ'),
    ('g', 'ᚷ'), ('h', 'ᚺ'), ('i', 'ᛁ'), ('j', 'ᛃ'), ('k', 'ᛣ'), ('l', 'ᛚ'),
    ('m', 'ᛗ'), ('n', 'ᚾ'), ('o', 'ᚩ'), ('p', 'ᛈ'), ('q', 'ᛩ'), ('r', 'ᚱ'),
    ('s', 'ᛋ'), ('t', 'ᛏ'), ('u', 'ᚢ'), ('v', 'ᚡ'), ('w', 'ᚹ'), ('x', 'ᛉ'),
    ('y', 'ᚣ'), ('z', 'ᛉ'),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aurebesh_roundtrip() {
        let enc = encode_aurebesh("hi");
        assert_eq!(enc, "Herf Isk");
        assert_eq!(decode_aurebesh(&enc), "hi");
        assert!(detect_aurebesh(&enc));
        assert!(!detect_aurebesh("plain prose here"));
    }

    #[test]
    fn dovahzul_expansions() {
        assert_eq!(encode_dovahzul("fire"), "fiireh");
        assert!(detect_dovahzul(&encode_dovahzul("fire")));
        // a, e, i expand and collapse back.
        assert_eq!(decode_dovahzul(&encode_dovahzul("ride")), "ride");
    }

    #[test]
    fn klingon_digraphs() {
        assert_eq!(encode_klingon("chess"), "chHeSS");
        assert_eq!(encode_klingon("kling"), "qlIngh");
        assert!(detect_klingon(&encode_klingon("chess")));
        assert_eq!(decode_klingon("ch"), "c");
    }

    #[test]
    fn quenya_detector() {
        assert_eq!(encode_quenya("quiz"), "kwuiz");
        assert!(detect_quenya("kwuiz"));
        assert!(!detect_quenya("plain words"));
    }
}
