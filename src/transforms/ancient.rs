// Ancient scripts: runes, ogham, hieroglyphs, and roman numerals.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{PRIORITY_COMMON, PRIORITY_UNICODE_RANGE},
};

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Elder Futhark",
            Category::Ancient,
            Algorithm::Custom {
                encode: encode_futhark,
                decode: Some(decode_futhark),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE)
        .detect(detect_futhark),
        TransformSpec::new(
            "Ogham (Celtic)",
            Category::Ancient,
            Algorithm::FoldedCharMap(OGHAM_MAP),
        )
        .priority(PRIORITY_COMMON)
        .detect(detect_ogham),
        TransformSpec::new(
            "Hieroglyphics",
            Category::Ancient,
            Algorithm::FoldedCharMap(HIEROGLYPH_MAP),
        )
        .priority(PRIORITY_COMMON),
        TransformSpec::new(
            "Roman Numerals",
            Category::Ancient,
            Algorithm::Custom {
                encode: encode_roman,
                decode: Some(decode_roman),
            },
        )
        .priority(PRIORITY_COMMON),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

// ---------------------------------------------------------------------------
// Elder Futhark
// ---------------------------------------------------------------------------

/// q and x have no single rune; they transliterate as digraphs.
const FUTHARK_TABLE: &[(char, &str)] = &[
    ('a', "ᚨ"), ('b', "ᛒ"), ('c', "ᚳ"), ('d', "ᛞ"), ('e', "ᛖ"), ('f', "ᚠ"),
    ('g', "ᚷ"), ('h', "ᚺ"), ('i', "ᛁ"), ('j', "ᛃ"), ('k', "ᚲ"), ('l', "ᛚ"),
    ('m', "ᛗ"), ('n', "ᚾ"), ('o', "ᛟ"), ('p', "ᛈ"), ('q', "ᚲᚹ"), ('r', "ᚱ"),
    ('s', "ᛋ"), ('t', "ᛏ"), ('u', "ᚢ"), ('v', "ᚡ"), ('w', "ᚹ"), ('x', "ᚳᛋ"),
    ('y', "ᚤ"), ('z', "ᛉ"),
];

/// Rune sequences ordered longest first so the q/x digraphs decode before
/// their component runes.
static FUTHARK_REVERSE: LazyLock<Vec<(&'static str, char)>> = LazyLock::new(|| {
    let mut rev: Vec<(&str, char)> = FUTHARK_TABLE.iter().map(|&(c, r)| (r, c)).collect();
    rev.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    rev
});

fn encode_futhark(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| {
            FUTHARK_TABLE
                .iter()
                .find(|&&(l, _)| l == c)
                .map(|&(_, rune)| rune.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

fn decode_futhark(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        match FUTHARK_REVERSE.iter().find(|(rune, _)| rest.starts_with(rune)) {
            Some((rune, c)) => {
                out.push(*c);
                rest = &rest[rune.len()..];
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

fn detect_futhark(text: &str) -> bool {
    text.chars().any(|c| ('\u{16A0}'..='\u{16F8}').contains(&c))
}

// ---------------------------------------------------------------------------
// Ogham
// ---------------------------------------------------------------------------

/// The twenty historic letters cover more than one latin letter each
/// (q/k/x share ᚊ, v/w/f share ᚃ); decode collapses to the last entry.
const OGHAM_MAP: &[(char, char)] = &[
    ('a', 'ᚐ'), ('b', 'ᚁ'), ('c', 'ᚉ'), ('d', 'ᚇ'), ('e', 'ᚓ'), ('f', 'ᚃ'),
    ('g', 'ᚌ'), ('h', 'ᚆ'), ('i', 'ᚔ'), ('j', 'ᚈ'), ('k', 'ᚊ'), ('l', 'ᚂ'),
    ('m', 'ᚋ'), ('n', 'ᚅ'), ('o', 'ᚑ'), ('p', 'ᚚ'), ('q', 'ᚊ'), ('r', 'ᚏ'),
    ('s', 'ᚄ'), ('t', 'ᚈ'), ('u', 'ᚒ'), ('v', 'ᚃ'), ('w', 'ᚃ'), ('x', 'ᚊ'),
    ('y', 'ᚔ'), ('z', 'ᚎ'),
];

fn detect_ogham(text: &str) -> bool {
    text.chars().any(|c| ('\u{1680}'..='\u{169C}').contains(&c))
}

// ---------------------------------------------------------------------------
// Hieroglyphics
// ---------------------------------------------------------------------------

const HIEROGLYPH_MAP: &[(char, char)] = &[
    ('a', '𓃭'), ('b', '𓃮'), ('c', '𓃯'), ('d', '𓃰'), ('e', '𓃱'), ('f', '𓃲'),
    ('g', '𓃳'), ('h', '𓃴'), ('i', '𓃵'), ('j', '𓃶'), ('k', '𓃷'), ('l', '𓃸'),
    ('m', '𓃹'), ('n', '𓃺'), ('o', '𓃻'), ('p', '𓃼'), ('q', '𓃽'), ('r', '𓃾'),
    ('s', '𓃿'), ('t', '𓄀'), ('u', '𓄁'), ('v', '𓄂'), ('w', '𓄃'), ('x', '𓄄'),
    ('y', '𓄅'), ('z', '𓄆'), ('A', '𓄇'), ('B', '𓄈'), ('C', '𓄉'), ('D', '𓄊'),
    ('E', '𓄋'), ('F', '𓄌'), ('G', '𓄍'), ('H', '𓄎'), ('I', '𓄏'), ('J', '𓄐'),
    ('K', '𓄑'), ('L', '𓄒'), ('M', '𓄓'), ('N', '𓄔'), ('O', '𓄕'), ('P', '𓄖'),
    ('Q', '𓄗'), ('R', '𓄘'), ('S', '𓄙'), ('T', '𓄚'), ('U', '𓄛'), ('V', '𓄜'),
    ('W', '𓄝'), ('X', '𓄞'), ('Y', '𓄟'), ('Z', '𓄠'),
];

// ---------------------------------------------------------------------------
// Roman numerals
// ---------------------------------------------------------------------------

const ROMAN_VALUES: &[(&str, u32)] = &[
    ("M", 1000), ("CM", 900), ("D", 500), ("CD", 400),
    ("C", 100), ("XC", 90), ("L", 50), ("XL", 40),
    ("X", 10), ("IX", 9), ("V", 5), ("IV", 4), ("I", 1),
];

static ROMAN_DIGITS: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    [('I', 1), ('V', 5), ('X', 10), ('L', 50), ('C', 100), ('D', 500), ('M', 1000)]
        .into_iter()
        .collect()
});

fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for &(sym, val) in ROMAN_VALUES {
        while n >= val {
            out.push_str(sym);
            n -= val;
        }
    }
    out
}

/// Only standalone numbers (not digits glued to letters) are converted;
/// 0 and anything above 3999 stay as digits.
fn encode_roman(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let standalone = (start == 0 || !chars[start - 1].is_alphanumeric())
                && (i == chars.len() || !chars[i].is_alphanumeric());
            let run: String = chars[start..i].iter().collect();
            match run.parse::<u32>() {
                Ok(n) if standalone && n >= 1 && n <= 3999 => out.push_str(&to_roman(n)),
                _ => out.push_str(&run),
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn roman_to_number(token: &str) -> u32 {
    let digits: Vec<u32> = token
        .chars()
        .filter_map(|c| ROMAN_DIGITS.get(&c.to_ascii_uppercase()).copied())
        .collect();
    let mut total = 0i64;
    for (i, &v) in digits.iter().enumerate() {
        let next = digits.get(i + 1).copied().unwrap_or(0);
        if v < next {
            total -= v as i64;
        } else {
            total += v as i64;
        }
    }
    total.max(0) as u32
}

fn decode_roman(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    let is_roman = |c: char| ROMAN_DIGITS.contains_key(&c.to_ascii_uppercase());
    while i < chars.len() {
        if is_roman(chars[i]) {
            let start = i;
            while i < chars.len() && is_roman(chars[i]) {
                i += 1;
            }
            let token: String = chars[start..i].iter().collect();
            out.push_str(&roman_to_number(&token).to_string());
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn futhark_roundtrip_with_digraphs() {
        let enc = encode_futhark("quux");
        assert_eq!(decode_futhark(&enc), "quux");
        assert!(detect_futhark(&enc));
    }

    #[test]
    fn roman_encode_standalone_numbers_only() {
        assert_eq!(encode_roman("year 2024 ok"), "year MMXXIV ok");
        assert_eq!(encode_roman("abc123"), "abc123");
        assert_eq!(encode_roman("0 and 4000"), "0 and 4000");
    }

    #[test]
    fn roman_decode() {
        assert_eq!(decode_roman("MMXXIV"), "2024");
        assert_eq!(decode_roman("year MMXXIV ok"), "year 2024 ok");
        assert_eq!(decode_roman("IV IX"), "4 9");
    }
}
