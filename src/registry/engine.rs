// Execution engine: one interpreter for every `Algorithm` variant.
//
// Character maps are compiled into forward/reverse hash maps when a spec is
// registered, so decoding never mutates a transform after construction.

use std::collections::HashMap;

use rand::rng;

use super::spec::Algorithm;
use super::{Registry, Transform};

/// Forward/reverse lookup tables compiled from a `CharMap` spec.
#[derive(Debug)]
pub(crate) struct CompiledMap {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
    folded: bool,
}

impl CompiledMap {
    /// Build both directions once. Later entries win on reverse collisions,
    /// matching the original tables (e.g. leetspeak's `1` decoding to `l`).
    pub(crate) fn build(entries: &[(char, char)], folded: bool) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse = HashMap::with_capacity(entries.len());
        for &(from, to) in entries {
            forward.insert(from, to);
            reverse.insert(to, from);
        }
        Self {
            forward,
            reverse,
            folded,
        }
    }

    fn encode(&self, text: &str) -> String {
        let apply = |c: char| *self.forward.get(&c).unwrap_or(&c);
        if self.folded {
            text.chars()
                .flat_map(|c| c.to_lowercase())
                .map(apply)
                .collect()
        } else {
            text.chars().map(apply).collect()
        }
    }

    fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| *self.reverse.get(&c).unwrap_or(&c))
            .collect()
    }
}

/// Run a transform's encoder. `registry` is only consulted by Random Mix,
/// which applies other registered transforms per word.
pub(crate) fn encode(registry: &Registry, transform: &Transform, text: &str) -> String {
    match &transform.algorithm {
        Algorithm::CharMap(_) | Algorithm::FoldedCharMap(_) => transform
            .compiled
            .as_ref()
            .expect("char map compiled at registration")
            .encode(text),
        Algorithm::Rotate { letters, digits } => rotate(text, *letters, *digits),
        Algorithm::Affine { a, b } => affine(text, *a as i16, *b as i16),
        Algorithm::Vigenere { key } => vigenere(text, key, false),
        Algorithm::Custom { encode, .. } => encode(text),
        Algorithm::RandomMix(opts) => registry.random_mix(text, &mut rng(), opts).text,
    }
}

/// Run a transform's decoder, if it has one.
pub(crate) fn decode(transform: &Transform, text: &str) -> Option<String> {
    match &transform.algorithm {
        Algorithm::CharMap(_) | Algorithm::FoldedCharMap(_) => Some(
            transform
                .compiled
                .as_ref()
                .expect("char map compiled at registration")
                .decode(text),
        ),
        Algorithm::Rotate { letters, digits } => Some(rotate(
            text,
            (26 - letters % 26) % 26,
            (10 - digits % 10) % 10,
        )),
        Algorithm::Affine { a, b } => {
            let inv = modular_inverse(*a as i16)?;
            Some(affine_decode(text, inv, *b as i16))
        }
        Algorithm::Vigenere { key } => Some(vigenere(text, key, true)),
        Algorithm::Custom { decode, .. } => decode.map(|f| f(text)),
        Algorithm::RandomMix(_) => None,
    }
}

pub(crate) fn can_decode(algorithm: &Algorithm) -> bool {
    match algorithm {
        Algorithm::CharMap(_)
        | Algorithm::FoldedCharMap(_)
        | Algorithm::Rotate { .. }
        | Algorithm::Affine { .. }
        | Algorithm::Vigenere { .. } => true,
        Algorithm::Custom { decode, .. } => decode.is_some(),
        Algorithm::RandomMix(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Cipher primitives
// ---------------------------------------------------------------------------

/// Shift ASCII letters by `letters` and ASCII digits by `digits`; everything
/// else passes through unchanged.
fn rotate(text: &str, letters: u8, digits: u8) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => shift_in(c, b'A', 26, letters),
            'a'..='z' => shift_in(c, b'a', 26, letters),
            '0'..='9' => shift_in(c, b'0', 10, digits),
            _ => c,
        })
        .collect()
}

fn shift_in(c: char, base: u8, span: u8, by: u8) -> char {
    let offset = (c as u8 - base + by % span) % span;
    (base + offset) as char
}

fn affine(text: &str, a: i16, b: i16) -> String {
    map_letters(text, |x| (a * x + b).rem_euclid(26))
}

fn affine_decode(text: &str, inv: i16, b: i16) -> String {
    map_letters(text, |x| (inv * (x - b).rem_euclid(26)).rem_euclid(26))
}

fn map_letters(text: &str, f: impl Fn(i16) -> i16) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (b'A' + f((c as u8 - b'A') as i16) as u8) as char,
            'a'..='z' => (b'a' + f((c as u8 - b'a') as i16) as u8) as char,
            _ => c,
        })
        .collect()
}

/// Multiplicative inverse of `a` mod 26, if `a` is coprime with 26.
fn modular_inverse(a: i16) -> Option<i16> {
    (1..26).find(|&inv| (a * inv).rem_euclid(26) == 1)
}

/// Vigenère over ASCII letters; the key index advances only on letters.
fn vigenere(text: &str, key: &str, decode: bool) -> String {
    let key: Vec<u8> = key
        .bytes()
        .map(|b| b.to_ascii_uppercase().wrapping_sub(b'A') % 26)
        .collect();
    if key.is_empty() {
        return text.to_string();
    }
    let mut j = 0usize;
    text.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' => {
                let k = key[j % key.len()];
                let by = if decode { 26 - k } else { k };
                j += 1;
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                shift_in(c, base, 26, by)
            }
            _ => c,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_caesar() {
        assert_eq!(rotate("abc", 3, 0), "def");
        assert_eq!(rotate("def", 23, 0), "abc");
        assert_eq!(rotate("XYZ", 3, 0), "ABC");
        assert_eq!(rotate("a1!", 13, 5), "n6!");
    }

    #[test]
    fn affine_roundtrip() {
        let enc = affine("Attack", 5, 8);
        let inv = modular_inverse(5).unwrap();
        assert_eq!(inv, 21);
        assert_eq!(affine_decode(&enc, inv, 8), "Attack");
    }

    #[test]
    fn vigenere_roundtrip() {
        let enc = vigenere("Attack at Dawn!", "KEY", false);
        assert_eq!(vigenere(&enc, "KEY", true), "Attack at Dawn!");
        // Key skips non-letters.
        assert_eq!(vigenere("ab cd", "BB", false), "bc de");
    }

    #[test]
    fn compiled_map_reverse_last_wins() {
        let map = CompiledMap::build(&[('i', '1'), ('l', '1')], false);
        assert_eq!(map.decode("1"), "l");
    }

    #[test]
    fn compiled_map_passthrough() {
        let map = CompiledMap::build(&[('a', 'α')], false);
        assert_eq!(map.encode("ab!"), "αb!");
        assert_eq!(map.decode("αb!"), "ab!");
    }
}
