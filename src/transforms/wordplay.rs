// Word games and visual tricks: pig latin, leetspeak, keyboard shifts,
// reversals, and friends.
//
// Pig Latin's decoder reproduces the reference tie-break heuristics exactly;
// the "-way" reversal is genuinely ambiguous ("away" vs "wind"), and
// matching the established behavior matters more than linguistic truth.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{PRIORITY_COMMON, PRIORITY_GENERIC, PRIORITY_PATTERN},
};
use crate::text::word_segments;

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Pig Latin",
            Category::Visual,
            Algorithm::Custom {
                encode: encode_pig_latin,
                decode: Some(decode_pig_latin),
            },
        )
        .priority(PRIORITY_PATTERN)
        .detect(detect_pig_latin),
        TransformSpec::new("Leetspeak", Category::Visual, Algorithm::CharMap(LEET_MAP))
            .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "QWERTY Right Shift",
            Category::Visual,
            Algorithm::Custom {
                encode: encode_qwerty,
                decode: Some(decode_qwerty),
            },
        )
        .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "Reverse Text",
            Category::Visual,
            Algorithm::Custom {
                encode: reverse_text,
                decode: Some(reverse_text),
            },
        )
        .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "Reverse Words",
            Category::Visual,
            Algorithm::Custom {
                encode: reverse_words,
                decode: Some(reverse_words),
            },
        )
        .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "Disemvowel",
            Category::Visual,
            Algorithm::Custom {
                encode: disemvowel,
                decode: None,
            },
        )
        .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "Emoji Speak",
            Category::Visual,
            Algorithm::Custom {
                encode: encode_emoji_speak,
                decode: None,
            },
        )
        .priority(PRIORITY_COMMON),
        TransformSpec::new(
            "Rövarspråket",
            Category::Visual,
            Algorithm::Custom {
                encode: encode_rovarspraket,
                decode: Some(decode_rovarspraket),
            },
        )
        .priority(PRIORITY_GENERIC),
        TransformSpec::new(
            "Ubbi Dubbi",
            Category::Visual,
            Algorithm::Custom {
                encode: encode_ubbi_dubbi,
                decode: Some(decode_ubbi_dubbi),
            },
        )
        .priority(PRIORITY_GENERIC),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_pig_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Pig Latin
// ---------------------------------------------------------------------------

fn encode_pig_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let first = word.chars().next().expect("non-empty");
    if is_vowel(first) {
        return format!("{word}way");
    }
    // Move the leading non-vowel run (letters or not) to the back.
    let split = word
        .char_indices()
        .find(|&(_, c)| is_vowel(c))
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    format!("{}{}ay", &word[split..], &word[..split])
}

fn encode_pig_latin(text: &str) -> String {
    text.split_whitespace()
        .map(encode_pig_word)
        .collect::<Vec<_>>()
        .join(" ")
}

const COMMON_CLUSTERS: &[&str] = &[
    "th", "ch", "sh", "wh", "ph", "gh", "ck", "ng", "qu", "str", "spr", "thr", "chr", "scr",
    "squ", "spl", "shr",
];

fn decode_pig_word(word: &str) -> String {
    let len = word.chars().count();

    // "-way" endings: either a vowel-initial word plus "way", or a word whose
    // leading "w" was moved. Re-encode both readings and compare.
    if word.ends_with("way") && len > 3 {
        let base = &word[..word.len() - 3];
        let option2 = format!("w{base}");

        let test1 = base
            .chars()
            .next()
            .filter(|&c| is_vowel(c))
            .map(|_| format!("{base}way"));
        let reencoded2 = encode_pig_word(&option2);

        let matches1 = test1.as_deref() == Some(word);
        let matches2 = reencoded2 == word;

        if matches1 && !matches2 {
            return base.to_string();
        }
        if matches2 && !matches1 {
            return option2;
        }
        if matches1 && matches2 {
            // Ambiguous. Very short bases are usually complete words
            // ("is", "a"); otherwise a vowel-initial, consonant-final base
            // reads as a moved "w" ("orld" -> "world").
            if base.chars().count() <= 2 {
                return base.to_string();
            }
            let starts_vowel = base.chars().next().map(is_vowel).unwrap_or(false);
            let ends_consonant = base.chars().last().map(is_pig_consonant).unwrap_or(false);
            if starts_vowel && ends_consonant {
                return option2;
            }
        }
        return if base.chars().next().map(is_vowel).unwrap_or(false) {
            base.to_string()
        } else {
            option2
        };
    }

    // "-ay" endings: try every split of the base into remaining + trailing
    // consonant cluster and score the candidates.
    if word.ends_with("ay") && !word.ends_with("way") && len > 2 {
        let base = &word[..word.len() - 2];
        if !base.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.to_string();
        }
        let base_chars: Vec<char> = base.chars().collect();
        let mut best: Option<(i32, String)> = None;
        for i in 1..base_chars.len() {
            let cluster: String = base_chars[base_chars.len() - i..].iter().collect();
            let remaining: String = base_chars[..base_chars.len() - i].iter().collect();
            if remaining.is_empty()
                || !cluster.chars().all(is_pig_consonant)
                || !remaining.chars().next().map(is_vowel).unwrap_or(false)
            {
                continue;
            }
            let score = if COMMON_CLUSTERS.contains(&cluster.to_lowercase().as_str()) {
                10
            } else if (2..=3).contains(&cluster.chars().count()) {
                5
            } else if cluster.chars().count() == 1 {
                2
            } else {
                1
            };
            if best.as_ref().map(|(s, _)| score > *s).unwrap_or(true) {
                best = Some((score, format!("{cluster}{remaining}")));
            }
        }
        if let Some((_, reconstructed)) = best {
            return reconstructed;
        }
    }

    word.to_string()
}

fn decode_pig_latin(text: &str) -> String {
    text.split_whitespace()
        .map(decode_pig_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn detect_pig_latin(text: &str) -> bool {
    if !text.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return false;
    }
    let ay_endings = words
        .iter()
        .filter(|word| {
            let cleaned: String = word
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase())
                .collect();
            cleaned.ends_with("ay") || cleaned.ends_with("way")
        })
        .count();
    ay_endings * 2 >= words.len()
}

// ---------------------------------------------------------------------------
// Leetspeak
// ---------------------------------------------------------------------------

/// Uppercase entries first so the derived reverse map resolves digits to
/// lowercase letters; 'l' after 'i' so '1' decodes to 'l'.
const LEET_MAP: &[(char, char)] = &[
    ('A', '4'), ('E', '3'), ('I', '1'), ('O', '0'), ('S', '5'), ('T', '7'), ('L', '1'),
    ('a', '4'), ('e', '3'), ('i', '1'), ('o', '0'), ('s', '5'), ('t', '7'), ('l', '1'),
];

// ---------------------------------------------------------------------------
// QWERTY right shift
// ---------------------------------------------------------------------------

const QWERTY_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm"];

static QWERTY_FORWARD: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for row in QWERTY_ROWS {
        let chars: Vec<char> = row.chars().collect();
        for (i, &from) in chars.iter().enumerate() {
            let to = chars[(i + 1) % chars.len()];
            map.insert(from, to);
            map.insert(from.to_ascii_uppercase(), to.to_ascii_uppercase());
        }
    }
    map
});

static QWERTY_REVERSE: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| QWERTY_FORWARD.iter().map(|(&k, &v)| (v, k)).collect());

fn encode_qwerty(text: &str) -> String {
    text.chars()
        .map(|c| *QWERTY_FORWARD.get(&c).unwrap_or(&c))
        .collect()
}

fn decode_qwerty(text: &str) -> String {
    text.chars()
        .map(|c| *QWERTY_REVERSE.get(&c).unwrap_or(&c))
        .collect()
}

// ---------------------------------------------------------------------------
// Reversals
// ---------------------------------------------------------------------------

fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse the word order, keeping each whitespace run in its mirrored slot.
fn reverse_words(text: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut in_space = None::<bool>;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(s) if s == space => {}
            Some(_) => {
                segments.push(&text[start..i]);
                start = i;
                in_space = Some(space);
            }
            None => in_space = Some(space),
        }
    }
    if in_space.is_some() {
        segments.push(&text[start..]);
    }
    segments.iter().rev().copied().collect()
}

fn disemvowel(text: &str) -> String {
    text.chars().filter(|&c| !is_vowel(c)).collect()
}

// ---------------------------------------------------------------------------
// Emoji speak
// ---------------------------------------------------------------------------

const KEYCAP: char = '\u{20E3}';
const VS16: char = '\u{FE0F}';

/// Digits become keycap emoji; words and short symbols with a matching
/// keyword in the built-in emoji index become that emoji. One-way.
fn encode_emoji_speak(text: &str) -> String {
    let catalog = crate::stego::carrier::EmojiIndex::builtin();

    // Keycap digits first.
    let mut out = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            out.push(c);
            out.push(VS16);
            out.push(KEYCAP);
        } else {
            out.push(c);
        }
    }

    // Whole-word keyword substitution.
    let mut replaced = String::new();
    for seg in word_segments(&out) {
        if seg.is_word {
            if let Some(glyph) = keyword_emoji(catalog, &seg.text.to_lowercase()) {
                replaced.push_str(glyph);
                continue;
            }
        }
        replaced.push_str(seg.text);
    }

    // Symbol keywords (<3, ?, !) longest first.
    let mut symbols: Vec<(&str, &str)> = Vec::new();
    for glyph in catalog.glyphs() {
        for kw in catalog.keywords(glyph) {
            let word_like = kw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if kw.chars().count() <= 3 && !word_like {
                symbols.push((kw.as_str(), glyph));
            }
        }
    }
    symbols.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    for (symbol, glyph) in symbols {
        if replaced.contains(symbol) {
            replaced = replaced.replace(symbol, glyph);
        }
    }
    replaced
}

fn keyword_emoji<'a>(catalog: &'a crate::stego::carrier::EmojiIndex, word: &str) -> Option<&'a str> {
    catalog
        .glyphs()
        .into_iter()
        .find(|glyph| catalog.keywords(glyph).iter().any(|kw| kw.as_str() == word))
}

// ---------------------------------------------------------------------------
// Rövarspråket / Ubbi Dubbi
// ---------------------------------------------------------------------------

fn encode_rovarspraket(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        if is_pig_consonant(c) {
            out.push(c);
            out.push('o');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapse consonant-o-consonant runs where both consonants match
/// (case-insensitively), left to right.
fn decode_rovarspraket(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len()
            && is_pig_consonant(chars[i])
            && (chars[i + 1] == 'o' || chars[i + 1] == 'O')
            && chars[i + 2].to_ascii_lowercase() == chars[i].to_ascii_lowercase()
        {
            out.push(chars[i]);
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn encode_ubbi_dubbi(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if is_vowel(c) {
            out.push_str("ub");
        }
        out.push(c);
    }
    out
}

fn decode_ubbi_dubbi(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i] == 'u' && chars[i + 1] == 'b' && is_vowel(chars[i + 2]) {
            out.push(chars[i + 2]);
            i += 3;
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
    fn pig_latin_encode() {
        assert_eq!(encode_pig_latin("hello world"), "ellohay orldway");
        assert_eq!(encode_pig_latin("apple"), "appleway");
        assert_eq!(encode_pig_latin("string"), "ingstray");
    }

    #[test]
    fn pig_latin_decode_roundtrip() {
        for phrase in ["hello world", "string theory", "apple", "three sheep"] {
            assert_eq!(decode_pig_latin(&encode_pig_latin(phrase)), phrase);
        }
    }

    #[test]
    fn pig_latin_way_disambiguation() {
        // Short vowel bases stay whole ("is" -> "isway" -> "is").
        assert_eq!(decode_pig_word("isway"), "is");
        // Vowel-initial, consonant-final base reads as a moved 'w'.
        assert_eq!(decode_pig_word("orldway"), "world");
        assert_eq!(decode_pig_word("indway"), "wind");
    }

    #[test]
    fn pig_latin_detector() {
        assert!(detect_pig_latin("ellohay orldway"));
        assert!(!detect_pig_latin("hello world"));
        assert!(!detect_pig_latin("ellohay"));
    }

    #[test]
    fn qwerty_shift_roundtrip() {
        assert_eq!(encode_qwerty("qay"), "wsu");
        assert_eq!(decode_qwerty(&encode_qwerty("Hello, World!")), "Hello, World!");
        // Row wraparound.
        assert_eq!(encode_qwerty("p"), "q");
        assert_eq!(encode_qwerty("m"), "z");
    }

    #[test]
    fn reverse_words_keeps_gaps() {
        assert_eq!(reverse_words("one two  three"), "three  two one");
        assert_eq!(reverse_words(&reverse_words("a b c")), "a b c");
    }

    #[test]
    fn disemvowel_strips() {
        assert_eq!(disemvowel("Hello World"), "Hll Wrld");
    }

    #[test]
    fn emoji_speak_digits_and_keywords() {
        let out = encode_emoji_speak("1 heart");
        assert!(out.starts_with("1\u{FE0F}\u{20E3}"));
        assert!(!out.contains("heart"));
    }

    #[test]
    fn rovarspraket_roundtrip() {
        assert_eq!(encode_rovarspraket("text"), "totexoxtot");
        assert_eq!(decode_rovarspraket("totexoxtot"), "text");
        assert_eq!(
            decode_rovarspraket(&encode_rovarspraket("Hello World")),
            "Hello World"
        );
    }

    #[test]
    fn ubbi_dubbi_roundtrip() {
        assert_eq!(encode_ubbi_dubbi("hi"), "hubi");
        assert_eq!(decode_ubbi_dubbi("hubi"), "hi");
        assert_eq!(decode_ubbi_dubbi(&encode_ubbi_dubbi("banana")), "banana");
    }
}
