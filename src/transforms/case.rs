// Case styles. The word-boundary encoders lowercase and collapse every
// non-alphanumeric separator to a single delimiter, so decoding cannot
// restore the original spacing or punctuation; decode replaces the delimiter
// with a space, best effort.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{
        PRIORITY_ACTIVE_CONTEXT, PRIORITY_BASE32_FAMILY, PRIORITY_BASE58_FAMILY,
        PRIORITY_GENERIC,
    },
};
use crate::text::ascii_words;

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "snake_case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_snake,
                decode: Some(decode_snake),
            },
        )
        .priority(PRIORITY_BASE32_FAMILY)
        .detect(detect_snake),
        TransformSpec::new(
            "kebab-case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_kebab,
                decode: Some(decode_kebab),
            },
        )
        .priority(PRIORITY_BASE32_FAMILY)
        .detect(detect_kebab),
        TransformSpec::new(
            "camelCase",
            Category::Case,
            Algorithm::Custom {
                encode: encode_camel,
                decode: None,
            },
        )
        .priority(PRIORITY_BASE58_FAMILY),
        TransformSpec::new(
            "Title Case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_title,
                decode: None,
            },
        )
        .priority(PRIORITY_ACTIVE_CONTEXT),
        TransformSpec::new(
            "Sentence Case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_sentence,
                decode: None,
            },
        )
        .priority(PRIORITY_ACTIVE_CONTEXT),
        TransformSpec::new(
            "Alternating Case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_alternating,
                decode: Some(decode_alternating),
            },
        )
        .priority(PRIORITY_ACTIVE_CONTEXT)
        .detect(detect_alternating),
        TransformSpec::new(
            "Random Case",
            Category::Case,
            Algorithm::Custom {
                encode: encode_random_case,
                decode: None,
            },
        )
        .priority(PRIORITY_GENERIC),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

fn joined_lowercase(text: &str, sep: char) -> String {
    ascii_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(&sep.to_string())
}

fn encode_snake(text: &str) -> String {
    joined_lowercase(text, '_')
}

fn decode_snake(text: &str) -> String {
    text.replace('_', " ")
}

fn detect_snake(text: &str) -> bool {
    delimited_lowercase(text.trim(), '_') && text.chars().any(|c| c.is_ascii_lowercase())
}

fn encode_kebab(text: &str) -> String {
    joined_lowercase(text, '-')
}

fn decode_kebab(text: &str) -> String {
    text.replace('-', " ")
}

/// kebab-case shares its surface with A1Z26 (`8-5-12-12-15`); pure numeric
/// sequences in the letter-code range are ceded to that transform.
fn detect_kebab(text: &str) -> bool {
    let cleaned = text.trim();
    if !delimited_lowercase(cleaned, '-') {
        return false;
    }
    let all_letter_codes = cleaned.split('-').all(|part| {
        part.parse::<u32>()
            .map(|n| (1..=26).contains(&n))
            .unwrap_or(false)
    });
    !all_letter_codes
}

/// `[a-z0-9]+(<sep>[a-z0-9]+)+` — at least two runs joined by the delimiter.
fn delimited_lowercase(text: &str, sep: char) -> bool {
    let parts: Vec<&str> = text.split(sep).collect();
    parts.len() >= 2
        && parts.iter().all(|p| {
            !p.is_empty()
                && p.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

fn encode_camel(text: &str) -> String {
    let words = ascii_words(text);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

fn encode_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn encode_sentence(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn encode_alternating(text: &str) -> String {
    let mut upper = true;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let out = if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                };
                upper = !upper;
                out
            } else {
                c
            }
        })
        .collect()
}

/// The original case pattern is gone; lowercase is the documented best effort.
fn decode_alternating(text: &str) -> String {
    text.to_lowercase()
}

fn detect_alternating(text: &str) -> bool {
    let cleaned = text.trim();
    if cleaned.chars().count() < 4 {
        return false;
    }
    let mut last_upper: Option<bool> = None;
    let mut alternations = 0usize;
    let mut letters = 0usize;
    for c in cleaned.chars() {
        if c.is_ascii_alphabetic() {
            let is_upper = c.is_ascii_uppercase();
            if let Some(last) = last_upper {
                if last != is_upper {
                    alternations += 1;
                }
            }
            last_upper = Some(is_upper);
            letters += 1;
        }
    }
    letters >= 4 && alternations >= 3 && alternations * 10 >= letters * 7
}

/// Pseudo-random casing, seeded from the input so repeated encodes agree.
fn encode_random_case(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                if rng.random_bool(0.5) {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
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
    fn snake_and_kebab_lossy_roundtrip() {
        assert_eq!(encode_snake("Hello, World!"), "hello_world");
        assert_eq!(decode_snake("hello_world"), "hello world");
        assert_eq!(encode_kebab("Hello, World!"), "hello-world");
        assert_eq!(decode_kebab("hello-world"), "hello world");
    }

    #[test]
    fn snake_detector() {
        assert!(detect_snake("hello_world_42"));
        assert!(!detect_snake("hello world"));
        assert!(!detect_snake("Hello_World"));
        assert!(!detect_snake("1_2_3"));
    }

    #[test]
    fn kebab_detector_cedes_a1z26() {
        assert!(detect_kebab("hello-world"));
        assert!(!detect_kebab("8-5-12-12-15"));
        assert!(detect_kebab("version-27-beta"));
    }

    #[test]
    fn camel_case() {
        assert_eq!(encode_camel("hello brave new world"), "helloBraveNewWorld");
        assert_eq!(encode_camel("Hello, World!"), "helloWorld");
    }

    #[test]
    fn title_and_sentence() {
        assert_eq!(encode_title("hello WORLD out there"), "Hello World Out There");
        assert_eq!(encode_sentence("hello WORLD."), "Hello world.");
    }

    #[test]
    fn alternating_case() {
        assert_eq!(encode_alternating("hello world"), "HeLlO wOrLd");
        assert!(detect_alternating("HeLlO wOrLd"));
        assert!(!detect_alternating("Hello world"));
        assert_eq!(decode_alternating("HeLlO"), "hello");
    }

    #[test]
    fn random_case_is_deterministic() {
        let a = encode_random_case("hello world hello world");
        let b = encode_random_case("hello world hello world");
        assert_eq!(a, b);
        assert_eq!(a.to_lowercase(), "hello world hello world");
    }
}
