// The built-in transform set.
//
// Each submodule registers its specs into the shared registry; `builtin`
// assembles the full catalog in a stable order (encodings first, then
// ciphers, notation codecs, scripts, and the word games).
//
// # Modules
//
// - `encoding`  — byte-oriented bases and escapes
// - `cipher`    — classical letter ciphers
// - `case`      — case styles (lossy by design)
// - `technical` — morse, braille, brainfuck, tap code, NATO, semaphore, A1Z26
// - `script`    — Unicode stylizations and lookalike scripts
// - `ancient`   — runes, ogham, hieroglyphs, roman numerals
// - `fantasy`   — invented-language transliterations
// - `wordplay`  — pig latin, leetspeak, reversals, and friends
// - `special`   — the Random Mix composite

pub mod ancient;
pub mod case;
pub mod cipher;
pub mod encoding;
pub mod fantasy;
pub mod script;
pub mod special;
pub mod technical;
pub mod wordplay;

use crate::registry::Registry;

/// Build a registry holding every built-in transform.
pub fn builtin() -> Registry {
    let mut reg = Registry::new();
    encoding::register(&mut reg);
    cipher::register(&mut reg);
    case::register(&mut reg);
    technical::register(&mut reg);
    script::register(&mut reg);
    ancient::register(&mut reg);
    fantasy::register(&mut reg);
    wordplay::register(&mut reg);
    special::register(&mut reg);
    reg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;

    #[test]
    fn catalog_size_and_order() {
        let reg = builtin();
        assert!(reg.len() >= 60, "expected the full catalog, got {}", reg.len());
        // Registration order is stable: encodings lead.
        let first = reg.iter().next().expect("non-empty");
        assert_eq!(first.name(), "Binary");
    }

    #[test]
    fn keys_are_unique_and_derived() {
        let reg = builtin();
        assert!(reg.get("base64").is_some());
        assert!(reg.get("emoji_speak").is_some());
        assert!(reg.get("rot13").is_some());
    }

    #[test]
    fn category_grouping() {
        let reg = builtin();
        let ciphers: Vec<_> = reg.in_category(Category::Cipher).collect();
        assert!(ciphers.len() >= 10);
        assert!(ciphers.iter().all(|t| t.category() == Category::Cipher));
    }

    #[test]
    fn every_detector_accepts_own_encode_output() {
        let reg = builtin();
        // Detectors are structural, so a few need input that exercises their
        // structure (entities, q/x digraphs).
        let samples = |name: &str| match name {
            "HTML Entities" => "a <b> & 'c'",
            "Quenya (Tolkien Elvish)" => "quixotic quest",
            _ => "hello brave new world",
        };
        for t in reg.iter() {
            if !t.has_detector() || !t.can_decode() {
                continue;
            }
            let encoded = reg.encode_with(t, samples(t.name()));
            assert!(
                t.detect(&encoded),
                "{} does not detect its own output: {encoded:?}",
                t.name()
            );
        }
    }
}
