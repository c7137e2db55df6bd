// Classical ciphers. All operate on ASCII letter (and digit, for the ROT5
// family) ranges only, leaving every other character unchanged, so
// decode(encode(x)) == x holds for ASCII input.

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec, spec::PRIORITY_CIPHER,
};

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Caesar Cipher",
            Category::Cipher,
            Algorithm::Rotate {
                letters: 3,
                digits: 0,
            },
        )
        .priority(PRIORITY_CIPHER)
        .detect(detect_mostly_letters),
        TransformSpec::new(
            "ROT13",
            Category::Cipher,
            Algorithm::Rotate {
                letters: 13,
                digits: 0,
            },
        )
        .priority(PRIORITY_CIPHER)
        .detect(detect_mostly_letters),
        TransformSpec::new(
            "ROT5",
            Category::Cipher,
            Algorithm::Rotate {
                letters: 0,
                digits: 5,
            },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "ROT18",
            Category::Cipher,
            Algorithm::Rotate {
                letters: 13,
                digits: 5,
            },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "ROT47",
            Category::Cipher,
            Algorithm::Custom {
                encode: rot47,
                decode: Some(rot47),
            },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "Atbash Cipher",
            Category::Cipher,
            Algorithm::Custom {
                encode: atbash,
                decode: Some(atbash),
            },
        )
        .priority(PRIORITY_CIPHER)
        .detect(detect_mostly_letters),
        TransformSpec::new(
            "Affine Cipher (a=5,b=8)",
            Category::Cipher,
            Algorithm::Affine { a: 5, b: 8 },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "Vigenère Cipher",
            Category::Cipher,
            Algorithm::Vigenere { key: "KEY" },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "Baconian Cipher",
            Category::Cipher,
            Algorithm::Custom {
                encode: encode_baconian,
                decode: Some(decode_baconian),
            },
        )
        .priority(PRIORITY_CIPHER),
        TransformSpec::new(
            "Rail Fence (3 Rails)",
            Category::Cipher,
            Algorithm::Custom {
                encode: encode_rail_fence,
                decode: Some(decode_rail_fence),
            },
        )
        .priority(PRIORITY_CIPHER),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

/// Letter-substitution ciphers can only claim text that is mostly letters:
/// strip whitespace, digits, and common punctuation, then require a ≥ 70%
/// letter ratio over at least five remaining characters.
fn detect_mostly_letters(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| {
            !c.is_whitespace()
                && !c.is_ascii_digit()
                && !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' | '(' | ')' | '-' | '&')
        })
        .collect();
    if cleaned.len() < 5 {
        return false;
    }
    let letters = cleaned.iter().filter(|c| c.is_ascii_alphabetic()).count();
    letters as f64 / cleaned.len() as f64 > 0.7
}

/// ROT47 rotates the full printable ASCII range 33-126 by half its span,
/// which makes it self-inverse.
fn rot47(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => (33 + ((c as u8 - 33 + 47) % 94)) as char,
            _ => c,
        })
        .collect()
}

fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
            'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
            _ => c,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Baconian
// ---------------------------------------------------------------------------

/// Letter index as five A/B symbols (0 -> A, 1 -> B).
fn bacon_code(index: u8) -> String {
    (0..5)
        .map(|bit| {
            if index & (1 << (4 - bit)) != 0 {
                'B'
            } else {
                'A'
            }
        })
        .collect()
}

fn encode_baconian(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_uppercase())
        .map(|c| match c {
            'A'..='Z' => bacon_code(c as u8 - b'A'),
            c if c.is_whitespace() => "/".to_string(),
            c => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_baconian(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if token == "/" {
                return " ".to_string();
            }
            let cleaned: String = token.chars().filter(|c| matches!(c, 'A' | 'B')).collect();
            if cleaned.len() == 5 {
                let index = cleaned
                    .chars()
                    .fold(0u8, |acc, c| (acc << 1) | u8::from(c == 'B'));
                if index < 26 {
                    return ((b'A' + index) as char).to_string();
                }
            }
            token.to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rail fence
// ---------------------------------------------------------------------------

const RAILS: usize = 3;

/// The rail index each successive character lands on (0,1,2,1,0,1,...).
fn rail_pattern(len: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == 0 || rail == RAILS - 1 {
            down = rail == 0;
        }
    }
    pattern
}

fn encode_rail_fence(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let pattern = rail_pattern(chars.len());
    let mut rails: Vec<String> = vec![String::new(); RAILS];
    for (c, &r) in chars.iter().zip(&pattern) {
        rails[r].push(*c);
    }
    rails.concat()
}

fn decode_rail_fence(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let pattern = rail_pattern(chars.len());
    let mut counts = [0usize; RAILS];
    for &r in &pattern {
        counts[r] += 1;
    }
    let mut rails: Vec<Vec<char>> = Vec::with_capacity(RAILS);
    let mut idx = 0;
    for &count in &counts {
        rails.push(chars[idx..idx + count].to_vec());
        idx += count;
    }
    let mut positions = [0usize; RAILS];
    pattern
        .iter()
        .map(|&r| {
            let c = rails[r][positions[r]];
            positions[r] += 1;
            c
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::builtin;

    #[test]
    fn caesar_shift_three() {
        let reg = builtin();
        assert_eq!(reg.encode("caesar_cipher", "abc").unwrap(), "def");
        assert_eq!(reg.decode("caesar_cipher", "def").unwrap(), "abc");
        assert_eq!(reg.encode("caesar_cipher", "xyz!").unwrap(), "abc!");
    }

    #[test]
    fn rot13_self_inverse() {
        let reg = builtin();
        let enc = reg.encode("rot13", "Attack at Dawn").unwrap();
        assert_eq!(enc, "Nggnpx ng Qnja");
        assert_eq!(reg.encode("rot13", &enc).unwrap(), "Attack at Dawn");
        assert_eq!(reg.decode("rot13", &enc).unwrap(), "Attack at Dawn");
    }

    #[test]
    fn rot18_combines_rot13_and_rot5() {
        let reg = builtin();
        let enc = reg.encode("rot18", "abc123").unwrap();
        assert_eq!(enc, "nop678");
        assert_eq!(reg.decode("rot18", &enc).unwrap(), "abc123");
    }

    #[test]
    fn rot47_self_inverse() {
        let enc = rot47("Hello, World!");
        assert_eq!(rot47(&enc), "Hello, World!");
        assert_ne!(enc, "Hello, World!");
    }

    #[test]
    fn atbash_mirror() {
        assert_eq!(atbash("abz"), "zya");
        assert_eq!(atbash(&atbash("Attack at Dawn")), "Attack at Dawn");
    }

    #[test]
    fn affine_known_values() {
        let reg = builtin();
        // 5*0+8 = 8 -> 'i'
        assert_eq!(reg.encode("affine_cipher_a_5_b_8", "a").unwrap(), "i");
        let enc = reg.encode("affine_cipher_a_5_b_8", "Attack at Dawn").unwrap();
        assert_eq!(
            reg.decode("affine_cipher_a_5_b_8", &enc).unwrap(),
            "Attack at Dawn"
        );
    }

    #[test]
    fn vigenere_roundtrip_with_punctuation() {
        let reg = builtin();
        let enc = reg.encode("vigenère_cipher", "Attack at Dawn!").unwrap();
        assert_eq!(reg.decode("vigenère_cipher", &enc).unwrap(), "Attack at Dawn!");
    }

    #[test]
    fn baconian_roundtrip() {
        assert_eq!(encode_baconian("ab"), "AAAAA AAAAB");
        assert_eq!(decode_baconian("AAAAA AAAAB"), "AB");
        assert_eq!(decode_baconian(&encode_baconian("hello world")), "HELLO WORLD");
    }

    #[test]
    fn rail_fence_roundtrip() {
        assert_eq!(encode_rail_fence("WEAREDISCOVERED"), "WECRERDSOEEAIVD");
        for s in ["", "a", "ab", "hello world", "Hello World. <3 🌞"] {
            assert_eq!(decode_rail_fence(&encode_rail_fence(s)), s);
        }
    }

    #[test]
    fn letter_detector_thresholds() {
        assert!(detect_mostly_letters("Nggnpx ng Qnja"));
        assert!(!detect_mostly_letters("abc"));
        assert!(!detect_mostly_letters("01010101 01100"));
    }
}
