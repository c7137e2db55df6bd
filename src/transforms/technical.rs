// Signal and notation codecs: morse, braille, brainfuck, tap code, the NATO
// alphabet, flag semaphore, and A1Z26. These own the most exclusive
// character sets in the registry, so their detectors carry the top priority
// bands and minimum-length guards against trivial input.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{PRIORITY_BASE58_FAMILY, PRIORITY_EXCLUSIVE_SET, PRIORITY_UNIQUE_SYMBOLS},
};
use crate::text::lossy_utf8;

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Morse Code",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_morse,
                decode: Some(decode_morse),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET)
        .detect(detect_morse),
        TransformSpec::new(
            "Braille",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_braille,
                decode: Some(decode_braille),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET)
        .detect(detect_braille),
        TransformSpec::new(
            "Brainfuck",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_brainfuck,
                decode: Some(decode_brainfuck),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET)
        .detect(detect_brainfuck),
        TransformSpec::new(
            "Tap Code",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_tap,
                decode: Some(decode_tap),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET)
        .detect(detect_tap),
        TransformSpec::new(
            "NATO Phonetic",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_nato,
                decode: Some(decode_nato),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET),
        TransformSpec::new(
            "Semaphore Flags",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_semaphore,
                decode: Some(decode_semaphore),
            },
        )
        .priority(PRIORITY_UNIQUE_SYMBOLS)
        .detect(detect_semaphore),
        TransformSpec::new(
            "A1Z26",
            Category::Technical,
            Algorithm::Custom {
                encode: encode_a1z26,
                decode: Some(decode_a1z26),
            },
        )
        .priority(PRIORITY_BASE58_FAMILY)
        .detect(detect_a1z26),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

// ---------------------------------------------------------------------------
// Morse
// ---------------------------------------------------------------------------

const MORSE_TABLE: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static MORSE_REVERSE: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect());

fn encode_morse(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .flat_map(|c| c.to_lowercase())
                .filter_map(|c| MORSE_TABLE.iter().find(|&&(m, _)| m == c))
                .map(|&(_, code)| code)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

fn decode_morse(text: &str) -> String {
    // Both "/" and a run of three-plus spaces separate words.
    let normalized = collapse_wide_gaps(text);
    normalized
        .split('/')
        .map(|word| {
            word.split_whitespace()
                .filter_map(|code| MORSE_REVERSE.get(code))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_wide_gaps(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut spaces = 0usize;
    for c in text.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= 3 {
            out.push_str(" / ");
        } else {
            for _ in 0..spaces {
                out.push(' ');
            }
        }
        spaces = 0;
        out.push(c);
    }
    out
}

fn detect_morse(text: &str) -> bool {
    let cleaned = text.trim();
    cleaned.chars().count() >= 5
        && cleaned
            .chars()
            .all(|c| c == '.' || c == '-' || c == '/' || c.is_whitespace())
}

// ---------------------------------------------------------------------------
// Braille
// ---------------------------------------------------------------------------

const BRAILLE_LETTERS: &[(char, char)] = &[
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
];

/// Digits reuse the a-j cells behind the number indicator ⠼.
const BRAILLE_DIGITS: &[(char, char)] = &[
    ('1', '⠁'),
    ('2', '⠃'),
    ('3', '⠉'),
    ('4', '⠙'),
    ('5', '⠑'),
    ('6', '⠋'),
    ('7', '⠛'),
    ('8', '⠓'),
    ('9', '⠊'),
    ('0', '⠚'),
];

const NUMBER_INDICATOR: char = '⠼';

static BRAILLE_REVERSE: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| BRAILLE_LETTERS.iter().map(|&(c, b)| (b, c)).collect());
static BRAILLE_DIGIT_REVERSE: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| BRAILLE_DIGITS.iter().map(|&(c, b)| (b, c)).collect());

fn encode_braille(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars().flat_map(|c| c.to_lowercase()) {
        if let Some(&(_, cell)) = BRAILLE_LETTERS.iter().find(|&&(l, _)| l == c) {
            out.push(cell);
        } else if let Some(&(_, cell)) = BRAILLE_DIGITS.iter().find(|&&(d, _)| d == c) {
            out.push(NUMBER_INDICATOR);
            out.push(cell);
        } else {
            out.push(c);
        }
    }
    out
}

fn decode_braille(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == NUMBER_INDICATOR && i + 1 < chars.len() {
            if let Some(&digit) = BRAILLE_DIGIT_REVERSE.get(&chars[i + 1]) {
                out.push(digit);
                i += 2;
                continue;
            }
        }
        match BRAILLE_REVERSE.get(&chars[i]) {
            Some(&letter) => out.push(letter),
            None => out.push(chars[i]),
        }
        i += 1;
    }
    out
}

/// Braille does not encode everything, so the detector only asks for at
/// least two cells rather than an exclusive character set.
fn detect_braille(text: &str) -> bool {
    text.trim()
        .chars()
        .filter(|c| ('\u{2800}'..='\u{28FF}').contains(c))
        .count()
        >= 2
}

// ---------------------------------------------------------------------------
// Brainfuck
// ---------------------------------------------------------------------------

/// Each UTF-8 byte becomes `+`×b then `.`; `>[-]` moves to a fresh cell
/// between bytes so the counts stay absolute.
fn encode_brainfuck(text: &str) -> String {
    text.bytes()
        .map(|b| {
            let mut cell = "+".repeat(b as usize);
            cell.push('.');
            cell
        })
        .collect::<Vec<_>>()
        .join(">[-]")
}

const BF_CELLS: usize = 30_000;
const BF_MAX_STEPS: usize = 100_000;

/// A bounded interpreter: decoding is running the program and collecting its
/// output bytes.
fn decode_brainfuck(code: &str) -> String {
    let program: Vec<char> = code.chars().collect();
    let mut cells = vec![0u8; BF_CELLS];
    let mut pointer = 0usize;
    let mut pc = 0usize;
    let mut output: Vec<u8> = Vec::new();
    let mut steps = 0usize;

    while pc < program.len() && steps < BF_MAX_STEPS {
        steps += 1;
        match program[pc] {
            '>' => pointer = (pointer + 1) % BF_CELLS,
            '<' => pointer = (pointer + BF_CELLS - 1) % BF_CELLS,
            '+' => cells[pointer] = cells[pointer].wrapping_add(1),
            '-' => cells[pointer] = cells[pointer].wrapping_sub(1),
            '.' => output.push(cells[pointer]),
            ',' => cells[pointer] = 0, // no input stream
            '[' => {
                if cells[pointer] == 0 {
                    let mut depth = 1;
                    while depth > 0 {
                        pc += 1;
                        if pc >= program.len() {
                            return lossy_utf8(output);
                        }
                        match program[pc] {
                            '[' => depth += 1,
                            ']' => depth -= 1,
                            _ => {}
                        }
                    }
                }
            }
            ']' => {
                if cells[pointer] != 0 {
                    let mut depth = 1;
                    while depth > 0 {
                        if pc == 0 {
                            return lossy_utf8(output);
                        }
                        pc -= 1;
                        match program[pc] {
                            ']' => depth += 1,
                            '[' => depth -= 1,
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
        pc += 1;
    }
    lossy_utf8(output)
}

fn detect_brainfuck(text: &str) -> bool {
    let cleaned = text.trim();
    cleaned.chars().count() >= 10
        && cleaned
            .chars()
            .all(|c| matches!(c, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']') || c.is_whitespace())
}

// ---------------------------------------------------------------------------
// Tap code
// ---------------------------------------------------------------------------

/// The 5×5 Polybius grid; no J (it taps as I).
const TAP_GRID: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

fn tap_coords(c: char) -> Option<(usize, usize)> {
    let c = if c == 'J' { 'I' } else { c };
    TAP_GRID
        .chars()
        .position(|g| g == c)
        .map(|i| (i / 5 + 1, i % 5 + 1))
}

fn encode_tap(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_uppercase())
        .map(|c| match tap_coords(c) {
            Some((row, col)) => format!("{} {}", ".".repeat(row), ".".repeat(col)),
            None if c.is_whitespace() => "/".to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_tap(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out = String::new();
    let mut i = 0;
    let all_dots = |t: &str| !t.is_empty() && t.chars().all(|c| c == '.');
    while i < tokens.len() {
        let token = tokens[i];
        if token == "/" {
            out.push(' ');
            i += 1;
        } else if all_dots(token) && i + 1 < tokens.len() && all_dots(tokens[i + 1]) {
            let row = token.len();
            let col = tokens[i + 1].len();
            let letter = (row >= 1 && row <= 5 && col >= 1 && col <= 5)
                .then(|| TAP_GRID.chars().nth((row - 1) * 5 + (col - 1)))
                .flatten()
                .unwrap_or('?');
            out.push(letter);
            i += 2;
        } else {
            out.push_str(token);
            i += 1;
        }
    }
    out
}

fn detect_tap(text: &str) -> bool {
    let cleaned = text.trim();
    let total = cleaned.chars().count();
    if total < 3 {
        return false;
    }
    let tap_chars = cleaned
        .chars()
        .filter(|&c| c == '.' || c == '/' || c.is_whitespace())
        .count();
    tap_chars as f64 / total as f64 > 0.7
}

// ---------------------------------------------------------------------------
// NATO phonetic
// ---------------------------------------------------------------------------

const NATO_TABLE: &[(char, &str)] = &[
    ('a', "Alpha"),
    ('b', "Bravo"),
    ('c', "Charlie"),
    ('d', "Delta"),
    ('e', "Echo"),
    ('f', "Foxtrot"),
    ('g', "Golf"),
    ('h', "Hotel"),
    ('i', "India"),
    ('j', "Juliett"),
    ('k', "Kilo"),
    ('l', "Lima"),
    ('m', "Mike"),
    ('n', "November"),
    ('o', "Oscar"),
    ('p', "Papa"),
    ('q', "Quebec"),
    ('r', "Romeo"),
    ('s', "Sierra"),
    ('t', "Tango"),
    ('u', "Uniform"),
    ('v', "Victor"),
    ('w', "Whiskey"),
    ('x', "X-ray"),
    ('y', "Yankee"),
    ('z', "Zulu"),
    ('0', "Zero"),
    ('1', "One"),
    ('2', "Two"),
    ('3', "Three"),
    ('4', "Four"),
    ('5', "Five"),
    ('6', "Six"),
    ('7', "Seven"),
    ('8', "Eight"),
    ('9', "Nine"),
];

static NATO_REVERSE: LazyLock<HashMap<String, char>> = LazyLock::new(|| {
    NATO_TABLE
        .iter()
        .map(|&(c, word)| (word.to_lowercase(), c))
        .collect()
});

fn encode_nato(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| {
            if c == ' ' {
                "|".to_string()
            } else {
                NATO_TABLE
                    .iter()
                    .find(|&&(l, _)| l == c)
                    .map(|&(_, word)| word.to_string())
                    .unwrap_or_else(|| c.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_nato(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            if word == "|" {
                " ".to_string()
            } else {
                NATO_REVERSE
                    .get(&word.to_lowercase())
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| word.to_string())
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Semaphore
// ---------------------------------------------------------------------------

/// Clock positions 1-8 as arrow emoji (with emoji presentation).
const SEMAPHORE_ARROWS: [&str; 9] = [
    "",
    "⬆\u{FE0F}",
    "↗\u{FE0F}",
    "➡\u{FE0F}",
    "↘\u{FE0F}",
    "⬇\u{FE0F}",
    "↙\u{FE0F}",
    "⬅\u{FE0F}",
    "↖\u{FE0F}",
];

/// Standard two-flag positions; J is the odd one out at 2-1.
const SEMAPHORE_TABLE: &[(char, (usize, usize))] = &[
    ('A', (1, 2)),
    ('B', (1, 3)),
    ('C', (1, 4)),
    ('D', (1, 5)),
    ('E', (1, 6)),
    ('F', (1, 7)),
    ('G', (1, 8)),
    ('H', (2, 3)),
    ('I', (2, 4)),
    ('J', (2, 1)),
    ('K', (2, 5)),
    ('L', (2, 6)),
    ('M', (2, 7)),
    ('N', (2, 8)),
    ('O', (3, 4)),
    ('P', (3, 5)),
    ('Q', (3, 6)),
    ('R', (3, 7)),
    ('S', (3, 8)),
    ('T', (4, 5)),
    ('U', (4, 6)),
    ('V', (4, 7)),
    ('W', (4, 8)),
    ('X', (5, 6)),
    ('Y', (5, 7)),
    ('Z', (5, 8)),
];

static SEMAPHORE_REVERSE: LazyLock<HashMap<String, char>> = LazyLock::new(|| {
    SEMAPHORE_TABLE
        .iter()
        .map(|&(c, (a, b))| {
            (
                format!("{}{}", SEMAPHORE_ARROWS[a], SEMAPHORE_ARROWS[b]),
                c,
            )
        })
        .collect()
});

fn encode_semaphore(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_whitespace() {
                return "/".to_string();
            }
            let upper = c.to_ascii_uppercase();
            SEMAPHORE_TABLE
                .iter()
                .find(|&&(l, _)| l == upper)
                .map(|&(_, (a, b))| format!("{}{}", SEMAPHORE_ARROWS[a], SEMAPHORE_ARROWS[b]))
                .unwrap_or_else(|| c.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_semaphore(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if token == "/" {
                return " ".to_string();
            }
            if let Some(&c) = SEMAPHORE_REVERSE.get(token) {
                return c.to_string();
            }
            // Some platforms drop the variation selectors; retry without.
            let bare: String = token.chars().filter(|&c| c != '\u{FE0F}').collect();
            let matched = SEMAPHORE_REVERSE.iter().find(|(key, _)| {
                key.chars().filter(|&c| c != '\u{FE0F}').collect::<String>() == bare
            });
            match matched {
                Some((_, &c)) => c.to_string(),
                None => token.to_string(),
            }
        })
        .collect()
}

fn detect_semaphore(text: &str) -> bool {
    let cleaned = text.trim();
    cleaned.chars().count() >= 2
        && cleaned.chars().all(|c| {
            matches!(
                c,
                '⬆' | '↗' | '➡' | '↘' | '⬇' | '↙' | '⬅' | '↖' | '\u{FE0F}' | '/'
            ) || c.is_whitespace()
        })
}

// ---------------------------------------------------------------------------
// A1Z26
// ---------------------------------------------------------------------------

fn encode_a1z26(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A' + 1).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

fn decode_a1z26(text: &str) -> String {
    text.split(|c: char| {
        c == '-' || c == ',' || c == '.' || c == '|' || c == '/' || c.is_whitespace()
    })
    .filter(|t| !t.is_empty())
    .filter_map(|token| {
        token
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=26).contains(n))
            .map(|n| (b'a' + n - 1) as char)
    })
    .collect()
}

fn detect_a1z26(text: &str) -> bool {
    let cleaned = text.trim();
    if cleaned.chars().count() < 3 {
        return false;
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c.is_whitespace())
    {
        return false;
    }
    let numbers: Vec<&str> = cleaned
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if numbers.is_empty() {
        return false;
    }
    let valid = numbers
        .iter()
        .filter(|t| {
            t.parse::<u32>()
                .map(|n| (1..=26).contains(&n))
                .unwrap_or(false)
        })
        .count();
    valid * 2 >= numbers.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morse_roundtrip() {
        let enc = encode_morse("hello world");
        assert_eq!(
            enc,
            ".... . .-.. .-.. --- / .-- --- .-. .-.. -.."
        );
        assert_eq!(decode_morse(&enc), "hello world");
        assert!(detect_morse(&enc));
    }

    #[test]
    fn morse_wide_gap_word_separator() {
        assert_eq!(decode_morse(".... ..    .... .."), "hi hi");
    }

    #[test]
    fn braille_roundtrip_with_digits() {
        let enc = encode_braille("abc 123");
        assert_eq!(decode_braille(&enc), "abc 123");
        assert!(detect_braille(&enc));
        assert!(!detect_braille("plain text"));
    }

    #[test]
    fn brainfuck_roundtrip() {
        let enc = encode_brainfuck("Hi");
        assert!(enc.starts_with(&"+".repeat(72)));
        assert_eq!(decode_brainfuck(&enc), "Hi");
        assert!(detect_brainfuck(&enc));
    }

    #[test]
    fn brainfuck_emoji_roundtrip() {
        assert_eq!(decode_brainfuck(&encode_brainfuck("🌞")), "🌞");
    }

    #[test]
    fn brainfuck_unbalanced_loop_terminates() {
        assert_eq!(decode_brainfuck("+["), "");
    }

    #[test]
    fn tap_code_roundtrip() {
        let enc = encode_tap("hi there");
        assert_eq!(decode_tap(&enc), "HI THERE");
        assert!(detect_tap(&enc));
    }

    #[test]
    fn tap_code_j_taps_as_i() {
        assert_eq!(encode_tap("j"), encode_tap("i"));
    }

    #[test]
    fn nato_roundtrip() {
        let enc = encode_nato("sos 1");
        assert_eq!(enc, "Sierra Oscar Sierra | One");
        assert_eq!(decode_nato(&enc), "sos 1");
    }

    #[test]
    fn semaphore_roundtrip() {
        let enc = encode_semaphore("abz");
        assert_eq!(decode_semaphore(&enc), "ABZ");
        assert!(detect_semaphore(&enc));
    }

    #[test]
    fn semaphore_tolerates_stripped_selectors() {
        let enc = encode_semaphore("ab");
        let bare: String = enc.chars().filter(|&c| c != '\u{FE0F}').collect();
        assert_eq!(decode_semaphore(&bare), "AB");
    }

    #[test]
    fn a1z26_roundtrip() {
        assert_eq!(encode_a1z26("Hello, World!"), "8-5-12-12-15-23-15-18-12-4");
        assert_eq!(decode_a1z26("8-5-12-12-15"), "hello");
        assert!(detect_a1z26("8-5-12-12-15"));
        assert!(!detect_a1z26("99-99-99"));
    }
}
