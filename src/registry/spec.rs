// Transform contract: the spec value type, category tags, and the priority
// bands the universal decoder ranks candidates with.

/// Grouping tag for browsing and category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cipher,
    Encoding,
    Unicode,
    Case,
    Fantasy,
    Technical,
    Ancient,
    Visual,
    Special,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cipher => "cipher",
            Category::Encoding => "encoding",
            Category::Unicode => "unicode",
            Category::Case => "case",
            Category::Fantasy => "fantasy",
            Category::Technical => "technical",
            Category::Ancient => "ancient",
            Category::Visual => "visual",
            Category::Special => "special",
        }
    }
}

// ---------------------------------------------------------------------------
// Priority bands
// ---------------------------------------------------------------------------
//
// Higher = more exclusive character set, ranked first by the decoder.

/// Single-use symbol set (semaphore's eight arrow emojis).
pub const PRIORITY_UNIQUE_SYMBOLS: u16 = 310;
/// Exclusive character sets: binary, morse, braille, brainfuck, tap code.
pub const PRIORITY_EXCLUSIVE_SET: u16 = 300;
/// Hex-like alphabets.
pub const PRIORITY_HEX_LIKE: u16 = 290;
/// Pattern-based detection (pig latin, invented languages).
pub const PRIORITY_PATTERN: u16 = 285;
/// Base32 / snake_case / kebab-case alphabets.
pub const PRIORITY_BASE32_FAMILY: u16 = 280;
/// Base58 / A1Z26 / camelCase.
pub const PRIORITY_BASE58_FAMILY: u16 = 275;
/// Base64 family.
pub const PRIORITY_BASE64_FAMILY: u16 = 270;
/// Caller's currently-active transform.
pub const PRIORITY_ACTIVE_CONTEXT: u16 = 150;
/// High-confidence Unicode ranges and steganography.
pub const PRIORITY_UNICODE_RANGE: u16 = 100;
/// Generic Unicode stylization (the contract default).
pub const PRIORITY_UNICODE_STYLE: u16 = 85;
/// Common encodings (ogham, roman numerals, emoji speak).
pub const PRIORITY_COMMON: u16 = 70;
/// Classical ciphers.
pub const PRIORITY_CIPHER: u16 = 60;
/// Generic text transforms.
pub const PRIORITY_GENERIC: u16 = 40;
/// Low-confidence speculative results.
pub const PRIORITY_LOW: u16 = 20;
/// Last-resort invisible text.
pub const PRIORITY_LAST_RESORT: u16 = 1;

/// Structural predicate used to short-list a transform without decoding.
pub type Detector = fn(&str) -> bool;

/// Free-form encode/decode function.
pub type TextFn = fn(&str) -> String;

/// How the execution engine runs a transform.
///
/// Parametric ciphers carry their numeric parameters here instead of closing
/// over them; one interpreter in `engine` handles every variant.
#[derive(Debug, Clone)]
pub enum Algorithm {
    /// 1:1 scalar substitution. The reverse map is compiled at registration;
    /// decode passes unmapped characters through unchanged.
    CharMap(&'static [(char, char)]),
    /// Like `CharMap`, but the input is lowercased before mapping.
    FoldedCharMap(&'static [(char, char)]),
    /// Rotation over ASCII letter and digit ranges (Caesar family).
    /// `letters` shifts a-z/A-Z, `digits` shifts 0-9; either may be zero.
    Rotate { letters: u8, digits: u8 },
    /// Affine cipher `x -> a*x + b (mod 26)` over ASCII letters.
    Affine { a: u8, b: u8 },
    /// Vigenère with a fixed uppercase key over ASCII letters.
    Vigenere { key: &'static str },
    /// Free-form encode with an optional decode.
    Custom { encode: TextFn, decode: Option<TextFn> },
    /// Word-level mix of other registered transforms; intentionally one-way.
    RandomMix(MixOptions),
}

/// Tuning for the Random Mix composite transform.
#[derive(Debug, Clone, Copy)]
pub struct MixOptions {
    /// Minimum number of distinct transforms drawn per run.
    pub min_transforms: usize,
    /// Maximum number of distinct transforms drawn per run.
    pub max_transforms: usize,
    /// Allow the same transform to be drawn more than once.
    pub allow_repeats: bool,
}

impl Default for MixOptions {
    fn default() -> Self {
        Self {
            min_transforms: 2,
            max_transforms: 5,
            allow_repeats: false,
        }
    }
}

/// Immutable definition of a transform, interpreted by the engine.
///
/// Only `name` and `algorithm` are required in practice; `priority` defaults
/// to the generic Unicode stylization band.
#[derive(Clone)]
pub struct TransformSpec {
    pub name: &'static str,
    pub category: Category,
    pub priority: u16,
    pub algorithm: Algorithm,
    pub detect: Option<Detector>,
    /// Short display form for pickers; falls back to the full encode.
    pub preview: Option<TextFn>,
}

impl TransformSpec {
    pub fn new(name: &'static str, category: Category, algorithm: Algorithm) -> Self {
        Self {
            name,
            category,
            priority: PRIORITY_UNICODE_STYLE,
            algorithm,
            detect: None,
            preview: None,
        }
    }

    pub fn priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn detect(mut self, detector: Detector) -> Self {
        self.detect = Some(detector);
        self
    }

    pub fn preview(mut self, preview: TextFn) -> Self {
        self.preview = Some(preview);
        self
    }
}

/// Derive the stable machine key from a display name: lowercase, with each
/// run of non-alphanumeric characters collapsed to one underscore.
pub fn derive_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !key.is_empty() {
                key.push('_');
            }
            pending_sep = false;
            for lc in ch.to_lowercase() {
                key.push(lc);
            }
        } else {
            pending_sep = true;
        }
    }
    key
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_derivation() {
        assert_eq!(derive_key("Base64"), "base64");
        assert_eq!(derive_key("Caesar Cipher"), "caesar_cipher");
        assert_eq!(derive_key("Rail Fence (3 Rails)"), "rail_fence_3_rails");
        assert_eq!(derive_key("Rövarspråket"), "rövarspråket");
        assert_eq!(derive_key("snake_case"), "snake_case");
    }

    #[test]
    fn spec_defaults() {
        let spec = TransformSpec::new(
            "X",
            Category::Unicode,
            Algorithm::CharMap(&[('a', 'b')]),
        );
        assert_eq!(spec.priority, PRIORITY_UNICODE_STYLE);
        assert!(spec.detect.is_none());
    }
}
