// Unicode stylizations: enclosed and mathematical alphabets, lookalike
// scripts, kana, combining-mark effects, and a few spacing tricks.
//
// The 1:1 alphabets are plain `CharMap` specs; the registry derives their
// reverse maps. Anything token- or cluster-based is a custom pair.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{PRIORITY_COMMON, PRIORITY_UNICODE_RANGE},
};
use crate::text::graphemes;

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new("Bubble", Category::Unicode, Algorithm::CharMap(BUBBLE_MAP))
            .detect(detect_bubble),
        TransformSpec::new(
            "Small Caps",
            Category::Unicode,
            Algorithm::FoldedCharMap(SMALL_CAPS_MAP),
        )
        .detect(detect_small_caps),
        TransformSpec::new(
            "Full Width",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_fullwidth,
                decode: Some(decode_fullwidth),
            },
        ),
        TransformSpec::new("Fraktur", Category::Unicode, Algorithm::CharMap(FRAKTUR_MAP)),
        TransformSpec::new("Cursive", Category::Unicode, Algorithm::CharMap(CURSIVE_MAP))
            .detect(detect_cursive),
        TransformSpec::new(
            "Mathematical Notation",
            Category::Unicode,
            Algorithm::CharMap(MATHEMATICAL_MAP),
        )
        .detect(detect_mathematical),
        TransformSpec::new("Greek Letters", Category::Unicode, Algorithm::CharMap(GREEK_MAP))
            .priority(PRIORITY_UNICODE_RANGE)
            .detect(detect_greek),
        TransformSpec::new(
            "Subscript",
            Category::Unicode,
            Algorithm::CharMap(SUBSCRIPT_MAP),
        ),
        TransformSpec::new(
            "Cyrillic Stylized",
            Category::Unicode,
            Algorithm::CharMap(CYRILLIC_MAP),
        )
        .priority(PRIORITY_UNICODE_RANGE),
        TransformSpec::new(
            "Katakana",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_katakana,
                decode: Some(decode_katakana),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE),
        TransformSpec::new(
            "Hiragana",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_hiragana,
                decode: Some(decode_hiragana),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE),
        TransformSpec::new(
            "Wingdings",
            Category::Unicode,
            Algorithm::CharMap(WINGDINGS_MAP),
        )
        .priority(PRIORITY_UNICODE_RANGE),
        TransformSpec::new(
            "Chemical Symbols",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_chemical,
                decode: Some(decode_chemical),
            },
        )
        .priority(PRIORITY_COMMON),
        TransformSpec::new(
            "Regional Indicator Letters",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_regional,
                decode: Some(decode_regional),
            },
        )
        .priority(PRIORITY_COMMON),
        TransformSpec::new(
            "Strikethrough",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_strikethrough,
                decode: Some(decode_strikethrough),
            },
        ),
        TransformSpec::new(
            "Underline",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_underline,
                decode: Some(decode_underline),
            },
        ),
        TransformSpec::new(
            "Vaporwave",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_vaporwave,
                decode: Some(decode_vaporwave),
            },
        ),
        TransformSpec::new(
            "Zalgo",
            Category::Unicode,
            Algorithm::Custom {
                encode: encode_zalgo,
                decode: Some(decode_zalgo),
            },
        )
        .detect(detect_zalgo),
        TransformSpec::new(
            "Mirror Text",
            Category::Unicode,
            Algorithm::Custom {
                encode: mirror,
                decode: Some(mirror),
            },
        ),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

// ---------------------------------------------------------------------------
// 1:1 alphabets
// ---------------------------------------------------------------------------

const BUBBLE_MAP: &[(char, char)] = &[
    ('a', 'ⓐ'), ('b', 'ⓑ'), ('c', 'ⓒ'), ('d', 'ⓓ'), ('e', 'ⓔ'), ('f', 'ⓕ'),
    ('g', 'ⓖ'), ('h', 'ⓗ'), ('i', 'ⓘ'), ('j', 'ⓙ'), ('k', 'ⓚ'), ('l', 'ⓛ'),
    ('m', 'ⓜ'), ('n', 'ⓝ'), ('o', 'ⓞ'), ('p', 'ⓟ'), ('q', 'ⓠ'), ('r', 'ⓡ'),
    ('s', 'ⓢ'), ('t', 'ⓣ'), ('u', 'ⓤ'), ('v', 'ⓥ'), ('w', 'ⓦ'), ('x', 'ⓧ'),
    ('y', 'ⓨ'), ('z', 'ⓩ'), ('A', 'Ⓐ'), ('B', 'Ⓑ'), ('C', 'Ⓒ'), ('D', 'Ⓓ'),
    ('E', 'Ⓔ'), ('F', 'Ⓕ'), ('G', 'Ⓖ'), ('H', 'Ⓗ'), ('I', 'Ⓘ'), ('J', 'Ⓙ'),
    ('K', 'Ⓚ'), ('L', 'Ⓛ'), ('M', 'Ⓜ'), ('N', 'Ⓝ'), ('O', 'Ⓞ'), ('P', 'Ⓟ'),
    ('Q', 'Ⓠ'), ('R', 'Ⓡ'), ('S', 'Ⓢ'), ('T', 'Ⓣ'), ('U', 'Ⓤ'), ('V', 'Ⓥ'),
    ('W', 'Ⓦ'), ('X', 'Ⓧ'), ('Y', 'Ⓨ'), ('Z', 'Ⓩ'),
];

fn detect_bubble(text: &str) -> bool {
    text.chars().any(|c| ('\u{24B6}'..='\u{24EA}').contains(&c))
}

const SMALL_CAPS_MAP: &[(char, char)] = &[
    ('a', 'ᴀ'), ('b', 'ʙ'), ('c', 'ᴄ'), ('d', 'ᴅ'), ('e', 'ᴇ'), ('f', 'ꜰ'),
    ('g', 'ɢ'), ('h', 'ʜ'), ('i', 'ɪ'), ('j', 'ᴊ'), ('k', 'ᴋ'), ('l', 'ʟ'),
    ('m', 'ᴍ'), ('n', 'ɴ'), ('o', 'ᴏ'), ('p', 'ᴘ'), ('q', 'ǫ'), ('r', 'ʀ'),
    ('s', 's'), ('t', 'ᴛ'), ('u', 'ᴜ'), ('v', 'ᴠ'), ('w', 'ᴡ'), ('x', 'x'),
    ('y', 'ʏ'), ('z', 'ᴢ'),
];

fn detect_small_caps(text: &str) -> bool {
    text.chars().any(|c| {
        SMALL_CAPS_MAP
            .iter()
            .any(|&(from, to)| to == c && from != to)
    })
}

const FRAKTUR_MAP: &[(char, char)] = &[
    ('A', '𝔄'), ('B', '𝔅'), ('C', 'ℭ'), ('D', '𝔇'), ('E', '𝔈'), ('F', '𝔉'),
    ('G', '𝔊'), ('H', 'ℌ'), ('I', 'ℑ'), ('J', '𝔍'), ('K', '𝔎'), ('L', '𝔏'),
    ('M', '𝔐'), ('N', '𝔑'), ('O', '𝔒'), ('P', '𝔓'), ('Q', '𝔔'), ('R', 'ℜ'),
    ('S', '𝔖'), ('T', '𝔗'), ('U', '𝔘'), ('V', '𝔙'), ('W', '𝔚'), ('X', '𝔛'),
    ('Y', '𝔜'), ('Z', 'ℨ'), ('a', '𝔞'), ('b', '𝔟'), ('c', '𝔠'), ('d', '𝔡'),
    ('e', '𝔢'), ('f', '𝔣'), ('g', '𝔤'), ('h', '𝔥'), ('i', '𝔦'), ('j', '𝔧'),
    ('k', '𝔨'), ('l', '𝔩'), ('m', '𝔪'), ('n', '𝔫'), ('o', '𝔬'), ('p', '𝔭'),
    ('q', '𝔮'), ('r', '𝔯'), ('s', '𝔰'), ('t', '𝔱'), ('u', '𝔲'), ('v', '𝔳'),
    ('w', '𝔴'), ('x', '𝔵'), ('y', '𝔶'), ('z', '𝔷'),
];

const CURSIVE_MAP: &[(char, char)] = &[
    ('A', '𝓐'), ('B', '𝓑'), ('C', '𝓒'), ('D', '𝓓'), ('E', '𝓔'), ('F', '𝓕'),
    ('G', '𝓖'), ('H', '𝓗'), ('I', '𝓘'), ('J', '𝓙'), ('K', '𝓚'), ('L', '𝓛'),
    ('M', '𝓜'), ('N', '𝓝'), ('O', '𝓞'), ('P', '𝓟'), ('Q', '𝓠'), ('R', '𝓡'),
    ('S', '𝓢'), ('T', '𝓣'), ('U', '𝓤'), ('V', '𝓥'), ('W', '𝓦'), ('X', '𝓧'),
    ('Y', '𝓨'), ('Z', '𝓩'), ('a', '𝓪'), ('b', '𝓫'), ('c', '𝓬'), ('d', '𝓭'),
    ('e', '𝓮'), ('f', '𝓯'), ('g', '𝓰'), ('h', '𝓱'), ('i', '𝓲'), ('j', '𝓳'),
    ('k', '𝓴'), ('l', '𝓵'), ('m', '𝓶'), ('n', '𝓷'), ('o', '𝓸'), ('p', '𝓹'),
    ('q', '𝓺'), ('r', '𝓻'), ('s', '𝓼'), ('t', '𝓽'), ('u', '𝓾'), ('v', '𝓿'),
    ('w', '𝔀'), ('x', '𝔁'), ('y', '𝔂'), ('z', '𝔃'),
];

fn detect_cursive(text: &str) -> bool {
    text.chars().any(|c| ('\u{1D4D0}'..='\u{1D503}').contains(&c))
}

const MATHEMATICAL_MAP: &[(char, char)] = &[
    ('a', '𝒶'), ('b', '𝒷'), ('c', '𝒸'), ('d', '𝒹'), ('e', 'ℯ'), ('f', '𝒻'),
    ('g', 'ℊ'), ('h', '𝒽'), ('i', '𝒾'), ('j', '𝒿'), ('k', '𝓀'), ('l', '𝓁'),
    ('m', '𝓂'), ('n', '𝓃'), ('o', 'ℴ'), ('p', '𝓅'), ('q', '𝓆'), ('r', '𝓇'),
    ('s', '𝓈'), ('t', '𝓉'), ('u', '𝓊'), ('v', '𝓋'), ('w', '𝓌'), ('x', '𝓍'),
    ('y', '𝓎'), ('z', '𝓏'), ('A', '𝒜'), ('B', 'ℬ'), ('C', '𝒞'), ('D', '𝒟'),
    ('E', 'ℰ'), ('F', 'ℱ'), ('G', '𝒢'), ('H', 'ℋ'), ('I', 'ℐ'), ('J', '𝒥'),
    ('K', '𝒦'), ('L', 'ℒ'), ('M', 'ℳ'), ('N', '𝒩'), ('O', '𝒪'), ('P', '𝒫'),
    ('Q', '𝒬'), ('R', 'ℛ'), ('S', '𝒮'), ('T', '𝒯'), ('U', '𝒰'), ('V', '𝒱'),
    ('W', '𝒲'), ('X', '𝒳'), ('Y', '𝒴'), ('Z', '𝒵'),
];

fn detect_mathematical(text: &str) -> bool {
    text.chars()
        .any(|c| MATHEMATICAL_MAP.iter().any(|&(_, to)| to == c))
}

const GREEK_MAP: &[(char, char)] = &[
    ('a', 'α'), ('b', 'β'), ('c', 'ξ'), ('d', 'δ'), ('e', 'ε'), ('f', 'φ'),
    ('g', 'γ'), ('h', 'η'), ('i', 'ι'), ('j', 'ϑ'), ('k', 'κ'), ('l', 'λ'),
    ('m', 'μ'), ('n', 'ν'), ('o', 'ο'), ('p', 'π'), ('q', 'θ'), ('r', 'ρ'),
    ('s', 'σ'), ('t', 'τ'), ('u', 'υ'), ('v', 'ϐ'), ('w', 'ω'), ('x', 'χ'),
    ('y', 'ψ'), ('z', 'ζ'), ('A', 'Α'), ('B', 'Β'), ('C', 'Ξ'), ('D', 'Δ'),
    ('E', 'Ε'), ('F', 'Φ'), ('G', 'Γ'), ('H', 'Η'), ('I', 'Ι'), ('J', 'Θ'),
    ('K', 'Κ'), ('L', 'Λ'), ('M', 'Μ'), ('N', 'Ν'), ('O', 'Ο'), ('P', 'Π'),
    ('Q', 'Θ'), ('R', 'Ρ'), ('S', 'Σ'), ('T', 'Τ'), ('U', 'Υ'), ('V', 'ς'),
    ('W', 'Ω'), ('X', 'Χ'), ('Y', 'Ψ'), ('Z', 'Ζ'),
];

fn detect_greek(text: &str) -> bool {
    text.chars().any(|c| {
        ('α'..='ω').contains(&c)
            || ('Α'..='Ω').contains(&c)
            || matches!(c, 'ϐ' | 'ϑ' | 'ξ')
    })
}

const SUBSCRIPT_MAP: &[(char, char)] = &[
    ('0', '₀'), ('1', '₁'), ('2', '₂'), ('3', '₃'), ('4', '₄'), ('5', '₅'),
    ('6', '₆'), ('7', '₇'), ('8', '₈'), ('9', '₉'), ('a', 'ₐ'), ('e', 'ₑ'),
    ('h', 'ₕ'), ('i', 'ᵢ'), ('j', 'ⱼ'), ('k', 'ₖ'), ('l', 'ₗ'), ('m', 'ₘ'),
    ('n', 'ₙ'), ('o', 'ₒ'), ('p', 'ₚ'), ('r', 'ᵣ'), ('s', 'ₛ'), ('t', 'ₜ'),
    ('u', 'ᵤ'), ('v', 'ᵥ'), ('x', 'ₓ'),
];

const CYRILLIC_MAP: &[(char, char)] = &[
    ('A', 'А'), ('B', 'В'), ('C', 'С'), ('E', 'Е'), ('H', 'Н'), ('K', 'К'),
    ('M', 'М'), ('O', 'О'), ('P', 'Р'), ('T', 'Т'), ('X', 'Х'), ('Y', 'У'),
    ('a', 'а'), ('e', 'е'), ('o', 'о'), ('p', 'р'), ('c', 'с'), ('y', 'у'),
    ('x', 'х'), ('k', 'к'), ('h', 'һ'), ('m', 'м'), ('t', 'т'), ('b', 'б'),
];

const WINGDINGS_MAP: &[(char, char)] = &[
    ('a', '♋'), ('b', '♌'), ('c', '♍'), ('d', '♎'), ('e', '♏'), ('f', '♐'), ('g', '♑'), ('h', '♒'),
    ('i', '♓'), ('j', '⛎'), ('k', '☀'), ('l', '☁'), ('m', '☂'), ('n', '☃'), ('o', '☄'), ('p', '★'),
    ('q', '☆'), ('r', '☇'), ('s', '☈'), ('t', '☉'), ('u', '☊'), ('v', '☋'), ('w', '☌'), ('x', '☍'),
    ('y', '☎'), ('z', '☏'), ('A', '♠'), ('B', '♡'), ('C', '♢'), ('D', '♣'), ('E', '♤'), ('F', '♥'),
    ('G', '♦'), ('H', '♧'), ('I', '♨'), ('J', '♩'), ('K', '♪'), ('L', '♫'), ('M', '♬'), ('N', '♭'),
    ('O', '♮'), ('P', '♯'), ('Q', '✁'), ('R', '✂'), ('S', '✃'), ('T', '✄'), ('U', '✆'), ('V', '✇'),
    ('W', '✈'), ('X', '✉'), ('Y', '✌'), ('Z', '✍'), ('0', '✓'), ('1', '✔'), ('2', '✕'), ('3', '✖'),
    ('4', '✗'), ('5', '✘'), ('6', '✙'), ('7', '✚'), ('8', '✛'), ('9', '✜'), ('.', '✠'), (',', '✡'),
    ('?', '✢'), ('!', '✣'), ('@', '✤'), ('#', '✥'), ('$', '✦'), ('%', '✧'), ('^', '✩'), ('&', '✪'),
    ('*', '✫'), ('(', '✬'), (')', '✭'), ('-', '✮'), ('_', '✯'), ('=', '✰'), ('+', '✱'), ('[', '✲'),
    (']', '✳'), ('{', '✴'), ('}', '✵'), ('|', '✶'), (';', '✸'), (':', '✹'), ('<', '✼'), ('>', '✽'),
    ('/', '✾'), ('~', '✿'), ('`', '❀'), ('\\', '✷'), ('"', '✺'), ('\'', '✻'),
];

// ---------------------------------------------------------------------------
// Full width
// ---------------------------------------------------------------------------

const FULLWIDTH_OFFSET: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

fn encode_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c),
            ' ' => IDEOGRAPHIC_SPACE,
            _ => c,
        })
        .collect()
}

fn decode_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
            }
            IDEOGRAPHIC_SPACE => ' ',
            _ => c,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Kana (romaji transliteration, longest match first)
// ---------------------------------------------------------------------------

const KATAKANA_TABLE: &[(&str, &str)] = &[
    ("kyo", "キョ"), ("kyu", "キュ"), ("kya", "キャ"), ("sho", "ショ"), ("shu", "シュ"), ("sha", "シャ"),
    ("shi", "シ"), ("cho", "チョ"), ("chu", "チュ"), ("cha", "チャ"), ("chi", "チ"), ("tsu", "ツ"),
    ("fu", "フ"), ("ryo", "リョ"), ("ryu", "リュ"), ("rya", "リャ"), ("nyo", "ニョ"), ("nyu", "ニュ"),
    ("nya", "ニャ"), ("gya", "ギャ"), ("gyu", "ギュ"), ("gyo", "ギョ"), ("hya", "ヒャ"), ("hyu", "ヒュ"),
    ("hyo", "ヒョ"), ("mya", "ミャ"), ("myu", "ミュ"), ("myo", "ミョ"), ("pya", "ピャ"), ("pyu", "ピュ"),
    ("pyo", "ピョ"), ("bya", "ビャ"), ("byu", "ビュ"), ("byo", "ビョ"), ("ja", "ジャ"), ("ju", "ジュ"),
    ("jo", "ジョ"), ("ka", "カ"), ("ki", "キ"), ("ku", "ク"), ("ke", "ケ"), ("ko", "コ"),
    ("ga", "ガ"), ("gi", "ギ"), ("gu", "グ"), ("ge", "ゲ"), ("go", "ゴ"), ("sa", "サ"),
    ("su", "ス"), ("se", "セ"), ("so", "ソ"), ("za", "ザ"), ("zu", "ズ"), ("ze", "ゼ"),
    ("zo", "ゾ"), ("ta", "タ"), ("te", "テ"), ("to", "ト"), ("da", "ダ"), ("de", "デ"),
    ("do", "ド"), ("na", "ナ"), ("ni", "ニ"), ("nu", "ヌ"), ("ne", "ネ"), ("no", "ノ"),
    ("ha", "ハ"), ("hi", "ヒ"), ("he", "ヘ"), ("ho", "ホ"), ("ba", "バ"), ("bi", "ビ"),
    ("bu", "ブ"), ("be", "ベ"), ("bo", "ボ"), ("pa", "パ"), ("pi", "ピ"), ("pu", "プ"),
    ("pe", "ペ"), ("po", "ポ"), ("ma", "マ"), ("mi", "ミ"), ("mu", "ム"), ("me", "メ"),
    ("mo", "モ"), ("ra", "ラ"), ("ri", "リ"), ("ru", "ル"), ("re", "レ"), ("ro", "ロ"),
    ("wa", "ワ"), ("wo", "ヲ"), ("n", "ン"), ("a", "ア"), ("i", "イ"), ("u", "ウ"),
    ("e", "エ"), ("o", "オ"),
];

const HIRAGANA_TABLE: &[(&str, &str)] = &[
    ("kyo", "きょ"), ("kyu", "きゅ"), ("kya", "きゃ"), ("sho", "しょ"), ("shu", "しゅ"), ("sha", "しゃ"),
    ("shi", "し"), ("cho", "ちょ"), ("chu", "ちゅ"), ("cha", "ちゃ"), ("chi", "ち"), ("tsu", "つ"),
    ("fu", "ふ"), ("ryo", "りょ"), ("ryu", "りゅ"), ("rya", "りゃ"), ("nyo", "にょ"), ("nyu", "にゅ"),
    ("nya", "にゃ"), ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"), ("hya", "ひゃ"), ("hyu", "ひゅ"),
    ("hyo", "ひょ"), ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"), ("pya", "ぴゃ"), ("pyu", "ぴゅ"),
    ("pyo", "ぴょ"), ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"), ("ja", "じゃ"), ("ju", "じゅ"),
    ("jo", "じょ"), ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"), ("sa", "さ"),
    ("su", "す"), ("se", "せ"), ("so", "そ"), ("za", "ざ"), ("zu", "ず"), ("ze", "ぜ"),
    ("zo", "ぞ"), ("ta", "た"), ("te", "て"), ("to", "と"), ("da", "だ"), ("de", "で"),
    ("do", "ど"), ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("he", "へ"), ("ho", "ほ"), ("ba", "ば"), ("bi", "び"),
    ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"), ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"),
    ("pe", "ぺ"), ("po", "ぽ"), ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"),
    ("mo", "も"), ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"), ("n", "ん"), ("a", "あ"), ("i", "い"), ("u", "う"),
    ("e", "え"), ("o", "お"),
];

type KanaTable = &'static [(&'static str, &'static str)];

/// Romaji entries ordered longest first so digraphs win.
fn by_romaji_len(table: KanaTable) -> Vec<(&'static str, &'static str)> {
    let mut sorted: Vec<_> = table.to_vec();
    sorted.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    sorted
}

/// Kana entries ordered longest first so two-kana digraphs win on decode.
fn by_kana_len(table: KanaTable) -> Vec<(&'static str, &'static str)> {
    let mut sorted: Vec<_> = table.to_vec();
    sorted.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    sorted
}

static KATAKANA_BY_ROMAJI: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| by_romaji_len(KATAKANA_TABLE));
static KATAKANA_BY_KANA: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| by_kana_len(KATAKANA_TABLE));
static HIRAGANA_BY_ROMAJI: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| by_romaji_len(HIRAGANA_TABLE));
static HIRAGANA_BY_KANA: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| by_kana_len(HIRAGANA_TABLE));

fn kana_encode(text: &str, table: &[(&str, &str)]) -> String {
    let lower = text.to_lowercase();
    let mut out = String::new();
    let mut rest = lower.as_str();
    while !rest.is_empty() {
        match table.iter().find(|(rom, _)| rest.starts_with(rom)) {
            Some((rom, kana)) => {
                out.push_str(kana);
                rest = &rest[rom.len()..];
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

/// Lossy one way: romaji digraphs (shi, tsu, ...) come back as written in
/// the table, not as the input spelling variants.
fn kana_decode(text: &str, table: &[(&str, &str)]) -> String {
    let mut out = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        match table.iter().find(|(_, kana)| rest.starts_with(kana)) {
            Some((rom, kana)) => {
                out.push_str(rom);
                rest = &rest[kana.len()..];
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

fn encode_katakana(text: &str) -> String {
    kana_encode(text, &KATAKANA_BY_ROMAJI)
}

fn decode_katakana(text: &str) -> String {
    kana_decode(text, &KATAKANA_BY_KANA)
}

fn encode_hiragana(text: &str) -> String {
    kana_encode(text, &HIRAGANA_BY_ROMAJI)
}

fn decode_hiragana(text: &str) -> String {
    kana_decode(text, &HIRAGANA_BY_KANA)
}

// ---------------------------------------------------------------------------
// Chemical symbols
// ---------------------------------------------------------------------------

const CHEMICAL_TABLE: &[(char, &str)] = &[
    ('a', "Ac"), ('b', "B"), ('c', "C"), ('d', "D"), ('e', "Es"), ('f', "F"),
    ('g', "Ge"), ('h', "H"), ('i', "I"), ('j', "J"), ('k', "K"), ('l', "L"),
    ('m', "Mn"), ('n', "N"), ('o', "O"), ('p', "P"), ('q', "Q"), ('r', "R"),
    ('s', "S"), ('t', "Ti"), ('u', "U"), ('v', "V"), ('w', "W"), ('x', "Xe"),
    ('y', "Y"), ('z', "Zn"),
];

static CHEMICAL_REVERSE: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| CHEMICAL_TABLE.iter().map(|&(c, sym)| (sym, c)).collect());

fn encode_chemical(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| {
            CHEMICAL_TABLE
                .iter()
                .find(|&&(l, _)| l == c)
                .map(|&(_, sym)| sym.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

fn decode_chemical(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let two: String = chars[i..chars.len().min(i + 2)].iter().collect();
        if two.chars().count() == 2 {
            if let Some(&c) = CHEMICAL_REVERSE.get(two.as_str()) {
                out.push(c);
                i += 2;
                continue;
            }
        }
        let one: String = chars[i].to_string();
        match CHEMICAL_REVERSE.get(one.as_str()) {
            Some(&c) => out.push(c),
            None => out.push(chars[i]),
        }
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Regional indicators
// ---------------------------------------------------------------------------

const REGIONAL_BASE: u32 = 0x1F1E6;

fn encode_regional(text: &str) -> String {
    text.chars()
        .map(|c| {
            let up = c.to_ascii_uppercase();
            if up.is_ascii_uppercase() {
                char::from_u32(REGIONAL_BASE + (up as u32 - 'A' as u32)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

fn decode_regional(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if (REGIONAL_BASE..REGIONAL_BASE + 26).contains(&cp) {
                char::from_u32('A' as u32 + (cp - REGIONAL_BASE)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Combining-mark effects
// ---------------------------------------------------------------------------

const STRIKETHROUGH_MARK: char = '\u{0336}';
const UNDERLINE_MARK: char = '\u{0332}';

fn combine_each(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for cluster in graphemes(text) {
        out.push_str(cluster);
        out.push(mark);
    }
    out
}

fn encode_strikethrough(text: &str) -> String {
    combine_each(text, STRIKETHROUGH_MARK)
}

fn decode_strikethrough(text: &str) -> String {
    text.chars().filter(|&c| c != STRIKETHROUGH_MARK).collect()
}

fn encode_underline(text: &str) -> String {
    combine_each(text, UNDERLINE_MARK)
}

fn decode_underline(text: &str) -> String {
    text.chars().filter(|&c| c != UNDERLINE_MARK).collect()
}

// ---------------------------------------------------------------------------
// Vaporwave
// ---------------------------------------------------------------------------

fn encode_vaporwave(text: &str) -> String {
    graphemes(text).join(" ")
}

/// Single spaces were inserted between characters; runs of two or more mark
/// an original space.
fn decode_vaporwave(text: &str) -> String {
    let mut out = String::new();
    let mut spaces = 0usize;
    for c in text.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= 2 {
            out.push(' ');
        }
        spaces = 0;
        out.push(c);
    }
    if spaces >= 2 {
        out.push(' ');
    }
    out
}

// ---------------------------------------------------------------------------
// Zalgo
// ---------------------------------------------------------------------------

const ZALGO_MARKS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}',
    '\u{0307}', '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}',
    '\u{030E}', '\u{030F}', '\u{0310}', '\u{0311}', '\u{0312}', '\u{0313}', '\u{0314}',
    '\u{0315}', '\u{031A}', '\u{031B}', '\u{033D}', '\u{033E}', '\u{033F}',
];

/// Seeded from the input so repeated encodes of the same text agree.
fn encode_zalgo(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        for _ in 0..rng.random_range(1..=3) {
            out.push(ZALGO_MARKS[rng.random_range(0..ZALGO_MARKS.len())]);
        }
    }
    out
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}')
}

fn decode_zalgo(text: &str) -> String {
    text.chars().filter(|&c| !is_combining_mark(c)).collect()
}

/// Normal accented text carries the odd combining mark; zalgo drowns in them.
fn detect_zalgo(text: &str) -> bool {
    text.chars().filter(|&c| is_combining_mark(c)).count() > 3
}

// ---------------------------------------------------------------------------
// Mirror
// ---------------------------------------------------------------------------

fn mirror(text: &str) -> String {
    text.chars().rev().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullwidth_roundtrip() {
        let enc = encode_fullwidth("Hi 5!");
        assert_eq!(enc, "Ｈｉ　５！");
        assert_eq!(decode_fullwidth(&enc), "Hi 5!");
    }

    #[test]
    fn kana_digraphs_win() {
        assert_eq!(encode_katakana("shika"), "シカ");
        assert_eq!(decode_katakana("シカ"), "shika");
        assert_eq!(encode_hiragana("kyoto"), "きょと");
        assert_eq!(decode_hiragana("きょと"), "kyoto");
    }

    #[test]
    fn chemical_roundtrip() {
        assert_eq!(encode_chemical("cat"), "CAcTi");
        assert_eq!(decode_chemical("CAcTi"), "cat");
    }

    #[test]
    fn regional_indicator_roundtrip() {
        let enc = encode_regional("ok");
        assert_eq!(enc, "🇴🇰");
        assert_eq!(decode_regional(&enc), "OK");
    }

    #[test]
    fn strikethrough_keeps_emoji_whole() {
        let enc = encode_strikethrough("a👍🏽");
        assert_eq!(decode_strikethrough(&enc), "a👍🏽");
        // One mark per cluster, not per scalar.
        assert_eq!(
            enc.chars().filter(|&c| c == STRIKETHROUGH_MARK).count(),
            2
        );
    }

    #[test]
    fn vaporwave_roundtrip_preserves_word_gaps() {
        let enc = encode_vaporwave("ab cd");
        assert_eq!(enc, "a b   c d");
        assert_eq!(decode_vaporwave(&enc), "ab cd");
    }

    #[test]
    fn zalgo_deterministic_and_strippable() {
        let a = encode_zalgo("doom");
        assert_eq!(a, encode_zalgo("doom"));
        assert!(detect_zalgo(&a));
        assert_eq!(decode_zalgo(&a), "doom");
        assert!(!detect_zalgo("café résumé"));
    }

    #[test]
    fn mirror_is_self_inverse() {
        assert_eq!(mirror("abc"), "cba");
        assert_eq!(mirror(&mirror("Hello 🌞")), "Hello 🌞");
    }

    #[test]
    fn detectors_spot_own_alphabets() {
        assert!(detect_bubble("ⓗⓘ"));
        assert!(detect_small_caps("ʜᴇʟʟᴏ"));
        assert!(detect_cursive("𝓱𝓲"));
        assert!(detect_mathematical("𝒽𝒾"));
        assert!(detect_greek("αβγ"));
        assert!(!detect_bubble("hi"));
    }
}
