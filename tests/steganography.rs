// The steganography format matrix: every combination of bit order,
// presentation marker, swapped selectors, and inter-bit separators must
// round-trip a mixed corpus.

use glyphveil::stego::{
    BitOrder, EmojiIndex, Presentation, StegContext, StegFormat, StegPatch, decode_hidden,
    encode_hidden,
};

const CORPUS: &[&str] = &[
    "hello",
    "hello world",
    "Hello World!",
    "Test with emoji 🐍",
    "Special chars: !@#$%^&*()",
    "Unicode: 你好 🌞",
    "Longer text: The quick brown fox jumps over the lazy dog.",
];

const CARRIERS: &[&str] = &["🐍", "🐉", "🦎", "🐊"];

fn all_formats() -> Vec<StegFormat> {
    let mut formats = Vec::new();
    let selector_pairs = [
        ('\u{FE0E}', '\u{FE0F}'), // default
        ('\u{FE0F}', '\u{FE0E}'), // swapped
    ];
    let separators: [(Option<char>, usize); 4] = [
        (None, 1),
        (Some('\u{200C}'), 1),
        (Some('\u{200D}'), 2),
        (Some('\u{200C}'), 4),
    ];
    for bit_order in [BitOrder::Msb, BitOrder::Lsb] {
        for presentation in [Presentation::None, Presentation::Emoji, Presentation::Text] {
            for (bit_zero, bit_one) in selector_pairs {
                for (inter_bit, every) in separators {
                    formats.push(StegFormat {
                        bit_zero,
                        bit_one,
                        presentation,
                        trailing: Some('\u{200B}'),
                        inter_bit,
                        inter_bit_every: every,
                        bit_order,
                    });
                }
            }
        }
    }
    formats
}

#[test]
fn full_format_matrix_roundtrips() {
    let catalog = EmojiIndex::builtin();
    for format in all_formats() {
        format.validate().expect("valid format");
        for carrier in CARRIERS {
            for payload in CORPUS {
                let encoded = encode_hidden(carrier, payload, &format);
                let decoded = decode_hidden(&encoded, &format, catalog);
                assert_eq!(
                    &decoded, payload,
                    "roundtrip failed for carrier {carrier} with {format:?}"
                );
            }
        }
    }
}

#[test]
fn encoded_output_is_one_visible_grapheme() {
    // Everything after the carrier must be invisible tail characters.
    let format = StegFormat::default();
    let encoded = encode_hidden("🐍", "hidden", &format);
    let mut chars = encoded.chars();
    assert_eq!(chars.next(), Some('🐍'));
    assert!(chars.all(|c| matches!(
        c,
        '\u{FE0E}' | '\u{FE0F}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'
    )));
}

#[test]
fn scalar_count_scenario() {
    // "hi" = 2 bytes: carrier + presentation marker + 16 bits + trailing.
    let encoded = encode_hidden("🐍", "hi", &StegFormat::default());
    assert_eq!(encoded.chars().count(), 19);
}

#[test]
fn no_presentation_marker_shortens_by_one() {
    let format = StegFormat {
        presentation: Presentation::None,
        ..StegFormat::default()
    };
    let encoded = encode_hidden("🐍", "hi", &format);
    assert_eq!(encoded.chars().count(), 18);
}

#[test]
fn decode_without_trailing_marker_still_works() {
    let format = StegFormat {
        trailing: None,
        ..StegFormat::default()
    };
    let encoded = encode_hidden("🐊", "croc", &format);
    assert_eq!(
        decode_hidden(&encoded, &format, EmojiIndex::builtin()),
        "croc"
    );
}

#[test]
fn decode_picks_first_carrier_in_mixed_text() {
    let format = StegFormat::default();
    let loaded = encode_hidden("🦎", "payload", &format);
    let text = format!("before 🐍 plain, then {loaded} after");
    // The bare snake has no tail, so the lizard's payload is found... only
    // if the first-carrier rule skips carriers with no data. It does not:
    // the first carrier wins and its empty tail yields the empty string.
    assert_eq!(decode_hidden(&text, &format, EmojiIndex::builtin()), "");
    // With the loaded carrier first, the payload comes back.
    let text = format!("{loaded} and a plain 🐍 after");
    assert_eq!(
        decode_hidden(&text, &format, EmojiIndex::builtin()),
        "payload"
    );
}

#[test]
fn context_format_changes_are_isolated() {
    let mut a = StegContext::new();
    let b = StegContext::new();
    a.set_format(&StegPatch {
        bit_order: Some(BitOrder::Lsb),
        ..Default::default()
    })
    .unwrap();
    // b still decodes default-format output; a no longer does.
    let encoded = encode_hidden("🐍", "abc", &StegFormat::default());
    assert_eq!(b.decode(&encoded), "abc");
    assert_ne!(a.decode(&encoded), "abc");
}

#[test]
fn wrong_format_yields_garbage_not_panic() {
    let msb = StegFormat::default();
    let lsb = StegFormat {
        bit_order: BitOrder::Lsb,
        ..StegFormat::default()
    };
    let encoded = encode_hidden("🐍", "hi", &msb);
    let decoded = decode_hidden(&encoded, &lsb, EmojiIndex::builtin());
    assert_ne!(decoded, "hi");
}
