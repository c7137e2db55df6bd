// Round-trip coverage for every transform with a faithful decoder.
//
// Lossy-by-design transforms (case styles, folding transliterations,
// keyword substitutions) are exercised separately with the guarantees they
// actually make.

use glyphveil::transforms::builtin;

/// ASCII plus multi-byte UTF-8 (accents, CJK, emoji).
const CORPUS: &[&str] = &[
    "hello world",
    "Hello World. <3 🌞",
    "The Quick Brown Fox jumps 42 times!",
];

/// Transforms whose decode restores the input exactly, for the whole corpus.
const FAITHFUL: &[&str] = &[
    "binary",
    "hexadecimal",
    "base32",
    "base45",
    "base58",
    "base62",
    "base64",
    "base64_url",
    "ascii85",
    "url_encode",
    "html_entities",
    "invisible_text",
    "full_width",
    "caesar_cipher",
    "rot13",
    "rot5",
    "rot18",
    "rot47",
    "atbash_cipher",
    "affine_cipher_a_5_b_8",
    "vigenère_cipher",
    "rail_fence_3_rails",
    "reverse_text",
    "mirror_text",
    "reverse_words",
    "bubble",
    "greek_letters",
    "fraktur",
    "cursive",
    "mathematical_notation",
    "wingdings",
    "subscript",
    "cyrillic_stylized",
    "strikethrough",
    "underline",
    "vaporwave",
    "zalgo",
    "qwerty_right_shift",
    "ubbi_dubbi",
    "rövarspråket",
];

#[test]
fn faithful_transforms_roundtrip_exactly() {
    let reg = builtin();
    for key in FAITHFUL {
        let t = reg.get(key).unwrap_or_else(|| panic!("missing transform {key}"));
        assert!(t.can_decode(), "{key} should decode");
        for input in CORPUS {
            let encoded = reg.encode(key, input).expect("known key");
            let decoded = reg.decode(key, &encoded).expect("decodable");
            assert_eq!(&decoded, input, "{key} failed on {input:?}");
        }
    }
}

#[test]
fn faithful_encodes_actually_change_the_text() {
    let reg = builtin();
    // Sanity against no-op encoders slipping into the faithful list.
    let input = "The Quick Brown Fox & 42 friends!";
    for key in FAITHFUL {
        let encoded = reg.encode(key, input).expect("known key");
        assert_ne!(encoded, input, "{key} left the input unchanged");
    }
}

#[test]
fn folding_transliterations_roundtrip_lowercase() {
    let reg = builtin();
    let input = "hello";
    for key in ["braille", "morse_code", "elder_futhark", "hieroglyphics", "aurebesh_star_wars"] {
        let encoded = reg.encode(key, input).expect("known key");
        let decoded = reg.decode(key, &encoded).expect("decodable");
        assert_eq!(
            decoded.to_lowercase(),
            input,
            "{key} failed lowercase roundtrip"
        );
    }
}

#[test]
fn case_styles_are_documented_lossy() {
    let reg = builtin();
    let input = "Hello, Brave World!";
    assert_eq!(reg.encode("snake_case", input).unwrap(), "hello_brave_world");
    assert_eq!(
        reg.decode("snake_case", "hello_brave_world").unwrap(),
        "hello brave world"
    );
    assert_eq!(reg.encode("kebab_case", input).unwrap(), "hello-brave-world");
    assert_eq!(reg.encode("camelcase", input).unwrap(), "helloBraveWorld");
}

#[test]
fn encode_only_transforms_have_no_decoder() {
    let reg = builtin();
    for key in ["disemvowel", "random_case", "random_mix", "emoji_speak", "camelcase", "title_case", "sentence_case"] {
        let t = reg.get(key).unwrap_or_else(|| panic!("missing transform {key}"));
        assert!(!t.can_decode(), "{key} should be encode-only");
        assert!(reg.decode(key, "x").is_none());
    }
}

#[test]
fn a1z26_strips_to_letters() {
    let reg = builtin();
    let encoded = reg.encode("a1z26", "Go 4 it!").unwrap();
    assert_eq!(encoded, "7-15-9-20");
    assert_eq!(reg.decode("a1z26", &encoded).unwrap(), "goit");
}

#[test]
fn base58_leading_zero_bytes_survive() {
    let reg = builtin();
    let input = "\0\0\0zero";
    let encoded = reg.encode("base58", input).unwrap();
    assert_eq!(encoded.chars().take_while(|&c| c == '1').count(), 3);
    assert_eq!(reg.decode("base58", &encoded).unwrap(), input);
}

#[test]
fn pig_latin_simple_phrases_roundtrip() {
    let reg = builtin();
    for phrase in ["hello world", "string theory", "crash chat"] {
        let encoded = reg.encode("pig_latin", phrase).unwrap();
        assert_eq!(reg.decode("pig_latin", &encoded).unwrap(), phrase);
    }
}

#[test]
fn unknown_key_is_absent_not_an_error() {
    let reg = builtin();
    assert!(reg.get("no_such_transform").is_none());
    assert!(reg.encode("no_such_transform", "x").is_none());
    assert!(reg.decode("no_such_transform", "x").is_none());
}
