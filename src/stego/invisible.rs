// Private-Use-Area invisible text: one codepoint per payload byte, no
// carrier needed. Byte b maps to U+E0000 + b, so the whole payload lands in
// an invisible plane-14 range.

use crate::text::lossy_utf8;

const PUA_BASE: u32 = 0xE0000;

/// Map each UTF-8 byte of `text` to an invisible PUA codepoint.
pub fn encode(text: &str) -> String {
    text.bytes()
        .filter_map(|b| char::from_u32(PUA_BASE + b as u32))
        .collect()
}

/// Collect PUA-range codepoints back into bytes and decode as UTF-8.
/// Characters outside the range are ignored, so the payload can be embedded
/// in visible text.
pub fn decode(text: &str) -> String {
    let bytes: Vec<u8> = text
        .chars()
        .filter_map(|c| {
            let cp = c as u32;
            (PUA_BASE..=PUA_BASE + 0xFF).contains(&cp).then(|| (cp - PUA_BASE) as u8)
        })
        .collect();
    if bytes.is_empty() {
        return String::new();
    }
    lossy_utf8(bytes)
}

/// Decode plus the `@`-artifact scrub.
///
/// Workaround, not a principled step: round trips through intermediate
/// encodings were observed to leave stray `@` runs against alphanumerics.
/// The documented cleanup strips runs adjacent to alphanumerics first and
/// any remaining runs after, which collapses to dropping every `@`.
pub fn decode_scrubbed(text: &str) -> String {
    decode(text).chars().filter(|&c| c != '@').collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_multibyte() {
        for s in ["hello", "Hello World. <3 🌞", ""] {
            assert_eq!(decode(&encode(s)), s);
        }
    }

    #[test]
    fn output_is_entirely_pua() {
        let enc = encode("hi🌞");
        assert!(enc.chars().all(|c| {
            let cp = c as u32;
            (PUA_BASE..=PUA_BASE + 0xFF).contains(&cp)
        }));
        // One codepoint per UTF-8 byte.
        assert_eq!(enc.chars().count(), "hi🌞".len());
    }

    #[test]
    fn decode_ignores_visible_text() {
        let enc = encode("secret");
        let mixed = format!("hello {enc} world");
        assert_eq!(decode(&mixed), "secret");
    }

    #[test]
    fn no_payload_decodes_empty() {
        assert_eq!(decode("just text"), "");
    }

    #[test]
    fn scrub_strips_at_signs() {
        let enc = encode("user@host");
        assert_eq!(decode_scrubbed(&enc), "userhost");
        assert_eq!(decode(&enc), "user@host");
    }
}
