// Unicode steganography.
//
// Two codecs:
//
// - `selector`  — bits as variation selectors trailing a visible carrier
//                 grapheme (primary; configurable wire format)
// - `invisible` — one Private-Use-Area codepoint per payload byte, no
//                 carrier (secondary)
//
// `format` holds the explicit codec configuration, `carrier` the emoji
// metadata collaborator and carrier matching.

pub mod carrier;
pub mod format;
pub mod invisible;
pub mod selector;

pub use carrier::{EmojiCatalog, EmojiEntry, EmojiIndex, find_carrier, has_carrier};
pub use format::{
    BitOrder, Presentation, StegContext, StegFormat, StegFormatError, StegPatch,
};
pub use selector::{decode_hidden, encode_hidden};

/// Carrier-less invisible-text encode (PUA mode).
pub fn encode_invisible(text: &str) -> String {
    invisible::encode(text)
}

/// Carrier-less invisible-text decode, including the documented `@` scrub.
pub fn decode_invisible(text: &str) -> String {
    invisible::decode_scrubbed(text)
}

impl StegContext {
    /// Encode with the context's current format.
    pub fn encode(&self, carrier: &str, payload: &str) -> String {
        selector::encode_hidden(carrier, payload, self.format())
    }

    /// Decode with the context's current format and the built-in catalog.
    pub fn decode(&self, input: &str) -> String {
        selector::decode_hidden(input, self.format(), EmojiIndex::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_roundtrip_with_format_changes() {
        let mut ctx = StegContext::new();
        let encoded = ctx.encode("🐍", "hello");
        assert_eq!(ctx.decode(&encoded), "hello");

        ctx.set_format(&StegPatch {
            bit_order: Some(BitOrder::Lsb),
            ..Default::default()
        })
        .unwrap();
        let lsb = ctx.encode("🐍", "hello");
        assert_eq!(ctx.decode(&lsb), "hello");
        // The two wire forms differ even though both decode to "hello".
        assert_ne!(encoded, lsb);
    }

    #[test]
    fn invisible_mode_has_no_carrier() {
        let enc = encode_invisible("quiet");
        assert!(!has_carrier(&enc, EmojiIndex::builtin()));
        assert_eq!(decode_invisible(&enc), "quiet");
    }
}
