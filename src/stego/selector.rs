// Variation-selector codec: the payload's UTF-8 bytes ride as a run of
// invisible selector characters glued to a visible carrier grapheme. The
// whole thing renders as just the carrier.

use log::debug;

use super::carrier::{EmojiIndex, find_carrier};
use super::format::{BitOrder, Presentation, StegFormat};
use crate::text::lossy_utf8;

/// Characters that may legally appear in the invisible tail. Anything else
/// ends the run.
fn in_selector_run(c: char) -> bool {
    matches!(
        c,
        '\u{FE0E}' | '\u{FE0F}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'
    )
}

fn byte_bits(b: u8, order: BitOrder) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        let shift = match order {
            BitOrder::Msb => 7 - i,
            BitOrder::Lsb => i,
        };
        *bit = b & (1 << shift) != 0;
    }
    bits
}

/// Attach `payload` to `carrier` as an invisible selector tail.
///
/// An empty payload yields just the carrier (plus the presentation marker if
/// one is configured).
pub fn encode_hidden(carrier: &str, payload: &str, format: &StegFormat) -> String {
    let mut out = String::from(carrier);
    match format.presentation {
        Presentation::Emoji => out.push('\u{FE0F}'),
        Presentation::Text => out.push('\u{FE0E}'),
        Presentation::None => {}
    }
    if payload.is_empty() {
        return out;
    }

    let bits: Vec<bool> = payload
        .bytes()
        .flat_map(|b| byte_bits(b, format.bit_order))
        .collect();
    let every = format.inter_bit_every.max(1);
    for (i, &bit) in bits.iter().enumerate() {
        out.push(if bit { format.bit_one } else { format.bit_zero });
        if let Some(sep) = format.inter_bit {
            if i + 1 < bits.len() && (i + 1) % every == 0 {
                out.push(sep);
            }
        }
    }
    if let Some(trailing) = format.trailing {
        out.push(trailing);
    }
    out
}

/// Recover a payload hidden after the first carrier in `input`.
///
/// Returns an empty string when no carrier is found, the tail holds no data
/// bits, or the bits never complete a byte.
pub fn decode_hidden(input: &str, format: &StegFormat, catalog: &EmojiIndex) -> String {
    let Some((pos, carrier)) = find_carrier(input, catalog) else {
        return String::new();
    };

    // Greedily take the invisible run right after the carrier.
    let tail = &input[pos + carrier.len()..];
    let run: Vec<char> = tail.chars().take_while(|&c| in_selector_run(c)).collect();

    // Only the two configured selectors carry bits; other zero-width
    // characters in the run are separator noise.
    let selectors: Vec<char> = run
        .iter()
        .copied()
        .filter(|&c| c == '\u{FE0E}' || c == '\u{FE0F}')
        .collect();
    if selectors.is_empty() {
        return String::new();
    }

    // The first selector is the presentation marker, not data.
    let skip = match format.presentation {
        Presentation::None => 0,
        Presentation::Emoji | Presentation::Text => 1,
    };
    if selectors.len() <= skip {
        return String::new();
    }

    let bits: Vec<bool> = selectors[skip..]
        .iter()
        .filter_map(|&c| {
            if c == format.bit_zero {
                Some(false)
            } else if c == format.bit_one {
                Some(true)
            } else {
                None
            }
        })
        .collect();

    // Truncate any incomplete trailing byte.
    let whole_bytes = bits.len() / 8;
    if whole_bytes == 0 {
        debug!("selector run too short for a full byte: {} bits", bits.len());
        return String::new();
    }
    let mut bytes = Vec::with_capacity(whole_bytes);
    for chunk in bits[..whole_bytes * 8].chunks(8) {
        let mut b = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            if bit {
                let shift = match format.bit_order {
                    BitOrder::Msb => 7 - i,
                    BitOrder::Lsb => i,
                };
                b |= 1 << shift;
            }
        }
        bytes.push(b);
    }
    lossy_utf8(bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
