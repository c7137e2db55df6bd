// Wire format for the variation-selector codec: which invisible characters
// carry the bits, how bytes are bit-ordered, and what framing surrounds the
// bitstream.
//
// The format is an explicit value threaded through encode/decode calls.
// Hosts that want a "current format" hold a `StegContext`; there is no
// module-level singleton.

use thiserror::Error;

/// Text-presentation selector (VS15), the default zero bit.
pub const VS15: char = '\u{FE0E}';
/// Emoji-presentation selector (VS16), the default one bit.
pub const VS16: char = '\u{FE0F}';
/// Zero-width space, the default trailing marker.
pub const ZWSP: char = '\u{200B}';
/// Zero-width non-joiner, a common inter-bit separator choice.
pub const ZWNJ: char = '\u{200C}';
/// Zero-width joiner, another separator choice.
pub const ZWJ: char = '\u{200D}';

/// Bit order within each payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Most significant bit first.
    #[default]
    Msb,
    /// Least significant bit first (per-byte reversal).
    Lsb,
}

/// Presentation marker inserted right after the carrier, before the bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// No marker; every selector in the tail is a data bit.
    None,
    /// U+FE0F, forcing emoji presentation of the carrier.
    #[default]
    Emoji,
    /// U+FE0E, forcing text presentation.
    Text,
}

/// Complete codec configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegFormat {
    /// Selector emitted for a zero bit.
    pub bit_zero: char,
    /// Selector emitted for a one bit. Must differ from `bit_zero`.
    pub bit_one: char,
    pub presentation: Presentation,
    /// Appended after the final bit, if set.
    pub trailing: Option<char>,
    /// Inserted between bit groups, if set. Never emitted after the final bit.
    pub inter_bit: Option<char>,
    /// Group width for `inter_bit`, in bits.
    pub inter_bit_every: usize,
    pub bit_order: BitOrder,
}

impl Default for StegFormat {
    fn default() -> Self {
        Self {
            bit_zero: VS15,
            bit_one: VS16,
            presentation: Presentation::Emoji,
            trailing: Some(ZWSP),
            inter_bit: None,
            inter_bit_every: 1,
            bit_order: BitOrder::Msb,
        }
    }
}

impl StegFormat {
    /// Shallow-merge a patch over this format; unset fields keep their
    /// current values.
    pub fn merged(&self, patch: &StegPatch) -> StegFormat {
        StegFormat {
            bit_zero: patch.bit_zero.unwrap_or(self.bit_zero),
            bit_one: patch.bit_one.unwrap_or(self.bit_one),
            presentation: patch.presentation.unwrap_or(self.presentation),
            trailing: patch.trailing.unwrap_or(self.trailing),
            inter_bit: patch.inter_bit.unwrap_or(self.inter_bit),
            inter_bit_every: patch.inter_bit_every.unwrap_or(self.inter_bit_every),
            bit_order: patch.bit_order.unwrap_or(self.bit_order),
        }
    }

    /// The two bit selectors must be distinct or decoding is meaningless.
    pub fn validate(&self) -> Result<(), StegFormatError> {
        if self.bit_zero == self.bit_one {
            return Err(StegFormatError::SelectorsEqual(self.bit_zero));
        }
        Ok(())
    }
}

/// Partial configuration for the shallow-merge setter. The `Option<Option<_>>`
/// fields distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct StegPatch {
    pub bit_zero: Option<char>,
    pub bit_one: Option<char>,
    pub presentation: Option<Presentation>,
    pub trailing: Option<Option<char>>,
    pub inter_bit: Option<Option<char>>,
    pub inter_bit_every: Option<usize>,
    pub bit_order: Option<BitOrder>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegFormatError {
    #[error("bit selectors must differ, both are {0:?}")]
    SelectorsEqual(char),
}

/// Host-owned holder for a current format; the mutable-state convenience
/// wrapper over the pure value API.
#[derive(Debug, Clone, Default)]
pub struct StegContext {
    format: StegFormat,
}

impl StegContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self) -> &StegFormat {
        &self.format
    }

    /// Merge a patch into the current format. Rejects (and keeps the old
    /// format) if the patch would make the two selectors collide.
    pub fn set_format(&mut self, patch: &StegPatch) -> Result<(), StegFormatError> {
        let merged = self.format.merged(patch);
        merged.validate()?;
        self.format = merged;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let f = StegFormat::default();
        assert_eq!(f.bit_zero, VS15);
        assert_eq!(f.bit_one, VS16);
        assert_eq!(f.presentation, Presentation::Emoji);
        assert_eq!(f.trailing, Some(ZWSP));
        assert_eq!(f.inter_bit, None);
        assert_eq!(f.bit_order, BitOrder::Msb);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let base = StegFormat::default();
        let merged = base.merged(&StegPatch {
            bit_order: Some(BitOrder::Lsb),
            inter_bit: Some(Some(ZWNJ)),
            ..Default::default()
        });
        assert_eq!(merged.bit_order, BitOrder::Lsb);
        assert_eq!(merged.inter_bit, Some(ZWNJ));
        assert_eq!(merged.bit_zero, VS15);
        assert_eq!(merged.trailing, Some(ZWSP));
    }

    #[test]
    fn clearing_trailing_marker() {
        let merged = StegFormat::default().merged(&StegPatch {
            trailing: Some(None),
            ..Default::default()
        });
        assert_eq!(merged.trailing, None);
    }

    #[test]
    fn context_rejects_colliding_selectors() {
        let mut ctx = StegContext::new();
        let err = ctx.set_format(&StegPatch {
            bit_zero: Some(VS16),
            ..Default::default()
        });
        assert_eq!(err, Err(StegFormatError::SelectorsEqual(VS16)));
        // Old format intact.
        assert_eq!(ctx.format().bit_zero, VS15);
    }

    #[test]
    fn context_swap_selectors() {
        let mut ctx = StegContext::new();
        ctx.set_format(&StegPatch {
            bit_zero: Some(VS16),
            bit_one: Some(VS15),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ctx.format().bit_zero, VS16);
        assert_eq!(ctx.format().bit_one, VS15);
    }
}
