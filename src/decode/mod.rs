// Universal decoder: a fixed pipeline of named stages over the transform
// registry and the steganography codec.
//
// Stage order (each may short-circuit the rest):
//
// 1. Detector sweep     — every transform with detect + decode
// 2. Exclusive match    — candidates at or above EXCLUSIVE_THRESHOLD win
//                         outright; nothing generic second-guesses them
// 3. Steganography probe — carrier-bearing input, fixed priority
// 4. Active-context probe — "decode with the tool I'm using" outranks guesses
// 5. Generic fallback   — transforms with decode but no detector, weakly
//                         filtered, lowest priority
//
// Failures are local: a transform that produces nothing is logged and
// skipped, never fatal to the sweep.

use log::debug;

use crate::registry::{Registry, Transform};
use crate::stego::{EmojiIndex, StegFormat, decode_hidden, has_carrier};
use crate::text::{has_alnum_run, has_visible_content};

/// Candidates at or above this rank are exclusive-charset matches; when any
/// appears, only such candidates are returned.
pub const EXCLUSIVE_THRESHOLD: u16 = 280;
/// Rank for the caller's currently-active transform.
pub const ACTIVE_CONTEXT_PRIORITY: u16 = 150;
/// Rank for a successful steganography extraction.
pub const STEGANOGRAPHY_PRIORITY: u16 = 100;
/// Rank for unconditioned fallback decodes.
pub const FALLBACK_PRIORITY: u16 = 10;
/// Rank assumed for a detector-bearing transform that carries none.
pub const DEFAULT_DETECTOR_PRIORITY: u16 = 285;

/// Minimum run of alphanumeric/space characters for a fallback result to be
/// considered plausible.
const PLAUSIBLE_RUN: usize = 3;

/// Method name reported for steganographic extractions.
const STEGANOGRAPHY_METHOD: &str = "Emoji Steganography";

/// One ranked interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub method: String,
    /// The rank this candidate entered the sweep with (a transform's band,
    /// or one of the fixed stage priorities).
    pub priority: u16,
}

/// The decoder's answer: the best guess plus ranked alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub method: String,
    pub priority: u16,
    pub alternatives: Vec<Candidate>,
}

/// Caller-side context that can bias the ranking.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext<'a> {
    /// Key or display name of the transform the caller is currently using.
    pub active_transform: Option<&'a str>,
}

#[derive(Debug)]
struct Ranked {
    text: String,
    method: String,
    priority: u16,
}

/// Candidate accumulator: dedups by exact text, first occurrence wins.
#[derive(Default)]
struct CandidateSet {
    items: Vec<Ranked>,
}

impl CandidateSet {
    fn push(&mut self, input: &str, text: String, method: &str, priority: u16) {
        if text.is_empty() || text == input {
            return;
        }
        if self.items.iter().any(|c| c.text == text) {
            return;
        }
        self.items.push(Ranked {
            text,
            method: method.to_string(),
            priority,
        });
    }

    fn into_result(mut self) -> Option<Decoded> {
        if self.items.is_empty() {
            return None;
        }
        // Stable: ties keep insertion order.
        self.items.sort_by(|a, b| b.priority.cmp(&a.priority));
        let mut iter = self.items.into_iter();
        let top = iter.next().expect("non-empty");
        Some(Decoded {
            text: top.text,
            method: top.method,
            priority: top.priority,
            alternatives: iter
                .map(|c| Candidate {
                    text: c.text,
                    method: c.method,
                    priority: c.priority,
                })
                .collect(),
        })
    }
}

/// The decoder proper: borrows the registry, the emoji catalog, and the
/// steganography format to probe with.
pub struct UniversalDecoder<'a> {
    registry: &'a Registry,
    catalog: &'a EmojiIndex,
    format: StegFormat,
}

impl<'a> UniversalDecoder<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            catalog: EmojiIndex::builtin(),
            format: StegFormat::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: &'a EmojiIndex) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_format(mut self, format: StegFormat) -> Self {
        self.format = format;
        self
    }

    /// Best-effort interpretation of `input`; `None` when nothing plausible
    /// survived.
    pub fn decode(&self, input: &str, context: &DecodeContext<'_>) -> Option<Decoded> {
        if input.is_empty() {
            return None;
        }

        let mut set = CandidateSet::default();
        let exclusive = self.detector_sweep(input, &mut set);

        // Exclusive-charset matches are never second-guessed by the
        // speculative stages.
        if exclusive {
            set.items.retain(|c| c.priority >= EXCLUSIVE_THRESHOLD);
            return set.into_result();
        }

        self.steganography_probe(input, &mut set);
        self.active_context_probe(input, context, &mut set);
        self.generic_fallback(input, &mut set);

        set.into_result()
    }

    /// Stage 1: run every detector-bearing, decodable transform. Returns
    /// whether any candidate reached the exclusive threshold.
    fn detector_sweep(&self, input: &str, set: &mut CandidateSet) -> bool {
        let mut exclusive = false;
        for transform in self.registry.iter() {
            if !transform.has_detector() || !transform.can_decode() {
                continue;
            }
            if !transform.detect(input) {
                continue;
            }
            let Some(result) = self.registry.decode_with(transform, input) else {
                continue;
            };
            if result == input || !has_visible_content(&result) {
                debug!("{}: detector hit but no usable decode", transform.name());
                continue;
            }
            let priority = effective_priority(transform);
            if priority >= EXCLUSIVE_THRESHOLD {
                exclusive = true;
            }
            set.push(input, result, transform.name(), priority);
        }
        exclusive
    }

    /// Stage 3: try the variation-selector codec when a carrier is present.
    fn steganography_probe(&self, input: &str, set: &mut CandidateSet) {
        if !has_carrier(input, self.catalog) {
            return;
        }
        let hidden = decode_hidden(input, &self.format, self.catalog);
        if hidden.is_empty() {
            debug!("carrier present but no hidden payload");
            return;
        }
        set.push(input, hidden, STEGANOGRAPHY_METHOD, STEGANOGRAPHY_PRIORITY);
    }

    /// Stage 4: the caller's active transform gets a privileged attempt.
    fn active_context_probe(
        &self,
        input: &str,
        context: &DecodeContext<'_>,
        set: &mut CandidateSet,
    ) {
        let Some(active) = context.active_transform else {
            return;
        };
        let transform = self
            .registry
            .get(active)
            .or_else(|| self.registry.by_name(active));
        let Some(transform) = transform else {
            debug!("active transform {active:?} not registered");
            return;
        };
        if let Some(result) = self.registry.decode_with(transform, input) {
            set.push(input, result, transform.name(), ACTIVE_CONTEXT_PRIORITY);
        }
    }

    /// Stage 5: transforms that never claim structural confidence, weakly
    /// filtered for plausibility.
    fn generic_fallback(&self, input: &str, set: &mut CandidateSet) {
        for transform in self.registry.iter() {
            if transform.has_detector() || !transform.can_decode() {
                continue;
            }
            let Some(result) = self.registry.decode_with(transform, input) else {
                continue;
            };
            if result == input || !has_alnum_run(&result, PLAUSIBLE_RUN) {
                continue;
            }
            set.push(input, result, transform.name(), FALLBACK_PRIORITY);
        }
    }
}

fn effective_priority(transform: &Transform) -> u16 {
    match transform.priority() {
        0 => DEFAULT_DETECTOR_PRIORITY,
        p => p,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::builtin;

    fn decode(input: &str) -> Option<Decoded> {
        let registry = builtin();
        UniversalDecoder::new(&registry).decode(input, &DecodeContext::default())
    }

    #[test]
    fn base64_scenario() {
        let result = decode("aGVsbG8gd29ybGQ=").expect("candidate");
        assert_eq!(result.text, "hello world");
        assert_eq!(result.method, "Base64");
    }

    #[test]
    fn binary_exclusive_short_circuit() {
        let registry = builtin();
        let encoded = registry.encode("binary", "hi").unwrap();
        let result = UniversalDecoder::new(&registry)
            .decode(&encoded, &DecodeContext::default())
            .expect("candidate");
        assert_eq!(result.method, "Binary");
        assert_eq!(result.text, "hi");
        // Everything surviving the short circuit is an exclusive match; the
        // speculative stages never ran.
        assert!(result.alternatives.iter().all(|c| c.method != "Reverse Text"));
    }

    #[test]
    fn plain_prose_never_exclusive() {
        let result = decode("The quick brown fox jumps over the lazy dog");
        if let Some(decoded) = result {
            assert!(
                decoded.priority < STEGANOGRAPHY_PRIORITY,
                "prose claimed by {} at priority {}",
                decoded.method,
                decoded.priority
            );
            for alt in &decoded.alternatives {
                assert!(alt.priority < STEGANOGRAPHY_PRIORITY);
            }
        }
    }

    #[test]
    fn steganography_probe_ranks_high() {
        let registry = builtin();
        let hidden = crate::stego::encode_hidden("🐍", "secret", &StegFormat::default());
        let result = UniversalDecoder::new(&registry)
            .decode(&hidden, &DecodeContext::default())
            .expect("candidate");
        assert_eq!(result.method, "Emoji Steganography");
        assert_eq!(result.text, "secret");
    }

    #[test]
    fn active_transform_outranks_fallback() {
        let registry = builtin();
        let encoded = registry.encode("rot47", "Attack at dawn, 5pm").unwrap();
        let context = DecodeContext {
            active_transform: Some("rot47"),
        };
        let result = UniversalDecoder::new(&registry)
            .decode(&encoded, &context)
            .expect("candidate");
        assert_eq!(result.method, "ROT47");
        assert_eq!(result.text, "Attack at dawn, 5pm");
    }

    #[test]
    fn empty_input_is_none() {
        assert!(decode("").is_none());
    }

    #[test]
    fn alternatives_are_deduplicated_by_text() {
        let result = decode("aGVsbG8gd29ybGQ=").expect("candidate");
        let mut texts: Vec<&str> = result.alternatives.iter().map(|c| c.text.as_str()).collect();
        texts.push(result.text.as_str());
        let before = texts.len();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(before, texts.len());
    }
}
