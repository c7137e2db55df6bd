// Transform registry: ordered registration, key/name lookup, and the
// encode/decode entry points every caller goes through.
//
// # Modules
//
// - `spec`   — TransformSpec, Category, priority band constants
// - `engine` — the single interpreter for every Algorithm variant

pub mod engine;
pub mod spec;

use std::collections::{HashMap, HashSet};

use rand::Rng;
use thiserror::Error;

use crate::text;

pub use spec::{
    Algorithm, Category, Detector, MixOptions, TransformSpec, derive_key,
};

/// A registered transform: the spec plus everything compiled at registration.
#[derive(Debug)]
pub struct Transform {
    name: &'static str,
    key: String,
    category: Category,
    priority: u16,
    pub(crate) algorithm: Algorithm,
    detect: Option<Detector>,
    preview: Option<spec::TextFn>,
    pub(crate) compiled: Option<engine::CompiledMap>,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Decoder rank; higher means a more exclusive character set.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn can_decode(&self) -> bool {
        engine::can_decode(&self.algorithm)
    }

    pub fn has_detector(&self) -> bool {
        self.detect.is_some()
    }

    /// Structural short-list test. False when no detector is defined.
    pub fn detect(&self, input: &str) -> bool {
        self.detect.map(|d| d(input)).unwrap_or(false)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("transform name must not be empty")]
    EmptyName,
    #[error("duplicate transform key: {0}")]
    DuplicateKey(String),
}

/// Holds the canonical transform set in registration order.
#[derive(Default)]
pub struct Registry {
    transforms: Vec<Transform>,
    by_key: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a spec, compiling character maps up front.
    pub fn register(&mut self, spec: TransformSpec) -> Result<&Transform, RegistryError> {
        if spec.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let key = derive_key(spec.name);
        if self.by_key.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }

        let compiled = match spec.algorithm {
            Algorithm::CharMap(entries) => Some(engine::CompiledMap::build(entries, false)),
            Algorithm::FoldedCharMap(entries) => Some(engine::CompiledMap::build(entries, true)),
            _ => None,
        };

        self.by_key.insert(key.clone(), self.transforms.len());
        self.transforms.push(Transform {
            name: spec.name,
            key,
            category: spec.category,
            priority: spec.priority,
            algorithm: spec.algorithm,
            detect: spec.detect,
            preview: spec.preview,
            compiled,
        });
        Ok(self.transforms.last().expect("just pushed"))
    }

    /// Lookup by machine key. Absence is not an error.
    pub fn get(&self, key: &str) -> Option<&Transform> {
        self.by_key.get(key).map(|&i| &self.transforms[i])
    }

    /// Lookup by display name.
    pub fn by_name(&self, name: &str) -> Option<&Transform> {
        self.transforms.iter().find(|t| t.name == name)
    }

    /// All transforms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.transforms.iter()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Transforms in one category, registration order preserved.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Transform> {
        self.transforms.iter().filter(move |t| t.category == category)
    }

    /// Encode through the transform at `key`. `None` for an unknown key.
    pub fn encode(&self, key: &str, input: &str) -> Option<String> {
        self.get(key).map(|t| engine::encode(self, t, input))
    }

    /// Decode through the transform at `key`. `None` for an unknown key or a
    /// transform with no decoder.
    pub fn decode(&self, key: &str, input: &str) -> Option<String> {
        self.get(key).and_then(|t| engine::decode(t, input))
    }

    /// Short display form of the transform at `key`, for pickers. Falls
    /// back to the full encode when no preview is defined.
    pub fn preview(&self, key: &str, input: &str) -> Option<String> {
        self.get(key).map(|t| match t.preview {
            Some(preview) => preview(input),
            None => engine::encode(self, t, input),
        })
    }

    /// Encode with a specific transform reference (used by the decoder's
    /// sweep, which already holds one).
    pub fn encode_with(&self, transform: &Transform, input: &str) -> String {
        engine::encode(self, transform, input)
    }

    /// Decode with a specific transform reference.
    pub fn decode_with(&self, transform: &Transform, input: &str) -> Option<String> {
        engine::decode(transform, input)
    }

    /// Apply a random mix of other registered, decode-capable transforms to
    /// each word of `input`, preserving non-word segments verbatim.
    ///
    /// Per-word choices are recorded for introspection; the mix itself is
    /// intentionally not invertible.
    pub fn random_mix<R: Rng + ?Sized>(
        &self,
        input: &str,
        rng: &mut R,
        opts: &MixOptions,
    ) -> MixOutcome {
        let eligible: Vec<&Transform> = self
            .transforms
            .iter()
            .filter(|t| t.can_decode() && !matches!(t.algorithm, Algorithm::RandomMix(_)))
            .collect();

        if input.is_empty() || eligible.is_empty() {
            return MixOutcome {
                text: input.to_string(),
                segments: Vec::new(),
            };
        }

        let max = opts.max_transforms.max(1);
        let draw = rng.random_range(0..max) + 1;
        let count = draw.max(opts.min_transforms).min(eligible.len());

        let mut selected: Vec<&Transform> = Vec::with_capacity(count);
        let mut used: HashSet<usize> = HashSet::new();
        for _ in 0..count {
            let idx = loop {
                let idx = rng.random_range(0..eligible.len());
                if opts.allow_repeats || !used.contains(&idx) || used.len() >= eligible.len() {
                    break idx;
                }
            };
            used.insert(idx);
            selected.push(eligible[idx]);
        }

        let mut out = String::with_capacity(input.len());
        let mut segments = Vec::new();
        for seg in text::word_segments(input) {
            if seg.is_word {
                let transform = selected[rng.random_range(0..selected.len())];
                let encoded = engine::encode(self, transform, seg.text);
                out.push_str(&encoded);
                segments.push(MixSegment {
                    text: encoded,
                    transform: Some(transform.name),
                });
            } else {
                out.push_str(seg.text);
                segments.push(MixSegment {
                    text: seg.text.to_string(),
                    transform: None,
                });
            }
        }

        MixOutcome {
            text: out,
            segments,
        }
    }
}

/// Result of one Random Mix run.
#[derive(Debug, Clone)]
pub struct MixOutcome {
    pub text: String,
    pub segments: Vec<MixSegment>,
}

/// One input segment and the transform applied to it (None for punctuation
/// and whitespace, which pass through).
#[derive(Debug, Clone)]
pub struct MixSegment {
    pub text: String,
    pub transform: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
