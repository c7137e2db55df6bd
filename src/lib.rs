//! Glyphveil: Unicode text obfuscation in Rust.
//!
//! The crate provides:
//! - A registry of ~60 reversible/irreversible text transforms (`registry`,
//!   `transforms`)
//! - Emoji steganography over variation selectors and Private-Use-Area
//!   codepoints (`stego`)
//! - A heuristic universal decoder that guesses which transform produced an
//!   unknown string (`decode`)
//!
//! # Quick Start
//!
//! ```
//! use glyphveil::decode::{DecodeContext, UniversalDecoder};
//! use glyphveil::transforms;
//!
//! let registry = transforms::builtin();
//!
//! let encoded = registry.encode("base64", "hello world").unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(registry.decode("base64", &encoded).unwrap(), "hello world");
//!
//! let guess = UniversalDecoder::new(&registry)
//!     .decode(&encoded, &DecodeContext::default())
//!     .unwrap();
//! assert_eq!(guess.method, "Base64");
//! assert_eq!(guess.text, "hello world");
//! ```
//!
//! # Hiding text in an emoji
//!
//! ```
//! use glyphveil::stego::{StegContext, StegFormat, encode_hidden};
//!
//! let hidden = encode_hidden("🐍", "hi", &StegFormat::default());
//! // Renders as just the snake; the payload rides in invisible selectors.
//! assert_eq!(hidden.chars().count(), 1 + 1 + 16 + 1);
//!
//! let ctx = StegContext::new();
//! assert_eq!(ctx.decode(&hidden), "hi");
//! ```

pub mod decode;
pub mod registry;
pub mod stego;
pub mod text;
pub mod transforms;

pub use decode::{Candidate, DecodeContext, Decoded, UniversalDecoder};
pub use registry::{
    Algorithm, Category, MixOptions, Registry, RegistryError, Transform, TransformSpec,
};
pub use stego::{
    BitOrder, EmojiCatalog, EmojiIndex, Presentation, StegContext, StegFormat, StegPatch,
    decode_hidden, decode_invisible, encode_hidden, encode_invisible,
};
