//! # Zerohide - Hide text in plain sight
//!
//! Zerohide is a steganography tool that hides a secret message inside
//! ordinary cover text using zero-width Unicode characters.
//!
//! ## Overview
//!
//! The combined text looks and copies exactly like the cover text:
//! - Secret is encoded as **UTF-8 bits** (full Unicode range, emojis included)
//! - Each bit becomes a **zero-width character** (invisible when rendered)
//! - The run is **framed** by a pair of zero-width joiner markers
//! - The frame is **spliced** right after the first cover character
//! - Decoding scans for the first frame and reassembles the bytes
//!
//! ## Fragility
//!
//! Zero-width characters survive plain copy/paste but many text pipelines
//! (retyping, normalization, some chat apps) strip them. That is accepted:
//! there is no redundancy or error correction layer.
//!
//! ## Example Usage
//!
//! ```rust
//! use zerohide::{decode, encode};
//!
//! let stego = encode("meet at dawn", "Nothing interesting here");
//!
//! // The visible text is unchanged; the secret travels invisibly.
//! assert_eq!(decode(&stego).as_deref(), Some("meet at dawn"));
//! ```
//!
//! ## Modules
//!
//! - [`binary`]: Bit-level text codec (UTF-8 bytes to bits and back)
//! - [`encoder`]: Message hiding (payload construction and splicing)
//! - [`decoder`]: Message extraction (never fails on damaged payloads)

/// Zero Width Space (U+200B). Data symbol for bit 0.
pub const ZW_SPACE: char = '\u{200B}';

/// Zero Width Non-Joiner (U+200C). Data symbol for bit 1.
pub const ZW_NON_JOINER: char = '\u{200C}';

/// Zero Width Joiner (U+200D). Frame marker delimiting the payload;
/// reserved, never used as a data symbol.
pub const ZW_JOINER: char = '\u{200D}';

pub mod binary;
pub mod decoder;
pub mod encoder;

// Re-export commonly used items at the crate root
pub use decoder::{decode, decode_with_config, DecoderConfig};
pub use encoder::{encode, encode_with_config, EncoderConfig};
