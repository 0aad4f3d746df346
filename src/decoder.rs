//! Message extraction for zero-width steganography.
//!
//! A single left-to-right scan locates the first marker-framed run of
//! zero-width characters, maps it back to bits, and reassembles the
//! UTF-8 bytes. The scan is deliberately forgiving:
//! - A missing end marker consumes bits to the end of the text
//! - A trailing partial byte group is discarded
//! - Invalid UTF-8 decodes to U+FFFD instead of erroring
//!
//! Absence of a payload is the normal `None` outcome, not an error.

use crate::binary::bits_to_text;
use crate::{ZW_JOINER, ZW_NON_JOINER, ZW_SPACE};

/// Configuration for the decoder.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Extracts the hidden message from text.
///
/// # Arguments
/// * `stego_text` - The full text as pasted by the user (the caller
///   strips trailing newline artifacts; see the CLI)
///
/// # Returns
/// `Some(message)` when a marker-framed payload was found, `None` when
/// the text carries no payload at all. A damaged payload still returns
/// `Some`, with U+FFFD standing in for unrecoverable bytes.
pub fn decode(stego_text: &str) -> Option<String> {
    decode_with_config(stego_text, &DecoderConfig::default())
}

/// Extracts a message with custom configuration.
pub fn decode_with_config(stego_text: &str, config: &DecoderConfig) -> Option<String> {
    let mut recording = false;
    let mut bits: Vec<u8> = Vec::new();

    for c in stego_text.chars() {
        if c == ZW_JOINER {
            if recording {
                // End marker: only the first frame is honored
                break;
            }
            recording = true;
        } else if recording && c == ZW_SPACE {
            bits.push(0);
        } else if recording && c == ZW_NON_JOINER {
            bits.push(1);
        }
        // Visible text, and zero-width characters outside the frame,
        // never contribute bits
    }

    if bits.is_empty() {
        if config.verbose {
            eprintln!("No marker-framed payload in {} characters", stego_text.chars().count());
        }
        return None;
    }

    if config.verbose {
        eprintln!(
            "Collected {} payload bits ({} complete bytes)",
            bits.len(),
            bits.len() / 8
        );
    }

    Some(bits_to_text(&bits))
}
