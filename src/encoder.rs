//! Message hiding for zero-width steganography.
//!
//! This module orchestrates the hiding process:
//! 1. Encode the secret as UTF-8 bits (MSB first)
//! 2. Map each bit to a zero-width character (0 -> ZWSP, 1 -> ZWNJ)
//! 3. Frame the payload with a pair of zero-width joiner markers
//! 4. Splice the frame after the first character of the cover text
//!
//! The visible character sequence of the result is exactly the cover
//! text; embedding only ever inserts invisible characters.

use crate::binary::text_to_bits;
use crate::{ZW_JOINER, ZW_NON_JOINER, ZW_SPACE};

/// Configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Hides a secret message inside cover text.
///
/// # Arguments
/// * `secret` - The message to hide (any Unicode text)
/// * `cover` - The visible text that carries the message
///
/// # Returns
/// The cover text with an invisible marker-framed payload spliced in.
/// Stripping the three zero-width code points from the result yields
/// the cover text unchanged.
///
/// Callers are expected to reject empty inputs up front; an empty
/// secret encodes to an empty payload and an empty cover yields the
/// bare frame.
pub fn encode(secret: &str, cover: &str) -> String {
    encode_with_config(secret, cover, &EncoderConfig::default())
}

/// Hides a message with custom configuration.
pub fn encode_with_config(secret: &str, cover: &str, config: &EncoderConfig) -> String {
    // Step 1: Secret to UTF-8 bit sequence
    let bits = text_to_bits(secret);

    if config.verbose {
        eprintln!("Secret is {} bytes ({} bits)", bits.len() / 8, bits.len());
    }

    // Step 2: One zero-width character per bit
    let payload: String = bits
        .iter()
        .map(|&bit| if bit == 0 { ZW_SPACE } else { ZW_NON_JOINER })
        .collect();

    // Step 3: Frame with start/end markers
    let mut frame = String::with_capacity(payload.len() + 2 * ZW_JOINER.len_utf8());
    frame.push(ZW_JOINER);
    frame.push_str(&payload);
    frame.push(ZW_JOINER);

    // Step 4: Splice after the first character of the cover text
    let mut chars = cover.chars();
    let stego = match chars.next() {
        Some(head) => {
            let mut stego = String::with_capacity(cover.len() + frame.len());
            stego.push(head);
            stego.push_str(&frame);
            stego.push_str(chars.as_str());
            stego
        }
        None => frame,
    };

    if config.verbose {
        eprintln!(
            "Spliced {} invisible characters into {} visible ones",
            bits.len() + 2,
            cover.chars().count()
        );
    }

    stego
}
