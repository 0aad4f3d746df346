//! Bit-level text codec.
//!
//! Converts between text and the bit sequence of its UTF-8 encoding.
//! Encoding is total: every string has a UTF-8 form. Decoding is
//! best-effort: a trailing group shorter than a byte is discarded and
//! invalid byte sequences become U+FFFD, so a damaged payload still
//! surfaces readable text instead of an error.

/// Converts text to the bits of its UTF-8 encoding, most significant
/// bit first within each byte.
///
/// The result length is always `8 * text.len()` (UTF-8 byte length),
/// so multi-byte characters such as emojis contribute 16-32 bits each.
pub fn text_to_bits(text: &str) -> Vec<u8> {
    let mut bits = Vec::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Converts a bit sequence (MSB first) back to text.
///
/// Bits are grouped into bytes of 8; a final group shorter than 8 bits
/// is dropped, never interpreted. Byte sequences that are not valid
/// UTF-8 decode to the replacement character (U+FFFD) instead of
/// failing, so truncated or corrupted input still yields the best
/// reconstruction available.
pub fn bits_to_text(bits: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
