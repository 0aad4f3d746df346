//! Integration tests for Zerohide
//!
//! Note: decode() returns None only when the text carries no payload.
//! Damaged payloads still decode, with U+FFFD for unrecoverable bytes.
//!
//! Properties covered:
//! - Round trip (ASCII and multi-byte secrets)
//! - Visible-text preservation (stripping the alphabet yields the cover)
//! - Framing (missing end marker, first frame wins)
//! - Corruption tolerance (bit flip degrades, never errors)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use zerohide::{decode, encode, ZW_JOINER, ZW_NON_JOINER, ZW_SPACE};

/// Removes all three zero-width alphabet characters.
fn strip_invisible(text: &str) -> String {
    text.chars()
        .filter(|&c| c != ZW_SPACE && c != ZW_NON_JOINER && c != ZW_JOINER)
        .collect()
}

/// Test basic encode/decode roundtrip
#[test]
fn test_encode_decode_roundtrip() {
    let secret = "meet at dawn";
    let cover = "Totally ordinary status update";

    let stego = encode(secret, cover);
    assert_ne!(stego, cover);

    assert_eq!(decode(&stego).as_deref(), Some(secret));
}

/// Test roundtrip with 2-4 byte UTF-8 sequences in the secret
#[test]
fn test_roundtrip_with_emojis() {
    let secret = "café 🚀 日本語 한글 ẞ";
    let cover = "Nothing to see here";

    let stego = encode(secret, cover);
    assert_eq!(decode(&stego).as_deref(), Some(secret));
}

/// Test roundtrip with multi-byte characters in the cover too
#[test]
fn test_roundtrip_with_multibyte_cover() {
    let secret = "hi";
    let cover = "日本語のカバーテキスト 🎉";

    let stego = encode(secret, cover);
    assert_eq!(strip_invisible(&stego), cover);
    assert_eq!(decode(&stego).as_deref(), Some(secret));
}

/// Test that embedding never alters the visible character sequence
#[test]
fn test_visible_text_preserved() {
    let cover = "The quick brown fox jumps over the lazy dog";
    let stego = encode("secret", cover);

    assert_eq!(strip_invisible(&stego), cover);
}

/// Test that text without any invisible characters decodes to None
#[test]
fn test_no_marker_decode_is_none() {
    assert_eq!(decode("hello world"), None);
}

/// Test the trailing-consumption policy: a start marker with no end
/// marker decodes exactly like the fully framed text
#[test]
fn test_missing_end_marker_still_decodes() {
    let secret = "truncated but fine";
    let stego = encode(secret, "a");

    // The frame closes the stego text when the cover is one character;
    // dropping the final marker simulates a cut-off paste
    let truncated = stego.strip_suffix(ZW_JOINER).unwrap();

    assert_eq!(decode(truncated).as_deref(), Some(secret));
    assert_eq!(decode(truncated), decode(&stego));
}

/// Test that one flipped bit degrades to U+FFFD instead of failing
#[test]
fn test_single_bit_corruption_degrades_gracefully() {
    let stego = encode("hi", "ab");

    // Payload starts after the head character and the start marker.
    // Flipping the first bit turns 0x68 ('h') into 0xE8, an unfinished
    // three-byte UTF-8 lead.
    let mut chars: Vec<char> = stego.chars().collect();
    assert_eq!(chars[2], ZW_SPACE);
    chars[2] = ZW_NON_JOINER;
    let corrupted: String = chars.into_iter().collect();

    assert_eq!(decode(&corrupted).as_deref(), Some("\u{FFFD}i"));
}

/// Test encoding into an empty cover: the result is the bare frame
#[test]
fn test_empty_cover_payload_only() {
    let stego = encode("hi", "");

    assert!(stego.starts_with(ZW_JOINER));
    assert!(stego.ends_with(ZW_JOINER));
    assert_eq!(strip_invisible(&stego), "");
    assert_eq!(decode(&stego).as_deref(), Some("hi"));
}

/// Test that two independent embeddings never corrupt each other
#[test]
fn test_double_embedding_independent() {
    let cover = "Same cover both times";

    let first = encode("first secret", cover);
    let second = encode("second secret", cover);

    assert_eq!(decode(&first).as_deref(), Some("first secret"));
    assert_eq!(decode(&second).as_deref(), Some("second secret"));

    // Concatenated outputs: only the earliest frame is honored
    let combined = format!("{first}{second}");
    assert_eq!(decode(&combined).as_deref(), Some("first secret"));
}

/// Test that a secret containing the reserved alphabet still roundtrips:
/// the secret is reduced to bits before any zero-width character is
/// emitted, so its content never collides with the framing
#[test]
fn test_reserved_characters_in_secret_roundtrip() {
    let secret = format!("a{}b{}c{}", ZW_JOINER, ZW_SPACE, ZW_NON_JOINER);
    let stego = encode(&secret, "cover");

    assert_eq!(decode(&stego).as_deref(), Some(secret.as_str()));
}

/// Test many roundtrips over mixed-width characters, deterministically
#[test]
fn test_seeded_random_roundtrips() {
    // Pool spans 1-4 byte UTF-8 sequences; no zero-width characters
    let pool: Vec<char> = "abcXYZ019 .,!éñüßØ日本語中문한🚀🎉🦀".chars().collect();
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);

    for _ in 0..50 {
        let secret: String = (0..rng.gen_range(1..=24))
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        let cover: String = (0..rng.gen_range(1..=40))
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();

        let stego = encode(&secret, &cover);
        assert_eq!(strip_invisible(&stego), cover);
        assert_eq!(decode(&stego).as_deref(), Some(secret.as_str()));
    }
}
