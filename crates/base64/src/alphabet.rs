//! Alphabet descriptors shared by the encoder and the decoder.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, INVALID, PAD, PAD_URL};

/// A base64 alphabet: 64 ordered symbols plus a fill marker.
///
/// Encoding and decoding are generic over this trait, so a new variant only
/// needs to supply `SYMBOLS` and `FILL`. The reverse lookup table is derived
/// at compile time and evaluation fails for an ill-formed alphabet:
///
/// - every symbol must be printable ASCII and appear exactly once,
/// - the fill marker must be non-empty and contain at least one byte that is
///   not an alphabet symbol.
///
/// # Example
///
/// ```
/// use jwt_base::{decode, encode, Alphabet};
///
/// struct Dotted;
///
/// impl Alphabet for Dotted {
///     const NAME: &'static str = "dotted";
///     const SYMBOLS: [u8; 64] =
///         *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-";
///     const FILL: &'static str = ".";
/// }
///
/// let text = encode::<Dotted>(b"\xfb\xef");
/// assert_eq!(text, "++8.");
/// assert_eq!(decode::<Dotted>(&text).unwrap(), b"\xfb\xef");
/// ```
///
/// Encoding with a malformed alphabet does not compile:
///
/// ```compile_fail
/// use jwt_base::{encode, Alphabet};
///
/// struct Repeated;
///
/// impl Alphabet for Repeated {
///     const NAME: &'static str = "repeated";
///     const SYMBOLS: [u8; 64] =
///         *b"AACDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
///     const FILL: &'static str = "=";
/// }
///
/// let _ = encode::<Repeated>(b"Man");
/// ```
pub trait Alphabet {
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Symbol for each sextet value.
    const SYMBOLS: [u8; 64];

    /// Fill marker appended to align output to four symbol units.
    const FILL: &'static str;

    /// Byte to sextet map; bytes outside the alphabet map to an invalid marker.
    const REVERSE: [u8; 256] = reverse_table(&Self::SYMBOLS, Self::FILL);

    /// Evaluates to `()` for a well-formed alphabet and fails const
    /// evaluation otherwise. Every encode and decode path reads it.
    const VALID: () = validate(&Self::SYMBOLS, Self::FILL);
}

/// Standard base64 (`+`, `/`, fill `=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Base64;

impl Alphabet for Base64 {
    const NAME: &'static str = "base64";
    const SYMBOLS: [u8; 64] = *ALPHABET_BYTES;
    const FILL: &'static str = PAD;
}

/// URL-safe base64 (`-`, `_`, fill `%3d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Base64Url;

impl Alphabet for Base64Url {
    const NAME: &'static str = "base64url";
    const SYMBOLS: [u8; 64] = *ALPHABET_URL_BYTES;
    const FILL: &'static str = PAD_URL;
}

/// Builds the byte to sextet lookup table for `symbols`.
///
/// Bytes outside the alphabet map to [`INVALID`].
///
/// Panics during const evaluation if the alphabet or its fill marker is
/// malformed.
pub const fn reverse_table(symbols: &[u8; 64], fill: &str) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        let c = symbols[i];
        assert!(c.is_ascii_graphic(), "alphabet symbols must be printable ASCII");
        assert!(table[c as usize] == INVALID, "alphabet symbols must be distinct");
        table[c as usize] = i as u8;
        i += 1;
    }

    let fill = fill.as_bytes();
    assert!(!fill.is_empty(), "fill marker must not be empty");
    let mut foreign = false;
    let mut j = 0;
    while j < fill.len() {
        if table[fill[j] as usize] == INVALID {
            foreign = true;
        }
        j += 1;
    }
    assert!(foreign, "fill marker must not be made of alphabet symbols");

    table
}

/// Checks `symbols` and `fill` with the same rules as [`reverse_table`].
pub const fn validate(symbols: &[u8; 64], fill: &str) {
    let _table = reverse_table(symbols, fill);
}

/// Looks up the sextet for `byte`, `None` when it is not an alphabet symbol.
#[inline]
pub(crate) fn sextet<A: Alphabet>(byte: u8) -> Option<u32> {
    let () = A::VALID;
    match A::REVERSE[byte as usize] {
        INVALID => None,
        value => Some(value as u32),
    }
}
