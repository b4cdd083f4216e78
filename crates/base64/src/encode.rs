//! Generic base64 encoding.

use crate::alphabet::Alphabet;

/// Number of symbol units produced for `length` input bytes.
///
/// A symbol unit is either one alphabet character or one fill marker, so this
/// is always a multiple of four.
#[inline]
pub const fn encoded_units(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Number of characters produced for `length` input bytes with alphabet `A`.
///
/// Differs from [`encoded_units`] whenever the fill marker is longer than one
/// character.
///
/// # Example
///
/// ```
/// use jwt_base::{encoded_len, Base64, Base64Url};
///
/// assert_eq!(encoded_len::<Base64>(1), 4);
/// assert_eq!(encoded_len::<Base64Url>(1), 8);
/// ```
pub const fn encoded_len<A: Alphabet>(length: usize) -> usize {
    let () = A::VALID;
    let full = length / 3 * 4;
    match length % 3 {
        1 => full + 2 + 2 * A::FILL.len(),
        2 => full + 3 + A::FILL.len(),
        _ => full,
    }
}

/// Encodes `bin` with alphabet `A`.
///
/// # Example
///
/// ```
/// use jwt_base::{encode, Base64, Base64Url};
///
/// assert_eq!(encode::<Base64>(b"Man"), "TWFu");
/// assert_eq!(encode::<Base64>(b"M"), "TQ==");
/// assert_eq!(encode::<Base64Url>(b"M"), "TQ%3d%3d");
/// ```
pub fn encode<A: Alphabet>(bin: &[u8]) -> String {
    let mut out = String::new();
    encode_into::<A>(bin, &mut out);
    out
}

/// Appends the encoding of `bin` to `out`.
pub fn encode_into<A: Alphabet>(bin: &[u8], out: &mut String) {
    let () = A::VALID;
    out.reserve(encoded_len::<A>(bin.len()));

    let symbol = |triple: u32, shift: u32| {
        let index = (triple >> shift) & 0x3F;
        A::SYMBOLS[index as usize] as char
    };

    let mut chunks = bin.chunks_exact(3);
    for chunk in &mut chunks {
        let triple = ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8) | chunk[2] as u32;
        out.push(symbol(triple, 18));
        out.push(symbol(triple, 12));
        out.push(symbol(triple, 6));
        out.push(symbol(triple, 0));
    }

    match *chunks.remainder() {
        [a] => {
            let triple = (a as u32) << 16;
            out.push(symbol(triple, 18));
            out.push(symbol(triple, 12));
            out.push_str(A::FILL);
            out.push_str(A::FILL);
        }
        [a, b] => {
            let triple = ((a as u32) << 16) | ((b as u32) << 8);
            out.push(symbol(triple, 18));
            out.push(symbol(triple, 12));
            out.push(symbol(triple, 6));
            out.push_str(A::FILL);
        }
        _ => {}
    }
}
