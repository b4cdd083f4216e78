//! Generic, validating base64 decoding.

use crate::alphabet::{sextet, Alphabet};
use crate::constants::MAX_FILL_UNITS;
use crate::Base64Error;

/// Upper bound on the number of bytes decoded from `length` characters.
#[inline]
pub const fn decoded_len_estimate(length: usize) -> usize {
    (length / 4 + 1) * 3
}

/// Decodes `base` with alphabet `A`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidInput`] if the text carries more than two
/// fill units, if its length is not a multiple of four symbol units, or if any
/// character is not part of the alphabet.
///
/// # Example
///
/// ```
/// use jwt_base::{decode, Base64, Base64Error};
///
/// assert_eq!(decode::<Base64>("TWFu").unwrap(), b"Man");
/// assert_eq!(decode::<Base64>("TQ==").unwrap(), b"M");
/// assert_eq!(decode::<Base64>("A!=="), Err(Base64Error::InvalidInput));
/// ```
pub fn decode<A: Alphabet>(base: &str) -> Result<Vec<u8>, Base64Error> {
    decode_bytes::<A>(base.as_bytes())
}

/// Decodes base64 text held in a byte slice.
///
/// Bytes that are not ASCII alphabet symbols are rejected like any other
/// unknown character.
pub fn decode_bytes<A: Alphabet>(base: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let fill = A::FILL.as_bytes();

    let mut size = base.len();
    let mut fill_count = 0;
    while size > fill.len() && base[..size].ends_with(fill) {
        fill_count += 1;
        size -= fill.len();
        if fill_count > MAX_FILL_UNITS {
            log::trace!("{}: more than {} fill units", A::NAME, MAX_FILL_UNITS);
            return Err(Base64Error::InvalidInput);
        }
    }

    if (size + fill_count) % 4 != 0 {
        log::trace!(
            "{}: {} symbols and {} fill units do not form whole quartets",
            A::NAME,
            size,
            fill_count
        );
        return Err(Base64Error::InvalidInput);
    }

    let base = &base[..size];
    let lookup = |offset: usize| {
        sextet::<A>(base[offset]).ok_or_else(|| {
            log::trace!(
                "{}: byte {:#04x} at offset {} is not a symbol",
                A::NAME,
                base[offset],
                offset
            );
            Base64Error::InvalidInput
        })
    };

    let mut out = Vec::with_capacity(decoded_len_estimate(size));

    let bulk = size - size % 4;
    let mut i = 0;
    while i < bulk {
        let triple = (lookup(i)? << 18)
            | (lookup(i + 1)? << 12)
            | (lookup(i + 2)? << 6)
            | lookup(i + 3)?;
        out.push((triple >> 16) as u8);
        out.push((triple >> 8) as u8);
        out.push(triple as u8);
        i += 4;
    }

    if fill_count == 0 {
        return Ok(out);
    }

    // Two symbols always precede the fill; a single fill unit implies a third.
    let mut triple = (lookup(bulk)? << 18) | (lookup(bulk + 1)? << 12);
    if fill_count == 1 {
        triple |= lookup(bulk + 2)? << 6;
        out.push((triple >> 16) as u8);
        out.push((triple >> 8) as u8);
    } else {
        out.push((triple >> 16) as u8);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Base64, Base64Url};

    #[test]
    fn test_empty() {
        assert_eq!(decode::<Base64>("").unwrap(), b"");
        assert_eq!(decode::<Base64Url>("").unwrap(), b"");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(decode::<Base64>("TWFu").unwrap(), b"Man");
        assert_eq!(decode::<Base64>("TQ==").unwrap(), b"M");
        assert_eq!(decode::<Base64>("TWE=").unwrap(), b"Ma");
        assert_eq!(decode::<Base64>("Zm9vYmFy").unwrap(), b"foobar");
        assert_eq!(decode::<Base64>("Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(decode::<Base64>("Zm9vYg==").unwrap(), b"foob");
    }

    #[test]
    fn test_url_fill() {
        assert_eq!(decode::<Base64Url>("Zg%3d%3d").unwrap(), b"f");
        assert_eq!(decode::<Base64Url>("Zm8%3d").unwrap(), b"fo");
        assert_eq!(decode::<Base64Url>("-_-_").unwrap(), [0xFB, 0xFF, 0xBF]);
    }

    #[test]
    fn test_rejects_bad_length() {
        assert_eq!(decode::<Base64>("A"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("AB"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("ABCDE"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("Zg="), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("="), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64Url>("%3d"), Err(Base64Error::InvalidInput));
    }

    #[test]
    fn test_rejects_excess_fill() {
        assert_eq!(decode::<Base64>("A==="), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("===="), Err(Base64Error::InvalidInput));
        assert_eq!(
            decode::<Base64Url>("A%3d%3d%3d"),
            Err(Base64Error::InvalidInput)
        );
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        assert_eq!(decode::<Base64>("A!=="), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("TW!u"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("TWF!"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("TWE!"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("A=B="), Err(Base64Error::InvalidInput));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_eq!(decode::<Base64>("TWé="), Err(Base64Error::InvalidInput));
        assert_eq!(
            decode_bytes::<Base64>(&[b'T', b'W', 0xFF, b'u']),
            Err(Base64Error::InvalidInput)
        );
    }

    #[test]
    fn test_trailing_bits_are_ignored() {
        assert_eq!(decode::<Base64>("TR==").unwrap(), b"M");
        assert_eq!(decode::<Base64>("TWF=").unwrap(), b"Ma");
    }

    #[test]
    fn test_cross_variant() {
        assert_eq!(decode::<Base64>("-_-_"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64Url>("+/+/"), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64Url>("TQ=="), Err(Base64Error::InvalidInput));
        assert_eq!(decode::<Base64>("TQ%3d%3d"), Err(Base64Error::InvalidInput));
    }

    #[test]
    fn test_estimate_is_an_upper_bound() {
        for text in ["", "TQ==", "TWE=", "TWFu", "Zm9vYmFy"] {
            let decoded = decode::<Base64>(text).unwrap();
            assert!(decoded.len() <= decoded_len_estimate(text.len()));
        }
    }
}
