//! Fill handling for compact token segments, which travel without fill.

use crate::alphabet::Alphabet;
use crate::decode::decode;
use crate::encode::encode;
use crate::Base64Error;

/// Strips every trailing fill marker from `base`.
///
/// # Example
///
/// ```
/// use jwt_base::{trim, Base64, Base64Url};
///
/// assert_eq!(trim::<Base64>("TQ=="), "TQ");
/// assert_eq!(trim::<Base64Url>("TQ%3d%3d"), "TQ");
/// ```
pub fn trim<A: Alphabet>(base: &str) -> &str {
    let mut trimmed = base;
    while let Some(rest) = trimmed.strip_suffix(A::FILL) {
        trimmed = rest;
    }
    trimmed
}

/// Restores the fill markers of an unpadded encoding.
///
/// Text that already ends in fill is accepted only when it carries exactly
/// the fill an encoder would have produced, and is returned unchanged.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidInput`] when the symbol count leaves a single
/// symbol in the last quartet, which no encoder produces, or when the fill
/// already present does not match the symbol count.
///
/// # Example
///
/// ```
/// use jwt_base::{pad, Base64Url};
///
/// assert_eq!(pad::<Base64Url>("TQ").unwrap(), "TQ%3d%3d");
/// assert_eq!(pad::<Base64Url>("TWE").unwrap(), "TWE%3d");
/// assert_eq!(pad::<Base64Url>("TWE%3d").unwrap(), "TWE%3d");
/// assert!(pad::<Base64Url>("TWFuT").is_err());
/// assert!(pad::<Base64Url>("TQ%3d").is_err());
/// ```
pub fn pad<A: Alphabet>(base: &str) -> Result<String, Base64Error> {
    let symbols = trim::<A>(base);
    let present = (base.len() - symbols.len()) / A::FILL.len();
    let fill_count = match symbols.len() % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        _ => {
            log::trace!("{}: cannot pad {} symbols", A::NAME, symbols.len());
            return Err(Base64Error::InvalidInput);
        }
    };

    if present != 0 && present != fill_count {
        log::trace!(
            "{}: {} symbols carry {} fill units, expected {}",
            A::NAME,
            symbols.len(),
            present,
            fill_count
        );
        return Err(Base64Error::InvalidInput);
    }

    let mut out = String::with_capacity(symbols.len() + fill_count * A::FILL.len());
    out.push_str(symbols);
    for _ in 0..fill_count {
        out.push_str(A::FILL);
    }
    Ok(out)
}

/// Encodes `bin` without trailing fill markers.
pub fn encode_unpadded<A: Alphabet>(bin: &[u8]) -> String {
    let mut out = encode::<A>(bin);
    let length = trim::<A>(&out).len();
    out.truncate(length);
    out
}

/// Decodes text whose fill markers may have been stripped.
///
/// Fill that is present must be complete; partial or excess fill is rejected
/// just as [`decode`] rejects it.
///
/// # Errors
///
/// Fails with [`Base64Error::InvalidInput`] under the same conditions as
/// [`pad`] and [`decode`].
pub fn decode_unpadded<A: Alphabet>(base: &str) -> Result<Vec<u8>, Base64Error> {
    decode::<A>(&pad::<A>(base)?)
}
