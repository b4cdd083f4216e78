//! Base64 encoding and decoding for compact token segments.
//!
//! This crate provides a single base64 codec parameterized by an [`Alphabet`]:
//! - [`Base64`]: standard alphabet with `=` fill
//! - [`Base64Url`]: URL-safe alphabet with the percent-encoded `%3d` fill
//! - unpadded helpers for token segments that travel without fill
//!
//! Decoding is strict: excess fill, a length that does not form whole
//! quartets, and characters outside the alphabet are all rejected with
//! [`Base64Error::InvalidInput`].
//!
//! # Example
//!
//! ```
//! use jwt_base::{decode, encode, Base64Url};
//!
//! let data = b"hello world";
//! let encoded = encode::<Base64Url>(data);
//! let decoded = decode::<Base64Url>(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod from_base64;
mod from_base64_url;
mod padding;
mod to_base64;
mod to_base64_url;

use thiserror::Error;

pub use alphabet::{reverse_table, validate, Alphabet, Base64, Base64Url};
pub use constants::{
    ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, INVALID, MAX_FILL_UNITS, PAD,
    PAD_URL,
};
pub use decode::{decode, decode_bytes, decoded_len_estimate};
pub use encode::{encode, encode_into, encoded_len, encoded_units};
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use padding::{decode_unpadded, encode_unpadded, pad, trim};
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// Excess fill, a length that is not a whole number of quartets, or a
    /// character outside the alphabet.
    #[error("INVALID_BASE64_INPUT")]
    InvalidInput,
}
