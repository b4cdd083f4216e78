//! Standard base64 encoding function.

use crate::alphabet::Base64;
use crate::encode::encode;

/// Encodes a byte slice to a standard base64 string.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with `=` fill.
///
/// # Example
///
/// ```
/// use jwt_base::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    encode::<Base64>(uint8)
}
