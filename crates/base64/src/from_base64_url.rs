//! URL-safe base64 decoding function.

use crate::alphabet::Base64Url;
use crate::decode::decode;
use crate::Base64Error;

/// Decodes a URL-safe base64 string filled with `%3d`.
///
/// Use [`decode_unpadded`](crate::decode_unpadded) for segments whose fill
/// has been stripped.
///
/// # Example
///
/// ```
/// use jwt_base::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ%3d").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode::<Base64Url>(encoded)
}
