//! Standard base64 decoding function.

use crate::alphabet::Base64;
use crate::decode::decode;
use crate::Base64Error;

/// Decodes a standard base64 string.
///
/// # Example
///
/// ```
/// use jwt_base::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode::<Base64>(encoded)
}
