//! URL-safe base64 encoding function.

use crate::alphabet::Base64Url;
use crate::encode::encode;

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and fills with the percent-encoded marker `%3d`.
///
/// # Example
///
/// ```
/// use jwt_base::to_base64_url;
///
/// let encoded = to_base64_url(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ%3d");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    encode::<Base64Url>(uint8)
}
