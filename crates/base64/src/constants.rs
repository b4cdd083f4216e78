/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array.
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Fill marker of the standard alphabet.
pub const PAD: &str = "=";

/// Fill marker of the URL-safe alphabet: a percent-encoded `=`.
pub const PAD_URL: &str = "%3d";

/// A valid encoding never ends in more than two fill units.
pub const MAX_FILL_UNITS: usize = 2;

/// Reverse-table marker for bytes outside the alphabet.
pub const INVALID: u8 = 0xFF;
