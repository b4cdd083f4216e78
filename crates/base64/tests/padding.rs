//! Tests for fill trimming and restoration.

use jwt_base::{
    encode, encode_unpadded, pad, trim, Base64, Base64Error, Base64Url, ALPHABET, ALPHABET_URL,
};

#[test]
fn trim_then_pad_restores_encoder_output() {
    for n in 0..=12 {
        let blob: Vec<u8> = (0..n as u8).collect();

        let standard = encode::<Base64>(&blob);
        assert_eq!(pad::<Base64>(trim::<Base64>(&standard)).unwrap(), standard);

        let url = encode::<Base64Url>(&blob);
        assert_eq!(pad::<Base64Url>(trim::<Base64Url>(&url)).unwrap(), url);
        assert_eq!(trim::<Base64Url>(&url), encode_unpadded::<Base64Url>(&blob));
    }
}

#[test]
fn trimmed_text_only_holds_symbols() {
    let blob = b"segments travel without fill";
    for c in encode_unpadded::<Base64>(blob).chars() {
        assert!(ALPHABET.contains(c));
    }
    for c in encode_unpadded::<Base64Url>(blob).chars() {
        assert!(ALPHABET_URL.contains(c));
    }
}

#[test]
fn trim_only_strips_its_own_fill() {
    assert_eq!(trim::<Base64>("TQ%3d%3d"), "TQ%3d%3d");
    assert_eq!(trim::<Base64Url>("TQ=="), "TQ==");
}

#[test]
fn pad_rejects_impossible_lengths() {
    for text in ["A", "TWFuA", "TWFuTWFuA%3d"] {
        assert_eq!(pad::<Base64Url>(text), Err(Base64Error::InvalidInput));
    }
}

#[test]
fn pad_rejects_partial_or_excess_fill() {
    for text in ["TQ=", "TQ======", "TWE==", "TWFu="] {
        assert_eq!(pad::<Base64>(text), Err(Base64Error::InvalidInput));
        assert_eq!(
            jwt_base::decode_unpadded::<Base64>(text),
            Err(Base64Error::InvalidInput)
        );
    }
}
