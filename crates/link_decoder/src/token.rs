use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::types::DecodeError;

/// Standard alphabet, padding optional, trailing bits in the last quantum ignored.
pub(crate) const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Map URL-safe symbols onto the standard alphabet and pad to a multiple of 4.
pub fn pad_token(raw: &str) -> String {
    let mut padded: String = raw
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let remainder = padded.len() % 4;
    if remainder != 0 {
        padded.extend(std::iter::repeat('=').take(4 - remainder));
    }
    padded
}

/// Strict base64 decode of an already padded token.
pub fn decode_token_bytes(padded: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(LENIENT_STANDARD.decode(padded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_safe_symbols_are_mapped() {
        assert_eq!(pad_token("-_-_"), "+/+/");
    }

    #[test]
    fn trailing_bits_are_tolerated() {
        // "YWJ" carries two stray low bits in its last symbol when read strictly.
        assert_eq!(decode_token_bytes("YWJ=").unwrap(), b"ab");
    }
}
