use encoding_rs::UTF_8;

use decoder_logging::decoder_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub had_replacements: bool,
}

/// Decode bytes as UTF-8, substituting U+FFFD for malformed sequences. Never fails.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let (text, had_replacements) = UTF_8.decode_without_bom_handling(bytes);
    if had_replacements {
        decoder_warn!(
            "decoded payload is not valid UTF-8; replaced malformed sequences in {} bytes",
            bytes.len()
        );
    }
    DecodedText {
        text: text.into_owned(),
        had_replacements,
    }
}
