use decoder_logging::{decoder_debug, decoder_trace};

use crate::canonical::canonical_path;
use crate::decode::decode_text;
use crate::hexdump::hex_dump;
use crate::percent::{is_lossless, percent_decode};
use crate::token::{decode_token_bytes, pad_token};
use crate::types::{DecodeError, DecodedLink};

/// Turns an obfuscated link token into its decoded stages.
///
/// Each stage is derived from the previous one; nothing is kept between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkDecoder;

impl LinkDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, raw: &str) -> Result<DecodedLink, DecodeError> {
        let padded = pad_token(raw);
        decoder_trace!(
            "padded token from {} to {} characters",
            raw.len(),
            padded.len()
        );

        let bytes = decode_token_bytes(&padded)?;
        decoder_debug!("base64 stage produced {} bytes", bytes.len());

        let text = decode_text(&bytes);
        let stage2 = percent_decode(&text.text);
        let lossy = text.had_replacements || !is_lossless(&text.text);
        decoder_debug!(
            "percent stage produced {} characters (lossy: {})",
            stage2.chars().count(),
            lossy
        );

        let canonical = canonical_path(&stage2).to_string();
        let hex_dump = hex_dump(&canonical);

        Ok(DecodedLink {
            stage1: text.text,
            stage2,
            canonical,
            hex_dump,
            lossy,
        })
    }
}

/// Convenience wrapper around [`LinkDecoder::decode`].
pub fn decode_link(raw: &str) -> Result<DecodedLink, DecodeError> {
    LinkDecoder::new().decode(raw)
}
