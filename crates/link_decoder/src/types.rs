use std::fmt;

/// Pipeline stage a token passes through on its way to a canonical URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Base64,
    Text,
    Percent,
    Canonical,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecodeStage::Base64 => "base64",
            DecodeStage::Text => "text",
            DecodeStage::Percent => "percent",
            DecodeStage::Canonical => "canonical",
        };
        f.write_str(label)
    }
}

/// Only the base64 step can fail; every later stage is lossy but total.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{message}")]
    Base64 { message: String },
}

impl DecodeError {
    pub fn stage(&self) -> DecodeStage {
        match self {
            DecodeError::Base64 { .. } => DecodeStage::Base64,
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::Base64 {
            message: err.to_string(),
        }
    }
}

/// Every representation of a token produced by one successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLink {
    /// Base64-decoded text, still percent-encoded.
    pub stage1: String,
    /// Plain URL after percent-decoding.
    pub stage2: String,
    /// `stage2` up to (excluding) the first `?`.
    pub canonical: String,
    /// Space-separated hex code points of `canonical`.
    pub hex_dump: String,
    /// Whether invalid UTF-8 had to be replaced with U+FFFD along the way.
    pub lossy: bool,
}
