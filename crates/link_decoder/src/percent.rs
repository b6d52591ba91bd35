use percent_encoding::percent_decode_str;

/// Decode `%XX` escapes; malformed escapes are kept verbatim and invalid UTF-8
/// in the decoded bytes becomes U+FFFD.
pub fn percent_decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// True when the escapes in `text` decode to valid UTF-8.
pub(crate) fn is_lossless(text: &str) -> bool {
    percent_decode_str(text).decode_utf8().is_ok()
}
