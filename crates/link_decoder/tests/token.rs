use link_decoder::{decode_token_bytes, pad_token, DecodeStage};
use pretty_assertions::assert_eq;

#[test]
fn padding_adds_exactly_the_missing_characters() {
    for (raw, added) in [("YWJj", 0), ("YWI", 1), ("YQ", 2), ("YWJjZ", 3)] {
        let padded = pad_token(raw);
        assert_eq!(padded.len() % 4, 0, "{raw} padded to {padded}");
        assert_eq!(padded.len() - raw.len(), added, "{raw} padded to {padded}");
        assert!(padded[raw.len()..].chars().all(|c| c == '='));
    }
}

#[test]
fn already_padded_token_is_untouched() {
    assert_eq!(pad_token("YSUyRmI="), "YSUyRmI=");
}

#[test]
fn decodes_standard_token() {
    let bytes = decode_token_bytes(&pad_token("YSUyRmI")).unwrap();
    assert_eq!(bytes, b"a%2Fb");
}

#[test]
fn decodes_url_safe_token() {
    let bytes = decode_token_bytes(&pad_token("-_-_")).unwrap();
    assert_eq!(bytes, vec![0xfb_u8, 0xff, 0xbf]);
}

#[test]
fn rejects_symbols_outside_the_alphabet() {
    let err = decode_token_bytes(&pad_token("!!!!")).unwrap_err();
    assert_eq!(err.stage(), DecodeStage::Base64);
    assert!(!err.to_string().is_empty());
}

#[test]
fn rejects_single_symbol_final_quantum() {
    assert!(decode_token_bytes(&pad_token("YWJjZ")).is_err());
}
