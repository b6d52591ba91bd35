use std::fmt::Write;

/// Space-separated lowercase hex code points, one token per character.
pub fn hex_dump(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(&mut out, "{:02x}", c as u32);
    }
    out
}
