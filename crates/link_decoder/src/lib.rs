//! Link decoder: turns base64-wrapped, percent-encoded CDN link tokens back into URLs.
mod canonical;
mod cdn;
mod decode;
mod hexdump;
mod percent;
mod pipeline;
mod report;
mod sample;
mod token;
mod types;

pub use canonical::canonical_path;
pub use cdn::{clean_cdn_url, find_clean_cdn_url, CDN_PATH_MARKER};
pub use decode::{decode_text, DecodedText};
pub use hexdump::hex_dump;
pub use percent::percent_decode;
pub use pipeline::{decode_link, LinkDecoder};
pub use report::{render_report, BANNER};
pub use sample::{SAMPLE_PUBLIC_URL, SAMPLE_TOKEN};
pub use token::{decode_token_bytes, pad_token};
pub use types::{DecodeError, DecodeStage, DecodedLink};
