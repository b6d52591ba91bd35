use std::fmt::Write;

use crate::cdn::CDN_PATH_MARKER;
use crate::sample::SAMPLE_PUBLIC_URL;
use crate::types::{DecodeError, DecodedLink};

pub const BANNER: &str = "=== Testing with a direct download URL from RapidAPI response ===";

/// Illustrative only: printed for a human to copy into the transcription route.
const CDN_SNIPPET: &str = r#"
    // For TikTok videos that have direct CDN URLs
    if (isTikTok) {
        // Try to find a direct CDN URL in the links
        for (const linkObj of links) {
            if (linkObj.link && linkObj.link.includes('{marker}')) {
                // Extract the clean CDN URL without parameters
                const cdnUrl = new URL(linkObj.link);
                const cleanCdnUrl = cdnUrl.origin + cdnUrl.pathname;
                audioUrlToTranscribe = cleanCdnUrl;
                console.log(`[API /transcribe] Using clean TikTok CDN URL: ${audioUrlToTranscribe}`);
                break;
            }
        }
    }
    "#;

/// Full console text for one decode attempt. A failure prints only the error line.
pub fn render_report(outcome: &Result<DecodedLink, DecodeError>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    match outcome {
        Ok(link) => {
            write_stages(&mut out, link);
            write_recommendations(&mut out);
        }
        Err(err) => {
            let _ = writeln!(out, "Error: {err}");
        }
    }
    out
}

fn write_stages(out: &mut String, link: &DecodedLink) {
    let _ = writeln!(
        out,
        "\nBase64 decoded URL (still URL-encoded):\n{}",
        link.stage1
    );
    let _ = writeln!(out, "\nFully decoded TikTok CDN URL:\n{}", link.stage2);
    let _ = writeln!(out, "\n=== SOLUTION: Direct CDN URL to use ===");
    let _ = writeln!(
        out,
        "Clean TikTok CDN URL (without params): {}",
        link.canonical
    );
    let _ = writeln!(out, "\nHex representation of the clean URL:\n{}", link.hex_dump);
}

fn write_recommendations(out: &mut String) {
    let _ = writeln!(out, "\n=== Recommendation for /api/transcribe/route.ts fix ===");
    let _ = writeln!(
        out,
        "1. Update the function to use the TikTok CDN URL directly without parameters:"
    );
    let _ = writeln!(
        out,
        "   For TikTok videos, identify direct CDN URLs and use them without parameters"
    );
    let _ = writeln!(out, "   Example implementation:");
    let _ = writeln!(out, "{}", CDN_SNIPPET.replace("{marker}", CDN_PATH_MARKER));

    let _ = writeln!(out, "\n2. Alternative Solution: Use direct video URL");
    let _ = writeln!(out, "   Use the original TikTok URL directly with AssemblyAI");
    let _ = writeln!(
        out,
        "   They support TikTok public URLs: {SAMPLE_PUBLIC_URL}"
    );
}
