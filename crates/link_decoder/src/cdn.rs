use url::Url;

/// Path fragment that identifies a TikTok CDN video download link.
pub const CDN_PATH_MARKER: &str = "tiktok.com/video/tos/";

/// Strip query and fragment from a TikTok CDN link, keeping origin and path.
///
/// Returns `None` for links that are not CDN links or do not parse as absolute URLs.
pub fn clean_cdn_url(link: &str) -> Option<String> {
    if !link.contains(CDN_PATH_MARKER) {
        return None;
    }
    let parsed = Url::parse(link).ok()?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(format!("{}{}", origin.ascii_serialization(), parsed.path()))
}

/// The cleaned form of the first CDN link among `links`.
pub fn find_clean_cdn_url<'a, I>(links: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    links.into_iter().find_map(clean_cdn_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_query_and_fragment() {
        let link = "https://v16-webapp-prime.tiktok.com/video/tos/no1a/abc/?a=1988&bti=x#frag";
        assert_eq!(
            clean_cdn_url(link).as_deref(),
            Some("https://v16-webapp-prime.tiktok.com/video/tos/no1a/abc/")
        );
    }

    #[test]
    fn ignores_non_cdn_links() {
        assert_eq!(
            clean_cdn_url("https://www.tiktok.com/@aronsogi/video/7474298674303028502"),
            None
        );
        assert_eq!(clean_cdn_url("not a url tiktok.com/video/tos/x"), None);
    }

    #[test]
    fn keeps_explicit_non_default_port() {
        let link = "https://cdn.tiktok.com:8443/video/tos/x?y=1";
        assert_eq!(
            clean_cdn_url(link).as_deref(),
            Some("https://cdn.tiktok.com:8443/video/tos/x")
        );
    }

    #[test]
    fn picks_first_matching_link() {
        let links = [
            "https://example.com/video.mp4",
            "https://v19.tiktok.com/video/tos/first/?sig=1",
            "https://v16.tiktok.com/video/tos/second/?sig=2",
        ];
        assert_eq!(
            find_clean_cdn_url(links).as_deref(),
            Some("https://v19.tiktok.com/video/tos/first/")
        );
        assert_eq!(find_clean_cdn_url(["https://example.com/"]), None);
    }
}
