/// The resource path: everything before the first `?`, or the whole input.
pub fn canonical_path(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _query)| path)
}
