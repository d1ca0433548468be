/// Hash prefix the platform uses for animated (GIF) resources.
pub const ANIMATED_HASH_PREFIX: &str = "a_";

/// Pick the URL for a resource hash and optionally add a `size` query.
///
/// - no hash, non-empty `no_resource` → `no_resource`
/// - no hash, no fallback → empty string (never size-suffixed)
/// - hash starting with `a_` and an animated template → `animated_url`
/// - anything else → `static_url`
///
/// `size` is appended as `?size=<size>` when non-empty and is not validated.
pub fn resolve_url(
    hash: Option<&str>,
    no_resource: Option<&str>,
    static_url: &str,
    animated_url: Option<&str>,
    size: &str,
) -> String {
    let hash = hash.unwrap_or_default();
    let no_resource = no_resource.filter(|url| !url.is_empty());

    let url = if hash.is_empty() {
        match no_resource {
            Some(url) => url,
            None => return String::new(),
        }
    } else {
        match animated_url {
            Some(url) if hash.starts_with(ANIMATED_HASH_PREFIX) => url,
            _ => static_url,
        }
    };

    if size.is_empty() {
        url.to_string()
    } else {
        format!("{url}?size={size}")
    }
}
