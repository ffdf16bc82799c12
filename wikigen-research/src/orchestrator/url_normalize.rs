//! URL normalisation: domain extraction and deduplication keys.
//!
//! Both functions are total. A URL that cannot be parsed never fails the
//! pipeline; it gets the [`UNKNOWN_DOMAIN`] sentinel instead.

use url::Url;

/// Domain assigned to references whose URL has no parseable host.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Extract the normalised hostname of a URL.
///
/// The host is lowercased and a leading `www.` is removed. Anything without
/// a host (unparseable input, `mailto:` links, etc.) yields [`UNKNOWN_DOMAIN`].
///
/// # Examples
///
/// ```
/// use wikigen_research::orchestrator::url_normalize::extract_domain;
///
/// assert_eq!(extract_domain("https://WWW.Example.com/path/"), "example.com");
/// assert_eq!(extract_domain("not a url"), "unknown");
/// ```
pub fn extract_domain(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw.trim()) else {
        return UNKNOWN_DOMAIN.to_string();
    };
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {
            let host = host.to_lowercase();
            host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
        }
        _ => UNKNOWN_DOMAIN.to_string(),
    }
}

/// Build the identity key used to detect duplicate references.
///
/// The URL is lowercased and exactly one trailing `/` is removed, so
/// `https://A.com/x/` and `https://a.com/x` collide but `…/x//` does not
/// collapse to `…/x`.
///
/// # Examples
///
/// ```
/// use wikigen_research::orchestrator::url_normalize::dedup_key;
///
/// assert_eq!(dedup_key("https://Example.COM/Page/"), dedup_key("https://example.com/page"));
/// ```
pub fn dedup_key(url: &str) -> String {
    let lowered = url.to_lowercase();
    match lowered.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}
