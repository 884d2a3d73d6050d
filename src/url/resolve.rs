use crate::{HarvestError, Result};
use url::Url;

/// Resolves an authored asset reference against the page it appeared on
///
/// Relative, root-relative, protocol-relative and absolute references are
/// all accepted. The result always carries a scheme and host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_harvest::url::resolve_reference;
///
/// let page = Url::parse("https://example.com/blog/post").unwrap();
/// let image = resolve_reference(&page, "/a.jpg").unwrap();
/// assert_eq!(image.as_str(), "https://example.com/a.jpg");
/// ```
pub fn resolve_reference(base: &Url, reference: &str) -> Result<Url> {
    let reference = reference.trim();

    base.join(reference)
        .ok()
        .filter(|url| url.has_host())
        .ok_or_else(|| HarvestError::InvalidReference {
            reference: reference.to_string(),
            base: base.to_string(),
        })
}

/// Resolves an anchor href to a followable page URL
///
/// Returns None if the link should not be followed:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links (same page anchors)
/// - non-HTTP(S) URLs after resolution
///
/// The fragment of the resolved URL is removed.
pub fn resolve_page_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    url.set_fragment(None);
    Some(url)
}

/// Canonical key for a page in the visited registry
///
/// Fragments never select a different document, so they are dropped.
pub fn page_key(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}
