use url::Url;

/// Returns true if two URLs belong to the same site
///
/// Hosts are compared case-insensitively together with the effective port.
/// The scheme is ignored so that `http` and `https` variants of one site
/// are treated alike.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_harvest::url::same_site;
///
/// let a = Url::parse("https://example.com/a").unwrap();
/// let b = Url::parse("https://EXAMPLE.com/b").unwrap();
/// assert!(same_site(&a, &b));
/// ```
pub fn same_site(a: &Url, b: &Url) -> bool {
    let host_a = a.host_str().map(|h| h.to_lowercase());
    let host_b = b.host_str().map(|h| h.to_lowercase());

    // `port()` is None for a scheme's default port, so 80 and 443 collapse
    host_a.is_some() && host_a == host_b && a.port() == b.port()
}
