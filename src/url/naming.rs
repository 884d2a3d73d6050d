use std::collections::HashSet;
use url::Url;

/// Derives the file-system name used for a page's persisted artifacts
///
/// The URL path is trimmed of surrounding slashes and inner slashes become
/// underscores. A query string, if present, is appended after an
/// underscore. Any character outside `[A-Za-z0-9._-]` is replaced by `_`.
/// An empty result becomes `index`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_harvest::url::page_name;
///
/// let url = Url::parse("https://example.com/about/team/").unwrap();
/// assert_eq!(page_name(&url), "about_team");
///
/// let url = Url::parse("https://example.com/").unwrap();
/// assert_eq!(page_name(&url), "index");
/// ```
pub fn page_name(url: &Url) -> String {
    let mut name = sanitize(url.path().trim_matches('/'));

    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        if !name.is_empty() {
            name.push('_');
        }
        name.push_str(&sanitize(query));
    }

    if name.is_empty() {
        "index".to_string()
    } else {
        name
    }
}

/// Page names handed out during one run
///
/// Distinct pages can derive the same [`page_name`] (`/about` and
/// `/about/`, or the root of two hosts). Later claimants get a numeric
/// suffix, so every page keeps its own artifact files.
#[derive(Debug, Clone, Default)]
pub struct PageNames {
    used: HashSet<String>,
}

impl PageNames {
    /// Returns a name for `url` not handed out before in this run
    pub fn claim(&mut self, url: &Url) -> String {
        let base = page_name(url);
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// Final path segment of an asset URL, or `fallback` when it is empty
pub fn asset_basename(url: &Url, fallback: &str) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(sanitize)
        .unwrap_or_default();

    if segment.is_empty() || segment == "." || segment == ".." {
        fallback.to_string()
    } else {
        segment
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' => '_',
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => c,
            _ => '_',
        })
        .collect()
}
