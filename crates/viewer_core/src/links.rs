use std::sync::LazyLock;

use regex::{Captures, Regex};

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\b([^>]*?\s)href="([^"]*)""#).expect("anchor href pattern")
});

/// Makes relative wiki links absolute against `wiki_url`.
///
/// The parse API returns the same markup as the article on the wiki itself, so
/// links to other pages are relative and would break once embedded elsewhere.
/// Hrefs starting with `#` point at footnotes inside the fragment and hrefs
/// starting with `http` are already absolute; both stay untouched, which also
/// makes the rewrite idempotent.
pub fn rewrite_links(html: &str, wiki_url: &str) -> String {
    let base = wiki_url.trim_end_matches('/');
    ANCHOR_HREF
        .replace_all(html, |caps: &Captures| {
            let attrs = &caps[1];
            let href = &caps[2];
            if href.is_empty() || href.starts_with('#') || href.starts_with("http") {
                return caps[0].to_string();
            }
            let separator = if href.starts_with('/') { "" } else { "/" };
            format!(r#"<a{attrs}href="{base}{separator}{href}""#)
        })
        .into_owned()
}
