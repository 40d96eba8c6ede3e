use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

use crate::ResolvedUser;

/// Highlight classes handed out to contributors by list position.
pub const PALETTE: [&str; 6] = [
    "user-highlight-1",
    "user-highlight-2",
    "user-highlight-3",
    "user-highlight-4",
    "user-highlight-5",
    "user-highlight-6",
];

static SPACE_BEFORE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s+)(<span class="author-token[^>]*>)"#).expect("author marker pattern")
});

/// Palette class for the contributor at `position`; wraps after six.
pub fn palette_class(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Turns authorship markers into titled, colored markers.
///
/// Each user's markers are substituted independently over the whole fragment,
/// in list order. A user without a resolved id has nothing to match but still
/// occupies its palette slot, so colors stay aligned with the legend.
pub fn highlight_authors(html: &str, users: &[ResolvedUser]) -> String {
    // Whitespace in front of a marker goes inside it so the background is continuous.
    let mut html = SPACE_BEFORE_MARKER.replace_all(html, "$2$1").into_owned();
    for (position, user) in users.iter().enumerate() {
        if let Some(userid) = user.userid {
            html = style_author_markers(&html, userid, &user.name, palette_class(position));
        }
    }
    html
}

fn style_author_markers(html: &str, userid: u64, name: &str, color: &str) -> String {
    let marker = format!(r#"<span class="author-token token-authorid-{userid}"#);
    let styled = format!(
        r#"<span title="{}" class="author-token token-authorid-{userid} {color}"#,
        encode_double_quoted_attribute(name)
    );

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(idx) = rest.find(&marker) {
        let end = idx + marker.len();
        out.push_str(&rest[..idx]);
        // `token-authorid-7` must not match `token-authorid-70`.
        if matches!(rest.as_bytes().get(end), Some(b'"' | b' ')) {
            out.push_str(&styled);
        } else {
            out.push_str(&marker);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
