//! Query URLs for the three remote sources.
//!
//! Titles and usernames are substituted verbatim; callers pass them already
//! escaped for a query string.

use crate::{Article, User};

/// MediaWiki parse API request for the rendered article, without edit-section links.
pub fn article_query_url(article: &Article) -> String {
    format!(
        "{}/w/api.php?action=parse&disableeditsection=true&format=json&page={}",
        article.wiki_url(),
        article.title
    )
}

/// Authorship-coloring request. The service is keyed by title alone and only
/// knows English Wikipedia.
pub fn authorship_color_url(endpoint: &str, article: &Article) -> String {
    format!("{endpoint}?title={}", article.title)
}

/// MediaWiki user-query request resolving usernames to wiki user ids.
pub fn user_lookup_url(article: &Article, users: &[User]) -> String {
    let names = users
        .iter()
        .map(|user| user.name.as_str())
        .collect::<Vec<_>>()
        .join("|");
    format!(
        "{}/w/api.php?action=query&list=users&format=json&ususers={names}",
        article.wiki_url()
    )
}
