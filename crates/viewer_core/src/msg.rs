use crate::{ResolvedUser, Source};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked to show the article.
    RevealClicked,
    /// User hid the article, via the button or by interacting outside it.
    DismissClicked,
    /// A remote source answered with a decodable response.
    FetchSucceeded(Payload),
    /// A remote source could not be fetched or decoded.
    FetchFailed { source: Source },
}

/// Decoded response body of one remote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    ParsedArticle { page_id: u64, html: String },
    /// `html` is `None` when the service answered without markup.
    Authorship { html: Option<String> },
    UserIds(Vec<ResolvedUser>),
}

impl Payload {
    pub fn source(&self) -> Source {
        match self {
            Payload::ParsedArticle { .. } => Source::ParsedArticle,
            Payload::Authorship { .. } => Source::Authorship,
            Payload::UserIds(_) => Source::UserIds,
        }
    }
}
