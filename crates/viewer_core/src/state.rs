use crate::highlight::highlight_authors;
use crate::{Article, ResolvedUser, User, ViewerConfig};

/// The three independent remote sources feeding the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    ParsedArticle,
    Authorship,
    UserIds,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::ParsedArticle, Source::Authorship, Source::UserIds];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Request errored or the body could not be decoded.
    Transport,
    /// Response arrived but carried no usable content.
    EmptyPayload,
}

/// Per-source progress. Only moves forward; `Succeeded` and `Failed` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    NotRequested,
    InFlight,
    Succeeded,
    Failed(FailureCause),
}

impl FetchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceStatuses {
    pub parsed_article: FetchStatus,
    pub authorship: FetchStatus,
    pub user_ids: FetchStatus,
}

impl SourceStatuses {
    pub fn get(&self, source: Source) -> FetchStatus {
        match source {
            Source::ParsedArticle => self.parsed_article,
            Source::Authorship => self.authorship,
            Source::UserIds => self.user_ids,
        }
    }

    fn get_mut(&mut self, source: Source) -> &mut FetchStatus {
        match source {
            Source::ParsedArticle => &mut self.parsed_article,
            Source::Authorship => &mut self.authorship,
            Source::UserIds => &mut self.user_ids,
        }
    }
}

/// Progressively refined renderings of the article.
///
/// `colored` is always link-rewritten; `highlighted` only exists while both
/// `colored` and the resolved user list do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlLayers {
    pub plain: Option<String>,
    pub colored: Option<String>,
    pub highlighted: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlLayer {
    Plain,
    Colored,
    Highlighted,
}

impl HtmlLayers {
    /// Most refined layer available: highlighted, then colored, then plain.
    pub fn best(&self) -> Option<(HtmlLayer, &str)> {
        if let Some(html) = self.highlighted.as_deref() {
            return Some((HtmlLayer::Highlighted, html));
        }
        if let Some(html) = self.colored.as_deref() {
            return Some((HtmlLayer::Colored, html));
        }
        self.plain.as_deref().map(|html| (HtmlLayer::Plain, html))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerState {
    article: Article,
    users: Vec<User>,
    config: ViewerConfig,
    open: bool,
    statuses: SourceStatuses,
    layers: HtmlLayers,
    page_id: Option<u64>,
    resolved_users: Option<Vec<ResolvedUser>>,
    dirty: bool,
}

impl ViewerState {
    pub fn new(article: Article, users: Vec<User>) -> Self {
        Self::with_config(article, users, ViewerConfig::default())
    }

    pub fn with_config(article: Article, users: Vec<User>, config: ViewerConfig) -> Self {
        Self {
            article,
            users,
            config,
            open: false,
            statuses: SourceStatuses::default(),
            layers: HtmlLayers::default(),
            page_id: None,
            resolved_users: None,
            dirty: false,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn status(&self, source: Source) -> FetchStatus {
        self.statuses.get(source)
    }

    pub fn statuses(&self) -> SourceStatuses {
        self.statuses
    }

    pub fn layers(&self) -> &HtmlLayers {
        &self.layers
    }

    pub fn page_id(&self) -> Option<u64> {
        self.page_id
    }

    pub fn resolved_users(&self) -> Option<&[ResolvedUser]> {
        self.resolved_users.as_deref()
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.dirty = true;
        }
    }

    /// Moves `source` from `NotRequested` to `InFlight`. Returns false if it
    /// was already requested.
    pub(crate) fn begin(&mut self, source: Source) -> bool {
        let status = self.statuses.get_mut(source);
        if *status != FetchStatus::NotRequested {
            return false;
        }
        *status = FetchStatus::InFlight;
        self.dirty = true;
        true
    }

    pub(crate) fn fail(&mut self, source: Source, cause: FailureCause) {
        self.finish(source, FetchStatus::Failed(cause));
    }

    pub(crate) fn store_plain(&mut self, page_id: u64, html: String) {
        self.page_id = Some(page_id);
        self.layers.plain = Some(html);
        self.finish(Source::ParsedArticle, FetchStatus::Succeeded);
    }

    pub(crate) fn store_colored(&mut self, html: String) {
        self.layers.colored = Some(html);
        self.finish(Source::Authorship, FetchStatus::Succeeded);
        self.refresh_highlight();
    }

    pub(crate) fn store_resolved_users(&mut self, users: Vec<ResolvedUser>) {
        self.resolved_users = Some(users);
        self.finish(Source::UserIds, FetchStatus::Succeeded);
        self.refresh_highlight();
    }

    fn finish(&mut self, source: Source, status: FetchStatus) {
        *self.statuses.get_mut(source) = status;
        self.dirty = true;
    }

    fn refresh_highlight(&mut self) {
        if let (Some(colored), Some(users)) = (&self.layers.colored, &self.resolved_users) {
            self.layers.highlighted = Some(highlight_authors(colored, users));
        }
    }
}
