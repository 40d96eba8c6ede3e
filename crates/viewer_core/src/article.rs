/// The article being viewed. Supplied by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub language: String,
    pub project: String,
    /// Page title, already escaped for use in a query string.
    pub title: String,
    /// Canonical page URL, used for the "view on wiki" link.
    pub url: String,
}

impl Article {
    pub fn new(
        language: impl Into<String>,
        project: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            project: project.into(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// Root for resolving relative links, e.g. `https://en.wikipedia.org`.
    pub fn wiki_url(&self) -> String {
        format!("https://{}.{}.org", self.language, self.project)
    }

    /// Authorship coloring only covers English Wikipedia.
    pub fn is_en_wikipedia(&self) -> bool {
        self.language == "en" && self.project == "wikipedia"
    }
}

/// A dashboard-side contributor. The `userid` belongs to the dashboard and
/// does not necessarily match the wiki's own user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub userid: String,
}

impl User {
    pub fn new(name: impl Into<String>, userid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            userid: userid.into(),
        }
    }
}

/// A contributor as reported by the wiki's user-query API.
///
/// `userid` is `None` when the wiki has no account with that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub name: String,
    pub userid: Option<u64>,
}

impl ResolvedUser {
    pub fn new(name: impl Into<String>, userid: u64) -> Self {
        Self {
            name: name.into(),
            userid: Some(userid),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            userid: None,
        }
    }
}
