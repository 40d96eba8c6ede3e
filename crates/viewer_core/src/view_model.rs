use crate::highlight::palette_class;
use crate::{FailureCause, FetchStatus, HtmlLayer, MessageKey, Source, Translator, ViewerState};

const SHOW_BUTTON_CLASS: &str = "button dark small";
const SHOW_BUTTON_CLASS_LARGE: &str = "button dark";
const HIDE_BUTTON_CLASS: &str = "button dark small pull-right";

/// Everything the presentation layer needs to draw the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerViewModel {
    /// Reveal was requested and not dismissed since.
    pub open: bool,
    /// Open and the article itself has arrived.
    pub visible: bool,
    pub title: String,
    pub article_url: String,
    pub html: Option<String>,
    pub layer: Option<HtmlLayer>,
    pub status: Option<StatusBanner>,
    pub legend: Legend,
    pub button_label: String,
    pub button_class: &'static str,
    pub view_on_wiki_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Legend {
    /// Not an English Wikipedia article; there is nothing to attribute.
    Hidden,
    Loading { heading: String },
    Users {
        heading: String,
        entries: Vec<LegendEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: &'static str,
}

impl ViewerState {
    pub fn view(&self, translator: &dyn Translator) -> ViewerViewModel {
        let best = self.layers().best();
        ViewerViewModel {
            open: self.is_open(),
            visible: self.is_open() && self.status(Source::ParsedArticle) == FetchStatus::Succeeded,
            title: self.article().title.clone(),
            article_url: self.article().url.clone(),
            html: best.map(|(_, html)| html.to_string()),
            layer: best.map(|(layer, _)| layer),
            status: self.status_banner(translator),
            legend: self.legend(translator),
            button_label: self.button_label(translator),
            button_class: self.button_class(),
            view_on_wiki_label: translator.translate(MessageKey::ViewOnWiki),
        }
    }

    fn status_banner(&self, translator: &dyn Translator) -> Option<StatusBanner> {
        if !self.article().is_en_wikipedia() || self.layers().highlighted.is_some() {
            return None;
        }
        let (kind, key) = match self.status(Source::Authorship) {
            FetchStatus::Failed(FailureCause::EmptyPayload) => {
                (StatusKind::Failed, MessageKey::AuthorshipFailed)
            }
            _ => (StatusKind::Loading, MessageKey::AuthorshipLoading),
        };
        Some(StatusBanner {
            kind,
            message: translator.translate(key),
        })
    }

    fn legend(&self, translator: &dyn Translator) -> Legend {
        if let Some(users) = self.resolved_users() {
            let entries = users
                .iter()
                .enumerate()
                .map(|(position, user)| LegendEntry {
                    name: user.name.clone(),
                    color: palette_class(position),
                })
                .collect();
            return Legend::Users {
                heading: translator.translate(MessageKey::EditsBy),
                entries,
            };
        }
        if self.article().is_en_wikipedia() {
            return Legend::Loading {
                heading: translator.translate(MessageKey::EditsBy),
            };
        }
        Legend::Hidden
    }

    fn button_label(&self, translator: &dyn Translator) -> String {
        let (custom, key) = if self.is_open() {
            (&self.config().hide_button_label, MessageKey::Hide)
        } else {
            (&self.config().show_button_label, MessageKey::ShowCurrentVersion)
        };
        custom.clone().unwrap_or_else(|| translator.translate(key))
    }

    fn button_class(&self) -> &'static str {
        if self.is_open() {
            HIDE_BUTTON_CLASS
        } else if self.config().large_button {
            SHOW_BUTTON_CLASS_LARGE
        } else {
            SHOW_BUTTON_CLASS
        }
    }
}
