/// User-facing strings the viewer needs from the host's localization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ShowCurrentVersion,
    Hide,
    ViewOnWiki,
    EditsBy,
    AuthorshipLoading,
    AuthorshipFailed,
}

impl MessageKey {
    /// Dashboard i18n key for this message.
    pub fn key(self) -> &'static str {
        match self {
            MessageKey::ShowCurrentVersion => "articles.show_current_version",
            MessageKey::Hide => "articles.hide",
            MessageKey::ViewOnWiki => "articles.view_on_wiki",
            MessageKey::EditsBy => "articles.edits_by",
            MessageKey::AuthorshipLoading => "articles.authorship_loading",
            MessageKey::AuthorshipFailed => "articles.authorship_failed",
        }
    }
}

pub trait Translator: Send + Sync {
    fn translate(&self, key: MessageKey) -> String;
}

/// Built-in English strings, used when the host has no translations.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn translate(&self, key: MessageKey) -> String {
        match key {
            MessageKey::ShowCurrentVersion => "Show current version",
            MessageKey::Hide => "Hide",
            MessageKey::ViewOnWiki => "View on wiki",
            MessageKey::EditsBy => "Edits by: ",
            MessageKey::AuthorshipLoading => "loading authorship data",
            MessageKey::AuthorshipFailed => "could not fetch authorship data",
        }
        .to_string()
    }
}
