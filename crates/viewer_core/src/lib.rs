//! Article viewer core: pure state machine, HTML rewrites and view-model helpers.
mod article;
mod config;
mod effect;
mod highlight;
mod i18n;
mod links;
mod msg;
mod state;
mod update;
mod urls;
mod view_model;

pub use article::{Article, ResolvedUser, User};
pub use config::{ViewerConfig, DEFAULT_AUTHORSHIP_ENDPOINT};
pub use effect::Effect;
pub use highlight::{highlight_authors, palette_class, PALETTE};
pub use i18n::{EnglishTranslator, MessageKey, Translator};
pub use links::rewrite_links;
pub use msg::{Msg, Payload};
pub use state::{
    FailureCause, FetchStatus, HtmlLayer, HtmlLayers, Source, SourceStatuses, ViewerState,
};
pub use update::update;
pub use urls::{article_query_url, authorship_color_url, user_lookup_url};
pub use view_model::{Legend, LegendEntry, StatusBanner, StatusKind, ViewerViewModel};
