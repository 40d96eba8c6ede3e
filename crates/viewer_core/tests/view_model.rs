use viewer_core::{
    update, Article, EnglishTranslator, HtmlLayer, Legend, LegendEntry, MessageKey, Msg, Payload,
    ResolvedUser, StatusKind, Translator, User, ViewerConfig, ViewerState,
};

struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: MessageKey) -> String {
        key.key().to_string()
    }
}

fn apply(state: ViewerState, msgs: Vec<Msg>) -> ViewerState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

fn en_viewer(users: Vec<User>) -> ViewerState {
    ViewerState::new(
        Article::new("en", "wikipedia", "Cat", "https://en.wikipedia.org/wiki/Cat"),
        users,
    )
}

fn parsed(html: &str) -> Msg {
    Msg::FetchSucceeded(Payload::ParsedArticle {
        page_id: 6678,
        html: html.to_string(),
    })
}

#[test]
fn closed_viewer_shows_show_button() {
    let view = en_viewer(Vec::new()).view(&EnglishTranslator);

    assert!(!view.open);
    assert!(!view.visible);
    assert_eq!(view.button_label, "Show current version");
    assert_eq!(view.button_class, "button dark small");
    assert_eq!(view.html, None);
}

#[test]
fn viewer_becomes_visible_once_article_arrives() {
    let state = apply(en_viewer(Vec::new()), vec![Msg::RevealClicked]);
    let view = state.view(&EnglishTranslator);
    assert!(view.open);
    assert!(!view.visible);
    assert_eq!(view.button_label, "Hide");
    assert_eq!(view.button_class, "button dark small pull-right");

    let state = apply(state, vec![parsed("<p>Cat</p>")]);
    let view = state.view(&EnglishTranslator);
    assert!(view.visible);
    assert_eq!(view.html.as_deref(), Some("<p>Cat</p>"));
    assert_eq!(view.layer, Some(HtmlLayer::Plain));
}

#[test]
fn status_banner_reports_loading_then_failure() {
    let state = apply(en_viewer(Vec::new()), vec![Msg::RevealClicked]);
    let banner = state.view(&EnglishTranslator).status.expect("banner");
    assert_eq!(banner.kind, StatusKind::Loading);
    assert_eq!(banner.message, "loading authorship data");

    let state = apply(
        state,
        vec![Msg::FetchSucceeded(Payload::Authorship {
            html: Some(String::new()),
        })],
    );
    let banner = state.view(&EnglishTranslator).status.expect("banner");
    assert_eq!(banner.kind, StatusKind::Failed);
    assert_eq!(banner.message, "could not fetch authorship data");
}

#[test]
fn status_banner_disappears_once_highlighted() {
    let state = apply(
        en_viewer(vec![User::new("Alice", "1")]),
        vec![
            Msg::RevealClicked,
            Msg::FetchSucceeded(Payload::Authorship {
                html: Some(r#"<span class="author-token token-authorid-7">x</span>"#.into()),
            }),
            Msg::FetchSucceeded(Payload::UserIds(vec![ResolvedUser::new("Alice", 7)])),
        ],
    );
    let view = state.view(&EnglishTranslator);
    assert_eq!(view.status, None);
    assert_eq!(view.layer, Some(HtmlLayer::Highlighted));
}

#[test]
fn colored_layer_shown_before_users_resolve() {
    let state = apply(
        en_viewer(Vec::new()),
        vec![
            Msg::RevealClicked,
            parsed("<p>plain</p>"),
            Msg::FetchSucceeded(Payload::Authorship {
                html: Some("<p>colored</p>".into()),
            }),
        ],
    );
    let view = state.view(&EnglishTranslator);
    assert_eq!(view.layer, Some(HtmlLayer::Colored));
    assert_eq!(view.html.as_deref(), Some("<p>colored</p>"));
}

#[test]
fn legend_loads_then_lists_users_in_palette_order() {
    let state = apply(en_viewer(Vec::new()), vec![Msg::RevealClicked]);
    assert_eq!(
        state.view(&EnglishTranslator).legend,
        Legend::Loading {
            heading: "Edits by: ".into()
        }
    );

    let users = (0..7)
        .map(|i| ResolvedUser::new(format!("User{i}"), i))
        .collect();
    let state = apply(state, vec![Msg::FetchSucceeded(Payload::UserIds(users))]);
    match state.view(&EnglishTranslator).legend {
        Legend::Users { heading, entries } => {
            assert_eq!(heading, "Edits by: ");
            assert_eq!(entries.len(), 7);
            assert_eq!(
                entries[0],
                LegendEntry {
                    name: "User0".into(),
                    color: "user-highlight-1"
                }
            );
            assert_eq!(entries[6].color, "user-highlight-1");
        }
        other => panic!("unexpected legend {other:?}"),
    }
}

#[test]
fn non_english_wiki_has_no_legend_or_banner() {
    let state = ViewerState::new(
        Article::new("fr", "wikipedia", "Chat", "https://fr.wikipedia.org/wiki/Chat"),
        vec![User::new("Alice", "1")],
    );
    let state = apply(state, vec![Msg::RevealClicked, parsed("<p>Chat</p>")]);
    let view = state.view(&EnglishTranslator);

    assert!(view.visible);
    assert_eq!(view.legend, Legend::Hidden);
    assert_eq!(view.status, None);
}

#[test]
fn configured_labels_override_translations() {
    let config = ViewerConfig {
        show_button_label: Some("Open".into()),
        hide_button_label: Some("Close".into()),
        large_button: true,
        ..ViewerConfig::default()
    };
    let state = ViewerState::with_config(
        Article::new("en", "wikipedia", "Cat", "https://en.wikipedia.org/wiki/Cat"),
        Vec::new(),
        config,
    );
    let view = state.view(&KeyTranslator);
    assert_eq!(view.button_label, "Open");
    assert_eq!(view.button_class, "button dark");
    assert_eq!(view.view_on_wiki_label, "articles.view_on_wiki");

    let view = apply(state, vec![Msg::RevealClicked]).view(&KeyTranslator);
    assert_eq!(view.button_label, "Close");
}

#[test]
fn translator_supplies_default_labels() {
    let view = en_viewer(Vec::new()).view(&KeyTranslator);
    assert_eq!(view.button_label, "articles.show_current_version");
    assert_eq!(view.title, "Cat");
    assert_eq!(view.article_url, "https://en.wikipedia.org/wiki/Cat");
}
