use viewer_logging::{viewer_debug, viewer_info};

use crate::links::rewrite_links;
use crate::urls::{article_query_url, authorship_color_url, user_lookup_url};
use crate::{Effect, FailureCause, FetchStatus, Msg, Payload, Source, ViewerState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewerState, msg: Msg) -> (ViewerState, Vec<Effect>) {
    let effects = match msg {
        Msg::RevealClicked => reveal(&mut state),
        Msg::DismissClicked => {
            // In-flight fetches keep running and fill in state while hidden.
            state.set_open(false);
            Vec::new()
        }
        Msg::FetchSucceeded(payload) => {
            apply_payload(&mut state, payload);
            Vec::new()
        }
        Msg::FetchFailed { source } => {
            if is_awaiting(&state, source) {
                state.fail(source, FailureCause::Transport);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn reveal(state: &mut ViewerState) -> Vec<Effect> {
    state.set_open(true);

    let mut effects = Vec::with_capacity(Source::ALL.len());
    if state.begin(Source::ParsedArticle) {
        effects.push(Effect::Fetch {
            source: Source::ParsedArticle,
            url: article_query_url(state.article()),
        });
    }

    // Authorship coloring is only available for English Wikipedia.
    if !state.article().is_en_wikipedia() {
        return effects;
    }
    if state.begin(Source::UserIds) {
        effects.push(Effect::Fetch {
            source: Source::UserIds,
            url: user_lookup_url(state.article(), state.users()),
        });
    }
    if state.begin(Source::Authorship) {
        effects.push(Effect::Fetch {
            source: Source::Authorship,
            url: authorship_color_url(&state.config().authorship_endpoint, state.article()),
        });
    }
    effects
}

fn apply_payload(state: &mut ViewerState, payload: Payload) {
    if !is_awaiting(state, payload.source()) {
        return;
    }

    match payload {
        Payload::ParsedArticle { page_id, html } => {
            let html = rewrite_links(&html, &state.article().wiki_url());
            state.store_plain(page_id, html);
        }
        Payload::Authorship { html } => match html.filter(|html| !html.is_empty()) {
            Some(html) => {
                let html = rewrite_links(&html, &state.article().wiki_url());
                state.store_colored(html);
            }
            None => {
                viewer_info!(
                    "authorship service returned no markup for {}",
                    state.article().title
                );
                state.fail(Source::Authorship, FailureCause::EmptyPayload);
            }
        },
        Payload::UserIds(users) => state.store_resolved_users(users),
    }
}

fn is_awaiting(state: &ViewerState, source: Source) -> bool {
    let status = state.status(source);
    if status != FetchStatus::InFlight {
        viewer_debug!("ignoring {source:?} completion while {status:?}");
        return false;
    }
    true
}
