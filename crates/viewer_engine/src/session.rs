use std::sync::Arc;
use std::time::Duration;

use viewer_core::{
    update, Article, Effect, EnglishTranslator, Msg, Translator, User, ViewerConfig, ViewerState,
    ViewerViewModel,
};
use viewer_logging::viewer_warn;

use crate::{EngineEvent, EngineHandle, FetchSettings};

/// One viewer instance: owns the state, executes its effects on the engine and
/// feeds completions back through `update`.
///
/// Completions are only applied from `pump`/`pump_blocking`, so every state
/// change happens on the caller's thread, one message at a time.
pub struct ArticleViewer {
    state: ViewerState,
    engine: EngineHandle,
    translator: Arc<dyn Translator>,
}

impl ArticleViewer {
    /// Viewer backed by the reqwest transport and built-in English strings.
    pub fn new(article: Article, users: Vec<User>, config: ViewerConfig) -> Self {
        Self::with_parts(
            ViewerState::with_config(article, users, config),
            EngineHandle::new(FetchSettings::default()),
            Arc::new(EnglishTranslator),
        )
    }

    pub fn with_parts(
        state: ViewerState,
        engine: EngineHandle,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            state,
            engine,
            translator,
        }
    }

    pub fn reveal(&mut self) {
        self.dispatch(Msg::RevealClicked);
    }

    pub fn dismiss(&mut self) {
        self.dispatch(Msg::DismissClicked);
    }

    /// Applies every completion that has already arrived. Returns whether the
    /// view changed since the last render.
    pub fn pump(&mut self) -> bool {
        while let Some(event) = self.engine.try_recv() {
            self.dispatch(map_event(event));
        }
        self.state.consume_dirty()
    }

    /// Waits up to `timeout` for a completion, then applies everything pending.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        if let Some(event) = self.engine.recv_timeout(timeout) {
            self.dispatch(map_event(event));
        }
        self.pump()
    }

    pub fn view(&self) -> ViewerViewModel {
        self.state.view(self.translator.as_ref())
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            match effect {
                Effect::Fetch { source, url } => {
                    self.engine.fetch(source, url);
                }
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { source, result } => match result {
            Ok(payload) => Msg::FetchSucceeded(payload),
            Err(err) => {
                viewer_warn!("{source:?} fetch failed: {err}");
                Msg::FetchFailed { source }
            }
        },
    }
}
