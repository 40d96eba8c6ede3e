use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc as command_channel;
use tokio::task::JoinSet;
use viewer_core::Source;
use viewer_logging::{viewer_debug, viewer_error, viewer_info, viewer_warn};

use crate::decode::decode_payload;
use crate::fetch::{FetchSettings, HttpClient, ReqwestClient};
use crate::{EngineEvent, FetchError};

enum EngineCommand {
    Fetch { source: Source, url: String },
}

/// Runs fetches on a background runtime and hands completions back over a channel.
///
/// Dropping the handle stops intake but lets outstanding fetches finish; their
/// completions are discarded.
pub struct EngineHandle {
    cmd_tx: command_channel::UnboundedSender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_client(Arc::new(ReqwestClient::new(settings)))
    }

    pub fn with_client(client: Arc<dyn HttpClient>) -> Self {
        let (cmd_tx, mut cmd_rx) = command_channel::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    viewer_error!("failed to start fetch runtime: {err}");
                    return;
                }
            };
            runtime.block_on(async move {
                let mut tasks = JoinSet::new();
                while let Some(command) = cmd_rx.recv().await {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    tasks.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                while tasks.join_next().await.is_some() {}
            });
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a fetch. Returns false when the runtime is gone and the
    /// source will never complete.
    pub fn fetch(&self, source: Source, url: impl Into<String>) -> bool {
        let command = EngineCommand::Fetch {
            source,
            url: url.into(),
        };
        if let Err(err) = self.cmd_tx.send(command) {
            let EngineCommand::Fetch { url, .. } = err.0;
            viewer_warn!("fetch runtime unavailable, dropping {source:?} request for {url}");
            return false;
        }
        true
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn HttpClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { source, url } => {
            viewer_info!("fetching {source:?} from {url}");
            let result: Result<_, FetchError> = match client.get(&url).await {
                Ok(output) => {
                    viewer_debug!(
                        "{source:?} answered with {} bytes from {}",
                        output.metadata.byte_len,
                        output.metadata.final_url
                    );
                    decode_payload(source, &output.bytes).map_err(FetchError::from)
                }
                Err(err) => Err(err),
            };
            let _ = event_tx.send(EngineEvent::FetchCompleted { source, result });
        }
    }
}
