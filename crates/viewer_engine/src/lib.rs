//! Article viewer engine: remote fetches, response decoding and effect execution.
mod decode;
mod engine;
mod fetch;
mod session;
mod types;

pub use decode::{decode_payload, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, HttpClient, ReqwestClient};
pub use session::ArticleViewer;
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
