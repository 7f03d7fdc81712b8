//! Job board engine: HTTP fetching and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_jobs_page, DecodeError};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use fetch::{jobs_url, FetchSettings, JobsFetcher, ReqwestJobsFetcher};
pub use types::{EngineEvent, FailureKind, FetchError};
