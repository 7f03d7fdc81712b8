use std::sync::{mpsc, Arc};

use board_logging::{board_info, board_warn};
use jobboard_core::{Effect, Msg};
use jobboard_engine::{EngineEvent, EngineHandle, EventSink, FailureKind, FetchSettings};

use super::app::Inbox;

/// Turns engine completions into core messages on the app's inbox.
struct InboxSink {
    tx: mpsc::Sender<Inbox>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::FetchCompleted { request_id, result } => match result {
                Ok(page) => Msg::FetchSucceeded { request_id, page },
                Err(err) => {
                    if err.kind != FailureKind::Cancelled {
                        board_warn!("request_id={} failed: {}", request_id, err);
                    }
                    Msg::FetchFailed {
                        request_id,
                        reason: err.kind.to_string(),
                    }
                }
            },
        };
        let _ = self.tx.send(Inbox::Msg(msg));
    }
}

/// Side effects the terminal cannot perform; rendered as notices instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Title(String),
    Scrolled { top: u32 },
    OpenExternally(String),
}

pub struct EffectRunner {
    engine: EngineHandle,
    base_url: String,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, tx: mpsc::Sender<Inbox>) -> anyhow::Result<Self> {
        let base_url = settings.base_url.clone();
        let engine = EngineHandle::new(settings, Arc::new(InboxSink { tx }))?;
        Ok(Self { engine, base_url })
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchJobs { request_id, query } => {
                    board_info!("FetchJobs request_id={} query={}", request_id, query);
                    self.engine.fetch(request_id, query);
                }
                Effect::SetDocumentTitle(title) => notices.push(Notice::Title(title)),
                Effect::ScrollTo { top } => notices.push(Notice::Scrolled { top }),
                Effect::OpenInNewContext { path } => {
                    notices.push(Notice::OpenExternally(resolve_link(&self.base_url, &path)));
                }
            }
        }
        notices
    }
}

fn resolve_link(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_resolve_against_base() {
        assert_eq!(
            resolve_link("https://jobs.example.com/", "/resources"),
            "https://jobs.example.com/resources"
        );
    }

    #[test]
    fn sink_maps_failures_to_kind_text() {
        let (tx, rx) = mpsc::channel();
        let sink = InboxSink { tx };
        sink.emit(EngineEvent::FetchCompleted {
            request_id: 4,
            result: Err(jobboard_engine::FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            }),
        });
        match rx.try_recv().unwrap() {
            Inbox::Msg(Msg::FetchFailed { request_id, reason }) => {
                assert_eq!(request_id, 4);
                assert_eq!(reason, "http status 500");
            }
            _ => panic!("expected FetchFailed"),
        }
    }
}
