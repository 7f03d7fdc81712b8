use crate::{QueryKey, RequestId};

pub const DOCUMENT_TITLE: &str =
    "Global Jobs - Udaan Agencies | International Career Opportunities";

/// Offset scrolled to by the quick-apply shortcut.
pub const QUICK_APPLY_SCROLL_TOP: u32 = 600;

pub const RESOURCES_PATH: &str = "/resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobs { request_id: RequestId, query: QueryKey },
    SetDocumentTitle(String),
    ScrollTo { top: u32 },
    OpenInNewContext { path: String },
}
