//! Job board core: pure filter-state machine, query synthesis and view-model helpers.
mod effect;
mod filters;
mod job;
mod msg;
pub mod options;
mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, DOCUMENT_TITLE, QUICK_APPLY_SCROLL_TOP, RESOURCES_PATH};
pub use filters::{is_unconstrained, FilterKey, FilterState, ALL, DEFAULT_SORT, LOCAL_COUNTRY};
pub use job::{Company, ExperienceLevel, Job, JobType, JobsPage, RemoteType, SalaryRange};
pub use msg::Msg;
pub use pagination::{next_page_count, page_window, showing_through, total_pages, PAGE_WINDOW};
pub use query::{build_query, local_requested, QueryKey};
pub use state::{AppState, FetchStatus, RequestId, DEFAULT_PAGE_SIZE};
pub use update::update;
pub use view_model::{
    format_amount, format_count, AppViewModel, JobRowView, ListingView, PaginationView,
};
