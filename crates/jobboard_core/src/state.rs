use board_logging::{board_debug, board_info};

use crate::pagination::{self, total_pages};
use crate::view_model::{AppViewModel, JobRowView, ListingView, PaginationView};
use crate::{build_query, Effect, FilterKey, FilterState, Job, JobsPage, QueryKey};

pub type RequestId = u64;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Where the latest dispatched fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing dispatched yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    filters: FilterState,
    page: usize,
    page_size: usize,
    fetch: FetchStatus,
    jobs: Vec<Job>,
    total: u64,
    last_dispatched: Option<QueryKey>,
    latest_request: Option<RequestId>,
    next_request_id: RequestId,
    mounted: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero page size is bumped to one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filters: FilterState::default(),
            page: 0,
            page_size: page_size.max(1),
            fetch: FetchStatus::Idle,
            jobs: Vec::new(),
            total: 0,
            last_dispatched: None,
            latest_request: None,
            next_request_id: 1,
            mounted: false,
            dirty: false,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn query_key(&self) -> QueryKey {
        build_query(&self.filters, self.page, self.page_size)
    }

    /// Returns and clears the "needs render" flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mount(&mut self, local: bool) {
        self.mounted = true;
        if local {
            self.filters.set_local(true);
        }
        self.dirty = true;
    }

    pub(crate) fn set_filter(&mut self, key: FilterKey, value: String) {
        self.filters.set(key, value);
        self.reset_page();
    }

    pub(crate) fn set_local(&mut self, on: bool) {
        self.filters.set_local(on);
        self.reset_page();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.page = 0;
        self.dirty = true;
    }

    /// Ignored unless `page` exists.
    pub(crate) fn select_page(&mut self, page: usize) {
        if page < self.total_pages() && page != self.page {
            self.page = page;
            self.dirty = true;
        }
    }

    pub(crate) fn next_page(&mut self) {
        self.select_page(self.page.saturating_add(1));
    }

    pub(crate) fn prev_page(&mut self) {
        if let Some(page) = self.page.checked_sub(1) {
            self.select_page(page);
        }
    }

    /// Forgets the last dispatched key after a failure so the next sync refetches.
    pub(crate) fn reset_failed_fetch(&mut self) -> bool {
        if matches!(self.fetch, FetchStatus::Failed { .. }) {
            self.last_dispatched = None;
            true
        } else {
            false
        }
    }

    /// Issues a fetch when the current query key differs from the last one dispatched.
    pub(crate) fn sync_fetch(&mut self) -> Option<Effect> {
        if !self.mounted {
            return None;
        }
        let key = self.query_key();
        if self.last_dispatched.as_ref() == Some(&key) {
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request = Some(request_id);
        self.last_dispatched = Some(key.clone());
        self.fetch = FetchStatus::Loading;
        self.jobs.clear();
        self.total = 0;
        self.dirty = true;

        board_debug!("dispatch request_id={} query={}", request_id, key);
        Some(Effect::FetchJobs {
            request_id,
            query: key,
        })
    }

    /// Applies a completed fetch. Returns false when the response is stale.
    pub(crate) fn apply_fetch_success(&mut self, request_id: RequestId, page: JobsPage) -> bool {
        if !self.is_latest(request_id) {
            return false;
        }
        board_info!(
            "request_id={} loaded {} of {} jobs",
            request_id,
            page.jobs.len(),
            page.total
        );
        self.jobs = page.jobs;
        self.total = page.total;
        self.fetch = FetchStatus::Loaded;
        self.dirty = true;
        true
    }

    /// Applies a failed fetch. Returns false when the failure is stale.
    pub(crate) fn apply_fetch_failure(&mut self, request_id: RequestId, reason: String) -> bool {
        if !self.is_latest(request_id) {
            return false;
        }
        self.jobs.clear();
        self.total = 0;
        self.fetch = FetchStatus::Failed { reason };
        self.dirty = true;
        true
    }

    fn is_latest(&self, request_id: RequestId) -> bool {
        if self.latest_request == Some(request_id) && self.fetch == FetchStatus::Loading {
            return true;
        }
        board_debug!(
            "discarding stale response request_id={} latest={:?}",
            request_id,
            self.latest_request
        );
        false
    }

    pub fn view(&self) -> AppViewModel {
        let listing = match &self.fetch {
            FetchStatus::Idle | FetchStatus::Loading => ListingView::Loading,
            FetchStatus::Failed { reason } => ListingView::Failed {
                reason: reason.clone(),
            },
            FetchStatus::Loaded if self.jobs.is_empty() => ListingView::Empty,
            FetchStatus::Loaded => {
                ListingView::Results(self.jobs.iter().map(JobRowView::from_job).collect())
            }
        };

        let total_pages = self.total_pages();
        let pagination = (total_pages > 1).then(|| PaginationView {
            page: self.page,
            total_pages,
            window: pagination::page_window(total_pages, self.page),
            can_prev: self.page > 0,
            can_next: self.page + 1 < total_pages,
            showing_through: pagination::showing_through(self.page, self.page_size, self.total),
            next_page_count: pagination::next_page_count(self.page, self.page_size, self.total),
        });

        AppViewModel {
            filters: self.filters.clone(),
            active_filters: self.filters.active_count(),
            listing,
            total: self.total,
            pagination,
            dirty: self.dirty,
        }
    }
}
