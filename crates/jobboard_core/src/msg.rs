use crate::{FilterKey, JobsPage, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The view was shown. Carries the raw inbound page parameters, if any.
    Mounted { params: Option<String> },
    /// User edited a filter, the search box or the sort order.
    FilterChanged { key: FilterKey, value: String },
    /// User flipped the local-jobs toggle.
    LocalToggled(bool),
    /// User clicked Clear All / Show All Jobs.
    ClearAllClicked,
    /// User clicked a page number (zero-based).
    PageSelected(usize),
    NextPageClicked,
    PrevPageClicked,
    /// User asked to re-run a failed fetch.
    RetryClicked,
    QuickApplyClicked,
    ResourcesClicked,
    /// Engine completion for a fetch.
    FetchSucceeded {
        request_id: RequestId,
        page: JobsPage,
    },
    /// Engine failure for a fetch.
    FetchFailed {
        request_id: RequestId,
        reason: String,
    },
}
