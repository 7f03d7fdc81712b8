use crate::effect::{DOCUMENT_TITLE, QUICK_APPLY_SCROLL_TOP, RESOURCES_PATH};
use crate::{local_requested, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// After every message the current query key is compared with the last one
/// dispatched; a changed key appends a `FetchJobs` effect.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = match msg {
        Msg::Mounted { params } => {
            if state.is_mounted() {
                return (state, Vec::new());
            }
            let local = params.as_deref().is_some_and(local_requested);
            state.mount(local);
            vec![Effect::SetDocumentTitle(DOCUMENT_TITLE.to_string())]
        }
        Msg::FilterChanged { key, value } => {
            state.set_filter(key, value);
            Vec::new()
        }
        Msg::LocalToggled(on) => {
            state.set_local(on);
            Vec::new()
        }
        Msg::ClearAllClicked => {
            state.clear_filters();
            Vec::new()
        }
        Msg::PageSelected(page) => {
            state.select_page(page);
            Vec::new()
        }
        Msg::NextPageClicked => {
            state.next_page();
            Vec::new()
        }
        Msg::PrevPageClicked => {
            state.prev_page();
            Vec::new()
        }
        Msg::RetryClicked => {
            state.reset_failed_fetch();
            Vec::new()
        }
        Msg::QuickApplyClicked => vec![Effect::ScrollTo {
            top: QUICK_APPLY_SCROLL_TOP,
        }],
        Msg::ResourcesClicked => vec![Effect::OpenInNewContext {
            path: RESOURCES_PATH.to_string(),
        }],
        Msg::FetchSucceeded { request_id, page } => {
            state.apply_fetch_success(request_id, page);
            Vec::new()
        }
        Msg::FetchFailed { request_id, reason } => {
            state.apply_fetch_failure(request_id, reason);
            Vec::new()
        }
    };

    effects.extend(state.sync_fetch());
    (state, effects)
}
