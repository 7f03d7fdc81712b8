use std::sync::Once;

use jobboard_core::{
    update, AppState, Effect, FilterKey, FilterState, JobsPage, Msg, ALL, LOCAL_COUNTRY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn mounted() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Mounted { params: None });
    state
}

fn set(state: AppState, key: FilterKey, value: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FilterChanged {
            key,
            value: value.to_string(),
        },
    )
}

fn latest_request(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchJobs { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect")
}

/// Loads a response with enough jobs for `pages` pages and moves to `page`.
fn on_page(state: AppState, effects: &[Effect], pages: u64, page: usize) -> AppState {
    let request_id = latest_request(effects);
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id,
            page: JobsPage {
                jobs: Vec::new(),
                total: pages * state_page_size(),
            },
        },
    );
    let (state, _) = update(state, Msg::PageSelected(page));
    assert_eq!(state.page(), page);
    state
}

fn state_page_size() -> u64 {
    AppState::new().page_size() as u64
}

#[test]
fn defaults_match_documented_values() {
    let filters = FilterState::new();
    assert_eq!(filters.get(FilterKey::Search), "");
    for key in [
        FilterKey::Country,
        FilterKey::Category,
        FilterKey::Industry,
        FilterKey::ExperienceLevel,
        FilterKey::JobType,
        FilterKey::RemoteType,
        FilterKey::VisaSupport,
    ] {
        assert_eq!(filters.get(key), ALL, "{key}");
    }
    assert_eq!(filters.get(FilterKey::Sort), "date");
    assert!(!filters.local());
}

#[test]
fn changing_any_filter_resets_page() {
    init_logging();
    for key in FilterKey::ALL {
        let (state, effects) = update(AppState::new(), Msg::Mounted { params: None });
        let state = on_page(state, &effects, 5, 3);

        let (state, effects) = set(state, key, "something-new");
        assert_eq!(state.page(), 0, "{key}");
        assert_eq!(state.filters().get(key), "something-new");
        assert!(matches!(effects.as_slice(), [Effect::FetchJobs { .. }]));
    }
}

#[test]
fn unknown_values_pass_through_verbatim() {
    let (state, _) = set(mounted(), FilterKey::JobType, "Volunteer ");
    assert_eq!(state.filters().get(FilterKey::JobType), "Volunteer ");
}

#[test]
fn local_toggle_forces_and_resets_country() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted { params: None });
    let state = on_page(state, &effects, 4, 2);

    let (state, _) = update(state, Msg::LocalToggled(true));
    assert!(state.filters().local());
    assert_eq!(state.filters().get(FilterKey::Country), LOCAL_COUNTRY);
    assert_eq!(state.page(), 0);

    let state = {
        let (state, effects) = set(state, FilterKey::Search, "cook");
        on_page(state, &effects, 4, 1)
    };
    let (state, _) = update(state, Msg::LocalToggled(false));
    assert!(!state.filters().local());
    assert_eq!(state.filters().get(FilterKey::Country), ALL);
    assert_eq!(state.page(), 0);
}

#[test]
fn manual_country_edit_clears_local() {
    let (state, _) = update(mounted(), Msg::LocalToggled(true));
    let (state, _) = set(state, FilterKey::Country, "Japan");
    assert!(!state.filters().local());
    assert_eq!(state.filters().get(FilterKey::Country), "Japan");
}

#[test]
fn selecting_local_country_keeps_local() {
    let (state, _) = update(mounted(), Msg::LocalToggled(true));
    let (state, _) = set(state, FilterKey::Country, LOCAL_COUNTRY);
    assert!(state.filters().local());
}

#[test]
fn clear_all_restores_defaults() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted { params: None });
    let state = on_page(state, &effects, 3, 1);
    let (state, _) = update(state, Msg::LocalToggled(true));
    let (state, _) = set(state, FilterKey::Search, "welder");
    let (state, _) = set(state, FilterKey::Category, "engineering");
    let (state, _) = set(state, FilterKey::Industry, "construction");
    let (state, _) = set(state, FilterKey::ExperienceLevel, "senior");
    let (state, _) = set(state, FilterKey::JobType, "contract");
    let (state, _) = set(state, FilterKey::RemoteType, "onsite");
    let (state, _) = set(state, FilterKey::VisaSupport, "true");
    let (state, _) = set(state, FilterKey::Sort, "salary");

    let (state, effects) = update(state, Msg::ClearAllClicked);
    assert_eq!(state.filters(), &FilterState::default());
    assert!(state.filters().is_default());
    assert_eq!(state.page(), 0);
    assert!(matches!(effects.as_slice(), [Effect::FetchJobs { .. }]));
}

#[test]
fn mount_with_local_param_seeds_toggle() {
    let (state, effects) = update(
        AppState::new(),
        Msg::Mounted {
            params: Some("?local=true".to_string()),
        },
    );
    assert!(state.filters().local());
    assert_eq!(state.filters().get(FilterKey::Country), LOCAL_COUNTRY);

    let query = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchJobs { query, .. } => Some(query.as_str().to_string()),
            _ => None,
        })
        .expect("fetch effect");
    assert_eq!(query, "country=Nepal&sort=date&limit=20&offset=0");
}

#[test]
fn mount_ignores_other_param_values() {
    for params in ["local=false", "local=TRUE", "other=true", ""] {
        let (state, _) = update(
            AppState::new(),
            Msg::Mounted {
                params: Some(params.to_string()),
            },
        );
        assert!(!state.filters().local(), "{params}");
    }
}
