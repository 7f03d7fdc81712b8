use jobboard_core::{build_query, local_requested, FilterKey, FilterState, ALL};
use pretty_assertions::assert_eq;

#[test]
fn default_filters_send_only_sort_and_window() {
    let query = build_query(&FilterState::new(), 0, 20);
    assert_eq!(query.as_str(), "sort=date&limit=20&offset=0");
}

#[test]
fn empty_and_all_values_are_omitted() {
    let mut filters = FilterState::new();
    filters.set(FilterKey::Search, "");
    filters.set(FilterKey::Country, ALL);
    filters.set(FilterKey::Sort, "");
    let query = build_query(&filters, 0, 20);
    assert_eq!(query.as_str(), "limit=20&offset=0");
}

#[test]
fn every_field_is_sent_in_fixed_order() {
    let mut filters = FilterState::new();
    // Set in reverse to show insertion order does not matter.
    filters.set(FilterKey::Sort, "salary");
    filters.set(FilterKey::VisaSupport, "false");
    filters.set(FilterKey::RemoteType, "hybrid");
    filters.set(FilterKey::JobType, "part-time");
    filters.set(FilterKey::ExperienceLevel, "mid");
    filters.set(FilterKey::Industry, "real-estate");
    filters.set(FilterKey::Category, "sales");
    filters.set(FilterKey::Country, "Sri Lanka");
    filters.set(FilterKey::Search, "store manager");

    let query = build_query(&filters, 3, 20);
    assert_eq!(
        query.as_str(),
        "search=store+manager&country=Sri+Lanka&category=sales&industry=real-estate\
         &experienceLevel=mid&jobType=part-time&remoteType=hybrid&visaSupport=false\
         &sort=salary&limit=20&offset=60"
    );
}

#[test]
fn local_flag_is_never_sent() {
    let mut filters = FilterState::new();
    filters.set_local(true);
    let query = build_query(&filters, 0, 20);
    assert!(!query.as_str().contains("local"));
    assert!(query.as_str().contains("country=Nepal"));

    filters.set_local(false);
    let query = build_query(&filters, 0, 20);
    assert!(!query.as_str().contains("local"));
    assert!(!query.as_str().contains("country"));
}

#[test]
fn reserved_characters_are_escaped() {
    let mut filters = FilterState::new();
    filters.set(FilterKey::Search, "c++ & rust=fun");
    let query = build_query(&filters, 0, 10);
    assert_eq!(
        query.as_str(),
        "search=c%2B%2B+%26+rust%3Dfun&sort=date&limit=10&offset=0"
    );
}

#[test]
fn equal_state_yields_identical_keys() {
    let mut a = FilterState::new();
    a.set(FilterKey::Category, "design");
    a.set(FilterKey::Search, "ux");
    let mut b = FilterState::new();
    b.set(FilterKey::Search, "ux");
    b.set(FilterKey::Category, "design");

    assert_eq!(build_query(&a, 2, 20), build_query(&b, 2, 20));
    assert_ne!(build_query(&a, 2, 20), build_query(&a, 3, 20));
}

#[test]
fn local_parameter_parsing() {
    assert!(local_requested("local=true"));
    assert!(local_requested("?ref=home&local=true"));
    assert!(!local_requested("local=1"));
    assert!(!local_requested("locale=true"));
}
