use std::fmt;

use url::form_urlencoded;

use crate::filters::{is_unconstrained, FilterKey, FilterState};

/// Canonical query string for one filter state and page.
///
/// Equal keys mean equal requests; the fetch subscription compares keys to
/// decide whether a new request is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the `/api/jobs` query for `filters` at `page`.
///
/// Filter parameters come first in [`FilterKey::ALL`] order, followed by
/// `limit` and `offset`. The local toggle is never included.
pub fn build_query(filters: &FilterState, page: usize, page_size: usize) -> QueryKey {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for key in FilterKey::ALL {
        let value = filters.get(key);
        if is_unconstrained(value) {
            continue;
        }
        serializer.append_pair(key.wire_name(), value);
    }
    serializer.append_pair("limit", &page_size.to_string());
    serializer.append_pair("offset", &page.saturating_mul(page_size).to_string());
    QueryKey(serializer.finish())
}

/// Reads the inbound `local=true` page parameter. A leading `?` is allowed.
pub fn local_requested(params: &str) -> bool {
    let params = params.trim().trim_start_matches('?');
    form_urlencoded::parse(params.as_bytes())
        .any(|(name, value)| name == "local" && value == "true")
}
