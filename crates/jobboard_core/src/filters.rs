use std::fmt;

/// Sentinel meaning "no constraint on this field".
pub const ALL: &str = "all";

/// Country forced by the local-jobs toggle.
pub const LOCAL_COUNTRY: &str = "Nepal";

pub const DEFAULT_SORT: &str = "date";

/// A user-editable filter field, named on the wire by [`FilterKey::wire_name`].
///
/// The local-jobs toggle is not a key: it is never transmitted and has its own
/// mutation path, see [`FilterState::set_local`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Search,
    Country,
    Category,
    Industry,
    ExperienceLevel,
    JobType,
    RemoteType,
    VisaSupport,
    Sort,
}

impl FilterKey {
    /// Every key, in the order parameters appear in the query string.
    pub const ALL: [FilterKey; 9] = [
        FilterKey::Search,
        FilterKey::Country,
        FilterKey::Category,
        FilterKey::Industry,
        FilterKey::ExperienceLevel,
        FilterKey::JobType,
        FilterKey::RemoteType,
        FilterKey::VisaSupport,
        FilterKey::Sort,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Country => "country",
            FilterKey::Category => "category",
            FilterKey::Industry => "industry",
            FilterKey::ExperienceLevel => "experienceLevel",
            FilterKey::JobType => "jobType",
            FilterKey::RemoteType => "remoteType",
            FilterKey::VisaSupport => "visaSupport",
            FilterKey::Sort => "sort",
        }
    }

    /// Accepts the wire name, case-insensitively, plus the snake_case spelling.
    pub fn from_wire(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|key| {
            key.wire_name().eq_ignore_ascii_case(name) || key.snake_name() == name
        })
    }

    fn snake_name(self) -> &'static str {
        match self {
            FilterKey::ExperienceLevel => "experience_level",
            FilterKey::JobType => "job_type",
            FilterKey::RemoteType => "remote_type",
            FilterKey::VisaSupport => "visa_support",
            other => other.wire_name(),
        }
    }

    pub(crate) fn default_value(self) -> &'static str {
        match self {
            FilterKey::Search => "",
            FilterKey::Sort => DEFAULT_SORT,
            _ => ALL,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Current search, filter and sort selections.
///
/// Values are stored verbatim; anything outside the offered options is passed
/// through to the backend unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    country: String,
    category: String,
    industry: String,
    experience_level: String,
    job_type: String,
    remote_type: String,
    visa_support: String,
    sort: String,
    local: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: FilterKey::Search.default_value().to_string(),
            country: FilterKey::Country.default_value().to_string(),
            category: FilterKey::Category.default_value().to_string(),
            industry: FilterKey::Industry.default_value().to_string(),
            experience_level: FilterKey::ExperienceLevel.default_value().to_string(),
            job_type: FilterKey::JobType.default_value().to_string(),
            remote_type: FilterKey::RemoteType.default_value().to_string(),
            visa_support: FilterKey::VisaSupport.default_value().to_string(),
            sort: FilterKey::Sort.default_value().to_string(),
            local: false,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Search => &self.search,
            FilterKey::Country => &self.country,
            FilterKey::Category => &self.category,
            FilterKey::Industry => &self.industry,
            FilterKey::ExperienceLevel => &self.experience_level,
            FilterKey::JobType => &self.job_type,
            FilterKey::RemoteType => &self.remote_type,
            FilterKey::VisaSupport => &self.visa_support,
            FilterKey::Sort => &self.sort,
        }
    }

    pub fn local(&self) -> bool {
        self.local
    }

    /// Replaces one field verbatim.
    ///
    /// Editing the country away from [`LOCAL_COUNTRY`] also clears the local
    /// toggle, so the two never disagree.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if key == FilterKey::Country && value != LOCAL_COUNTRY {
            self.local = false;
        }
        *self.slot_mut(key) = value;
    }

    /// On forces the country to [`LOCAL_COUNTRY`]; off resets it to [`ALL`].
    pub fn set_local(&mut self, on: bool) {
        self.local = on;
        self.country = if on { LOCAL_COUNTRY } else { ALL }.to_string();
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of fields that currently constrain the result set.
    pub fn active_count(&self) -> usize {
        FilterKey::ALL
            .into_iter()
            .filter(|key| *key != FilterKey::Sort)
            .filter(|key| !is_unconstrained(self.get(*key)))
            .count()
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Search => &mut self.search,
            FilterKey::Country => &mut self.country,
            FilterKey::Category => &mut self.category,
            FilterKey::Industry => &mut self.industry,
            FilterKey::ExperienceLevel => &mut self.experience_level,
            FilterKey::JobType => &mut self.job_type,
            FilterKey::RemoteType => &mut self.remote_type,
            FilterKey::VisaSupport => &mut self.visa_support,
            FilterKey::Sort => &mut self.sort,
        }
    }
}

/// True for values that are dropped from the query: empty or the `"all"` sentinel.
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wire_accepts_both_spellings() {
        assert_eq!(FilterKey::from_wire("jobType"), Some(FilterKey::JobType));
        assert_eq!(FilterKey::from_wire("jobtype"), Some(FilterKey::JobType));
        assert_eq!(FilterKey::from_wire("job_type"), Some(FilterKey::JobType));
        assert_eq!(FilterKey::from_wire(" sort "), Some(FilterKey::Sort));
        assert_eq!(FilterKey::from_wire("local"), None);
        assert_eq!(FilterKey::from_wire("limit"), None);
    }

    #[test]
    fn active_count_ignores_sort_and_sentinels() {
        let mut filters = FilterState::new();
        assert_eq!(filters.active_count(), 0);
        filters.set(FilterKey::Sort, "salary");
        assert_eq!(filters.active_count(), 0);
        filters.set(FilterKey::Search, "nurse");
        filters.set(FilterKey::VisaSupport, "true");
        assert_eq!(filters.active_count(), 2);
    }
}
