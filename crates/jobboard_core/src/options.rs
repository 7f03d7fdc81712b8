//! Choices offered by each selector. Informational only: the store accepts
//! any value and leaves validation to the backend.

use crate::filters::{FilterKey, ALL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahrain",
    "Bangladesh",
    "Belarus",
    "Belgium",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Brazil",
    "Bulgaria",
    "Cambodia",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Costa Rica",
    "Croatia",
    "Czech Republic",
    "Denmark",
    "Ecuador",
    "Egypt",
    "Estonia",
    "Finland",
    "France",
    "Georgia",
    "Germany",
    "Ghana",
    "Greece",
    "Guatemala",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kuwait",
    "Latvia",
    "Lebanon",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Malta",
    "Mexico",
    "Morocco",
    "Nepal",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Oman",
    "Pakistan",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Qatar",
    "Romania",
    "Russia",
    "Saudi Arabia",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sri Lanka",
    "Sweden",
    "Switzerland",
    "Taiwan",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Uruguay",
    "Uzbekistan",
    "Venezuela",
    "Vietnam",
    "Zimbabwe",
];

pub const CATEGORIES: &[SelectOption] = &[
    opt("technology", "Technology"),
    opt("healthcare", "Healthcare"),
    opt("finance", "Finance"),
    opt("education", "Education"),
    opt("engineering", "Engineering"),
    opt("marketing", "Marketing"),
    opt("sales", "Sales"),
    opt("design", "Design"),
    opt("operations", "Operations"),
    opt("legal", "Legal"),
    opt("consulting", "Consulting"),
    opt("research", "Research"),
];

pub const INDUSTRIES: &[SelectOption] = &[
    opt("technology", "Technology"),
    opt("healthcare", "Healthcare"),
    opt("finance", "Finance & Banking"),
    opt("education", "Education"),
    opt("engineering", "Engineering"),
    opt("marketing", "Marketing & Advertising"),
    opt("sales", "Sales"),
    opt("design", "Design & Creative"),
    opt("operations", "Operations"),
    opt("legal", "Legal"),
    opt("consulting", "Consulting"),
    opt("research", "Research & Development"),
    opt("construction", "Construction"),
    opt("manufacturing", "Manufacturing"),
    opt("transportation", "Transportation & Logistics"),
    opt("hospitality", "Hospitality & Tourism"),
    opt("retail", "Retail & E-commerce"),
    opt("agriculture", "Agriculture"),
    opt("energy", "Energy & Utilities"),
    opt("media", "Media & Entertainment"),
    opt("telecommunications", "Telecommunications"),
    opt("pharmaceuticals", "Pharmaceuticals"),
    opt("automotive", "Automotive"),
    opt("aerospace", "Aerospace & Defense"),
    opt("real-estate", "Real Estate"),
    opt("insurance", "Insurance"),
    opt("nonprofit", "Non-Profit"),
    opt("government", "Government & Public Sector"),
];

pub const JOB_TYPES: &[SelectOption] = &[
    opt("full-time", "Full-time"),
    opt("part-time", "Part-time"),
    opt("contract", "Contract"),
    opt("temporary", "Temporary"),
    opt("internship", "Internship"),
];

pub const EXPERIENCE_LEVELS: &[SelectOption] = &[
    opt("entry", "Entry Level (0-2 years)"),
    opt("mid", "Mid Level (2-5 years)"),
    opt("senior", "Senior Level (5+ years)"),
    opt("executive", "Executive Level"),
];

pub const REMOTE_TYPES: &[SelectOption] = &[
    opt("remote", "Remote"),
    opt("onsite", "On-site"),
    opt("hybrid", "Hybrid"),
];

pub const VISA_OPTIONS: &[SelectOption] = &[
    opt("true", "Visa Supported"),
    opt("false", "No Visa Support"),
];

pub const SORT_OPTIONS: &[SelectOption] = &[
    opt("relevance", "Relevance"),
    opt("date", "Latest First"),
    opt("salary", "Highest Salary"),
    opt("company", "Company Name"),
];

/// Options for `key`, led by its "all" entry where the selector has one.
///
/// Free-text search has no options.
pub fn options_for(key: FilterKey) -> Vec<SelectOption> {
    let (all_label, rest): (Option<&'static str>, Vec<SelectOption>) = match key {
        FilterKey::Search => (None, Vec::new()),
        FilterKey::Country => (
            Some("All Countries"),
            COUNTRIES.iter().map(|&country| opt(country, country)).collect(),
        ),
        FilterKey::Category => (Some("All Categories"), CATEGORIES.to_vec()),
        FilterKey::Industry => (Some("All Industries"), INDUSTRIES.to_vec()),
        FilterKey::ExperienceLevel => (Some("All Experience Levels"), EXPERIENCE_LEVELS.to_vec()),
        FilterKey::JobType => (Some("All Job Types"), JOB_TYPES.to_vec()),
        FilterKey::RemoteType => (Some("All Remote Types"), REMOTE_TYPES.to_vec()),
        FilterKey::VisaSupport => (Some("All Visa Options"), VISA_OPTIONS.to_vec()),
        FilterKey::Sort => (None, SORT_OPTIONS.to_vec()),
    };

    let mut options = Vec::with_capacity(rest.len() + 1);
    if let Some(label) = all_label {
        options.push(opt(ALL, label));
    }
    options.extend(rest);
    options
}

/// Label shown for the currently selected `value` of `key`.
pub fn label_for(key: FilterKey, value: &str) -> String {
    options_for(key)
        .into_iter()
        .find(|option| option.value == value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_selectors_lead_with_all() {
        for key in FilterKey::ALL {
            let options = options_for(key);
            match key {
                FilterKey::Search => assert!(options.is_empty()),
                FilterKey::Sort => assert!(options.iter().all(|o| o.value != ALL)),
                _ => assert_eq!(options[0].value, ALL, "{key}"),
            }
        }
    }

    #[test]
    fn countries_include_local_country() {
        assert!(COUNTRIES.contains(&crate::LOCAL_COUNTRY));
    }

    #[test]
    fn label_for_unknown_value_echoes_value() {
        assert_eq!(label_for(FilterKey::Industry, "finance"), "Finance & Banking");
        assert_eq!(label_for(FilterKey::Industry, "mining"), "mining");
    }
}
