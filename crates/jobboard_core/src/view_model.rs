use crate::{FilterState, Job};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub filters: FilterState,
    pub active_filters: usize,
    pub listing: ListingView,
    pub total: u64,
    /// Present only when there is more than one page.
    pub pagination: Option<PaginationView>,
    pub dirty: bool,
}

/// What the result area shows. `Empty` is a successful fetch with no matches
/// and is never shown while a fetch is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Failed { reason: String },
    Empty,
    Results(Vec<JobRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
    pub can_prev: bool,
    pub can_next: bool,
    pub showing_through: u64,
    pub next_page_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub country: String,
    pub remote: &'static str,
    pub job_type: &'static str,
    pub experience: &'static str,
    pub industry: String,
    pub category: String,
    pub salary: Option<String>,
    pub tags: Vec<String>,
    pub posted_at: String,
    pub visa_support: bool,
}

impl JobRowView {
    pub(crate) fn from_job(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.name.clone(),
            location: job.location.clone(),
            country: job.country.clone(),
            remote: job.remote_type.label(),
            job_type: job.job_type.label(),
            experience: job.experience_level.label(),
            industry: job.industry.clone(),
            category: job.category.clone(),
            salary: job.salary_range().map(|range| {
                format_salary(range.min, range.max, range.currency)
            }),
            tags: job.tag_list().into_iter().map(ToOwned::to_owned).collect(),
            posted_at: job.posted_at.clone(),
            visa_support: job.visa_support,
        }
    }
}

fn format_salary(min: Option<f64>, max: Option<f64>, currency: &str) -> String {
    let amount = match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", format_amount(min), format_amount(max)),
        (Some(min), None) => format!("from {}", format_amount(min)),
        (None, Some(max)) => format!("up to {}", format_amount(max)),
        (None, None) => String::new(),
    };
    if currency.is_empty() {
        amount
    } else {
        format!("{currency} {amount}")
    }
}

/// Whole units with thousands separators.
pub fn format_amount(value: f64) -> String {
    format_count(value.round().max(0.0) as u64)
}

/// `1234567` as `1,234,567`.
pub fn format_count(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
