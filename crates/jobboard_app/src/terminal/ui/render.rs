use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};
use jobboard_core::options::{label_for, SelectOption};
use jobboard_core::{
    format_count, is_unconstrained, AppViewModel, FilterKey, JobRowView, ListingView,
    PaginationView,
};

pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "── Find Your Dream Job ── {} opportunities",
        format_count(view.total)
    );
    let _ = writeln!(out, "{}", filter_summary(view));

    match &view.listing {
        ListingView::Loading => {
            let _ = writeln!(out, "Finding Perfect Jobs… searching through thousands of opportunities");
        }
        ListingView::Failed { reason } => {
            let _ = writeln!(out, "No Jobs Found (the search failed: {reason})");
            let _ = writeln!(out, "Type `retry` to search again or `clear` to reset filters.");
        }
        ListingView::Empty => {
            let _ = writeln!(out, "No Jobs Found");
            let _ = writeln!(
                out,
                "We couldn't find any jobs matching your criteria. Type `clear` to show all jobs."
            );
        }
        ListingView::Results(rows) => {
            for row in rows {
                out.push_str(&format_job_row(row, now));
            }
        }
    }

    if let Some(pagination) = &view.pagination {
        out.push_str(&format_pagination(pagination, view.total));
    }
    out
}

fn filter_summary(view: &AppViewModel) -> String {
    let filters = &view.filters;
    let mut parts = Vec::new();
    for key in FilterKey::ALL {
        let value = filters.get(key);
        if key == FilterKey::Sort || is_unconstrained(value) {
            continue;
        }
        let shown = if key == FilterKey::Search {
            format!("\"{value}\"")
        } else {
            label_for(key, value)
        };
        parts.push(format!("{key}: {shown}"));
    }
    let sort = label_for(FilterKey::Sort, filters.get(FilterKey::Sort));
    let local = if filters.local() { " | local jobs" } else { "" };

    if parts.is_empty() {
        format!("Filters: none | Sort: {sort}{local}")
    } else {
        format!(
            "Filters ({}): {} | Sort: {sort}{local}",
            view.active_filters,
            parts.join(", ")
        )
    }
}

fn format_job_row(job: &JobRowView, now: DateTime<Utc>) -> String {
    let mut out = format!("• {} at {}\n", job.title, job.company);
    let mut details = vec![
        format!("{}, {}", job.location, job.country),
        job.remote.to_string(),
        job.job_type.to_string(),
        job.experience.to_string(),
    ];
    if let Some(salary) = &job.salary {
        details.push(salary.clone());
    }
    if job.visa_support {
        details.push("Visa support".to_string());
    }
    details.push(posted_ago(&job.posted_at, now));
    let _ = writeln!(out, "  {}", details.join(" · "));
    if !job.tags.is_empty() {
        let _ = writeln!(out, "  #{}", job.tags.join(" #"));
    }
    out
}

fn format_pagination(pagination: &PaginationView, total: u64) -> String {
    let window = pagination
        .window
        .iter()
        .map(|&page| {
            if page == pagination.page {
                format!("[{}]", page + 1)
            } else {
                (page + 1).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let prev = if pagination.can_prev { "‹ prev" } else { "" };
    let next = if pagination.can_next {
        format!("next › (load {} more)", pagination.next_page_count)
    } else {
        "all jobs loaded".to_string()
    };
    format!(
        "Page {} of {} • Showing {} of {} jobs\n{prev} {window} {next}\n",
        pagination.page + 1,
        pagination.total_pages,
        format_count(pagination.showing_through),
        format_count(total),
    )
}

/// Human form of a posting timestamp; unparseable values are shown as-is.
pub fn posted_ago(posted_at: &str, now: DateTime<Utc>) -> String {
    let posted = DateTime::parse_from_rfc3339(posted_at)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(posted_at, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        });
    let Some(posted) = posted else {
        return posted_at.to_string();
    };
    match (now - posted).num_days() {
        days if days <= 0 => "posted today".to_string(),
        1 => "posted 1 day ago".to_string(),
        days if days < 30 => format!("posted {days} days ago"),
        _ => format!("posted {}", posted.format("%Y-%m-%d")),
    }
}

pub fn render_options(key: FilterKey, current: &str, options: &[SelectOption]) -> String {
    if options.is_empty() {
        return format!("{key} is free text\n");
    }
    let mut out = format!("{key}:\n");
    for option in options {
        let marker = if option.value == current { "*" } else { " " };
        let _ = writeln!(out, " {marker} {:<22} {}", option.value, option.label);
    }
    out
}
