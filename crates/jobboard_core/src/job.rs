use serde::{Deserialize, Serialize};

/// One posting as returned by `GET /api/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub location: String,
    pub country: String,
    pub remote_type: RemoteType,
    pub job_type: JobType,
    pub industry: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Comma separated free text.
    #[serde(default)]
    pub tags: Option<String>,
    pub posted_at: String,
    #[serde(default)]
    pub visa_support: bool,
    pub category: String,
    pub experience_level: ExperienceLevel,
}

impl Job {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Present when at least one bound is known.
    pub fn salary_range(&self) -> Option<SalaryRange<'_>> {
        if self.salary_min.is_none() && self.salary_max.is_none() {
            return None;
        }
        Some(SalaryRange {
            min: self.salary_min,
            max: self.salary_max,
            currency: self.currency.as_deref().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange<'a> {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteType {
    Remote,
    Onsite,
    Hybrid,
    #[serde(other)]
    Other,
}

impl RemoteType {
    pub fn label(self) -> &'static str {
        match self {
            RemoteType::Remote => "Remote",
            RemoteType::Onsite => "On-site",
            RemoteType::Hybrid => "Hybrid",
            RemoteType::Other => "Unspecified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
    #[serde(other)]
    Other,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Internship => "Internship",
            JobType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
    #[serde(other)]
    Other,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
            ExperienceLevel::Executive => "Executive Level",
            ExperienceLevel::Other => "Any Level",
        }
    }
}

/// Response body of `GET /api/jobs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobsPage {
    pub jobs: Vec<Job>,
    pub total: u64,
}
