use jobboard_core::JobsPage;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is empty")]
    Empty,
    #[error("invalid jobs payload at line {line}, column {column}: {message}")]
    Invalid {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Decode a `{ "jobs": [...], "total": n }` body.
///
/// A missing `jobs` array or `total`, or any job that does not match the
/// expected shape, rejects the whole page.
pub fn decode_jobs_page(bytes: &[u8]) -> Result<JobsPage, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Invalid {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_page() {
        let page = decode_jobs_page(br#"{"jobs": [], "total": 0}"#).unwrap();
        assert!(page.jobs.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn decodes_job_with_optional_fields_missing() {
        let body = br#"{
            "jobs": [{
                "id": "42",
                "title": "Care Assistant",
                "company": {"name": "Sunrise Care"},
                "location": "Leeds",
                "country": "United Kingdom",
                "remoteType": "onsite",
                "jobType": "part-time",
                "industry": "healthcare",
                "postedAt": "2026-09-30T12:00:00Z",
                "visaSupport": true,
                "category": "healthcare",
                "experienceLevel": "entry"
            }],
            "total": 1
        }"#;
        let page = decode_jobs_page(body).unwrap();
        let job = &page.jobs[0];
        assert_eq!(job.company.logo, None);
        assert_eq!(job.salary_range(), None);
        assert!(job.tag_list().is_empty());
        assert!(job.visa_support);
    }

    #[test]
    fn unknown_enum_values_do_not_reject_page() {
        let body = br#"{"jobs": [{
            "id": "7", "title": "Pilot", "company": {"name": "Air"},
            "location": "Doha", "country": "Qatar", "remoteType": "flexible",
            "jobType": "seasonal", "industry": "aerospace",
            "postedAt": "2026-10-02", "category": "operations",
            "experienceLevel": "principal"
        }], "total": 1}"#;
        let page = decode_jobs_page(body).unwrap();
        assert_eq!(page.jobs[0].remote_type, jobboard_core::RemoteType::Other);
        assert_eq!(page.jobs[0].job_type, jobboard_core::JobType::Other);
    }

    #[test]
    fn rejects_empty_and_wrong_shape() {
        assert_eq!(decode_jobs_page(b"  \n"), Err(DecodeError::Empty));
        assert!(matches!(
            decode_jobs_page(br#"{"items": []}"#),
            Err(DecodeError::Invalid { .. })
        ));
        assert!(matches!(
            decode_jobs_page(b"[1, 2, 3]"),
            Err(DecodeError::Invalid { .. })
        ));
    }
}
