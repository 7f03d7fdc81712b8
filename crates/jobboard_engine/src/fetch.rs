use std::time::Duration;

use board_logging::{board_debug, board_warn};
use futures_util::StreamExt;
use jobboard_core::{JobsPage, QueryKey};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::decode::decode_jobs_page;
use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Origin serving `/api/jobs`; may carry a path prefix.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

#[async_trait::async_trait]
pub trait JobsFetcher: Send + Sync {
    async fn fetch(&self, query: &QueryKey) -> Result<JobsPage, FetchError>;
}

/// `{base}/api/jobs?{query}`, keeping any path prefix of `base`.
pub fn jobs_url(base: &str, query: &QueryKey) -> Result<Url, FetchError> {
    let mut url =
        Url::parse(base).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path"))?
        .pop_if_empty()
        .extend(["api", "jobs"]);
    url.set_query(Some(query.as_str()));
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestJobsFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                "base url cannot carry a path",
            ));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl JobsFetcher for ReqwestJobsFetcher {
    async fn fetch(&self, query: &QueryKey) -> Result<JobsPage, FetchError> {
        let url = jobs_url(&self.settings.base_url, query)?;
        board_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_jobs_page(&bytes).map_err(|err| {
            board_warn!("rejecting jobs payload ({} bytes): {}", bytes.len(), err);
            FetchError::new(FailureKind::MalformedBody, err.to_string())
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
