use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::api::dto::{CreateMashupResponse, ErrorBody};
use crate::form::MashupRequest;
use crate::job::Job;

/// Errors from the mashup REST API layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connect, timeout, malformed body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Writing the downloaded file to disk failed
    #[error("could not write {path}: {source}")]
    Download {
        path: String,
        source: std::io::Error,
    },
}

/// HTTP client for the mashup generation service.
///
/// Wraps the job-creation, status and download endpoints using [`reqwest`].
pub struct MashupApi {
    http: reqwest::Client,
    base_url: String,
}

impl MashupApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://127.0.0.1:5000`.
    /// * `timeout`  - Per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base HTTP API URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a job-creation request.
    ///
    /// Sends `POST /create-mashup` with the validated form payload and
    /// returns the server-assigned job id.
    pub async fn create_mashup(&self, request: &MashupRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/create-mashup", self.base_url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response, "Failed to create mashup").await);
        }

        let body: CreateMashupResponse = response.json().await?;
        debug!("Job created with id={}", body.job_id);
        Ok(body.job_id)
    }

    /// Fetch the current status of a job via `GET /status/{job_id}`
    pub async fn job_status(&self, job_id: &str) -> Result<Job, ApiError> {
        let response = self
            .http
            .get(format!("{}/status/{}", self.base_url, job_id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response, "Failed to get status").await);
        }

        Ok(response.json::<Job>().await?)
    }

    /// Resolve a download URL against the API base. The server reports
    /// paths like `/download/{job_id}`; absolute URLs pass through as-is.
    pub fn resolve_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}{}", self.base_url, path_or_url)
        }
    }

    /// Stream the finished mashup at `url` into `dest`.
    ///
    /// Returns the number of bytes written.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64, ApiError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response, "Failed to download mashup").await);
        }

        let write_err = |source| ApiError::Download {
            path: dest.display().to_string(),
            source,
        };

        let mut file = tokio::fs::File::create(dest).await.map_err(write_err)?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(write_err)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;

        debug!("Downloaded {} bytes to {}", written, dest.display());
        Ok(written)
    }

    /// Build a `Rejected` error from a non-2xx response, preferring the
    /// server's own error message when the body carries one.
    async fn rejection(response: reqwest::Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| fallback.to_string());
        ApiError::Rejected { status, message }
    }
}
