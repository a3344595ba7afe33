use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Job status enum representing the state of a job.
///
/// The server owns the lifecycle; the client only observes it. The server
/// reports finer-grained working states (`downloading`, `extracting`,
/// `trimming`, `merging`, ...) and may grow new ones, so any status the
/// client does not recognize maps to `Processing` and polling carries on
/// until an explicit terminal status arrives.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" | "queued" => JobStatus::Pending,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            _ => JobStatus::Processing,
        }
    }
}

impl JobStatus {
    /// Terminal statuses stop polling
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Snapshot of a job as reported by the status endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub clips_count: Option<u32>,
    #[serde(default)]
    pub email_sent: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse() {
        let status: JobStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, JobStatus::Pending);
        let status: JobStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(status, JobStatus::Completed);
        let status: JobStatus = serde_json::from_str(r#""failed""#).unwrap();
        assert_eq!(status, JobStatus::Failed);
    }

    #[test]
    fn queued_maps_to_pending() {
        let status: JobStatus = serde_json::from_str(r#""queued""#).unwrap();
        assert_eq!(status, JobStatus::Pending);
    }

    #[test]
    fn working_and_unknown_statuses_map_to_processing() {
        for raw in [r#""processing""#, r#""downloading""#, r#""merging""#, r#""warming_up""#] {
            let status: JobStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, JobStatus::Processing, "{raw}");
        }
    }

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn full_status_payload_parses() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": "J1",
                "status": "downloading",
                "progress": 37.5,
                "current_step": "Downloaded 4/15 videos",
                "created_at": "2026-08-06T10:15:30.123456"
            }"#,
        )
        .unwrap();
        assert_eq!(job.id.as_deref(), Some("J1"));
        assert_eq!(job.status, JobStatus::Processing);
        assert_eq!(job.progress, 37.5);
        assert_eq!(job.current_step.as_deref(), Some("Downloaded 4/15 videos"));
        assert!(job.created_at.is_some());
        assert!(job.download_url.is_none());
    }

    #[test]
    fn sparse_terminal_payload_parses_with_defaults() {
        let job: Job =
            serde_json::from_str(r#"{"status": "completed", "download_url": "/f.mp3"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.progress, 0.0);
        assert_eq!(job.download_url.as_deref(), Some("/f.mp3"));
        assert!(job.error.is_none());
    }
}
