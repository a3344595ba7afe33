use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::api::{ApiError, MashupApi};
use crate::form::MashupRequest;
use crate::job::models::{Job, JobStatus};
use crate::render::{Notice, Render};

/// Where the controller currently is in the submit/poll lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Submitting,
    Polling,
    Succeeded,
    Failed,
}

/// Terminal result of a polled job
#[derive(Debug, Clone)]
pub enum JobOutcome {
    Completed {
        job: Job,
        /// Download location resolved against the API base
        download_url: Option<String>,
    },
    Failed {
        message: String,
    },
}

/// Drives a mashup job from submission to its terminal state.
///
/// Owns the current job id and the active poll task; one controller per
/// session, no shared mutable state outside it. Polling is serialized:
/// each tick awaits the status response before sleeping the configured
/// interval, so status requests never overlap.
pub struct JobController {
    api: Arc<MashupApi>,
    renderer: Arc<dyn Render>,
    poll_interval: Duration,
    state: ControllerState,
    current_job: Option<String>,
    poll_task: Option<JoinHandle<JobOutcome>>,
}

impl JobController {
    /// Create a controller polling at `poll_interval` (1 second in the
    /// default configuration)
    pub fn new(api: Arc<MashupApi>, renderer: Arc<dyn Render>, poll_interval: Duration) -> Self {
        Self {
            api,
            renderer,
            poll_interval,
            state: ControllerState::Idle,
            current_job: None,
            poll_task: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Id of the job currently being tracked, if any
    pub fn current_job(&self) -> Option<&str> {
        self.current_job.as_deref()
    }

    /// Submit a validated request and start polling for its status.
    ///
    /// On a rejected creation (non-2xx or network failure) the error is
    /// surfaced as a notification, the form is re-enabled and the
    /// controller returns to `Idle`. On success the progress view is
    /// revealed, any previous poller is cancelled and a new one starts.
    pub async fn submit(&mut self, request: MashupRequest) -> Result<String, ApiError> {
        self.state = ControllerState::Submitting;
        self.renderer.set_form_busy(true);
        self.renderer.hide_success();

        info!("Submitting mashup request for singer={}", request.singer);

        match self.api.create_mashup(&request).await {
            Ok(job_id) => {
                info!("Mashup job accepted: job_id={}", job_id);
                self.current_job = Some(job_id.clone());
                self.start_polling(job_id.clone());
                self.renderer.show_progress();
                self.state = ControllerState::Polling;
                Ok(job_id)
            }
            Err(err) => {
                warn!("Mashup creation failed: {}", err);
                self.renderer.notify(Notice::Error, &err.to_string());
                self.renderer.set_form_busy(false);
                self.state = ControllerState::Idle;
                Err(err)
            }
        }
    }

    /// Wait for the active poller to reach a terminal status.
    ///
    /// Returns `None` when there is no active poller or it was cancelled.
    pub async fn wait(&mut self) -> Option<JobOutcome> {
        let task = self.poll_task.take()?;
        match task.await {
            Ok(outcome) => {
                self.state = match outcome {
                    JobOutcome::Completed { .. } => ControllerState::Succeeded,
                    JobOutcome::Failed { .. } => ControllerState::Failed,
                };
                self.current_job = None;
                Some(outcome)
            }
            Err(err) => {
                if !err.is_cancelled() {
                    error!("Polling task failed: {:?}", err);
                }
                self.state = ControllerState::Idle;
                self.current_job = None;
                None
            }
        }
    }

    /// Abort the active poller and return the UI to an interactive state
    pub fn cancel(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
            self.renderer.hide_progress();
            self.renderer.set_form_busy(false);
            self.state = ControllerState::Idle;
            if let Some(job_id) = &self.current_job {
                info!("Cancelled status polling for job {}", job_id);
            }
        }
        self.current_job = None;
    }

    /// Spawn the poll loop for `job_id`, cancelling any previous one.
    /// At most one poller is ever active.
    fn start_polling(&mut self, job_id: String) {
        if let Some(previous) = self.poll_task.take() {
            previous.abort();
            warn!("Replacing active status poller with job {}", job_id);
        }
        let api = self.api.clone();
        let renderer = self.renderer.clone();
        let interval = self.poll_interval;
        self.poll_task = Some(tokio::spawn(poll_until_terminal(
            api, renderer, job_id, interval,
        )));
    }
}

/// Poll the status endpoint until the job reaches a terminal state.
///
/// Transient failures (connection errors, non-2xx answers, malformed
/// bodies) are logged and the loop keeps going. Only an explicit
/// `completed` or `failed` status ends it.
async fn poll_until_terminal(
    api: Arc<MashupApi>,
    renderer: Arc<dyn Render>,
    job_id: String,
    interval: Duration,
) -> JobOutcome {
    loop {
        match api.job_status(&job_id).await {
            Ok(job) => {
                let percent = job.progress.round().clamp(0.0, 100.0) as u8;
                let step = job.current_step.as_deref().unwrap_or("Processing...");
                renderer.update_progress(percent, step);

                match job.status {
                    JobStatus::Completed => {
                        info!("Job {} completed", job_id);
                        renderer.hide_progress();
                        let download_url =
                            job.download_url.as_deref().map(|url| api.resolve_url(url));
                        renderer.show_success(&job, download_url.as_deref());
                        renderer.set_form_busy(false);
                        renderer.notify(Notice::Success, "Your mashup is ready!");
                        return JobOutcome::Completed { job, download_url };
                    }
                    JobStatus::Failed => {
                        let message = job
                            .error
                            .clone()
                            .unwrap_or_else(|| "Mashup creation failed".to_string());
                        warn!("Job {} failed: {}", job_id, message);
                        renderer.notify(Notice::Error, &message);
                        renderer.hide_progress();
                        renderer.set_form_busy(false);
                        return JobOutcome::Failed { message };
                    }
                    JobStatus::Pending | JobStatus::Processing => {}
                }
            }
            Err(err) => {
                error!("Status check error for job {}: {}", job_id, err);
            }
        }

        sleep(interval).await;
    }
}
