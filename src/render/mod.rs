pub mod console;

pub use console::ConsoleRenderer;

use crate::form::Field;
use crate::job::Job;

/// Kind of transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

/// Rendering seam between the form/job logic and the actual UI.
///
/// The validator and the job controller only talk to this trait, so the
/// whole flow can run against a recording implementation in tests. Console
/// output is one implementation; a richer front end would be another.
/// Implementations are free to treat "hide" calls as no-ops when there is
/// nothing to take back (a terminal cannot unprint an error line).
pub trait Render: Send + Sync {
    /// Toggle the error indicator attached to a form field
    fn field_error(&self, field: Field, visible: bool);

    /// Disable or re-enable the submit control while a job is in flight
    fn set_form_busy(&self, busy: bool);

    /// Reveal the progress view
    fn show_progress(&self);

    /// Update the progress percentage and current-step text
    fn update_progress(&self, percent: u8, step: &str);

    /// Hide the progress view
    fn hide_progress(&self);

    /// Reveal the success view for a completed job
    fn show_success(&self, job: &Job, download_url: Option<&str>);

    /// Hide a previously shown success view
    fn hide_success(&self);

    /// Show a transient notification
    fn notify(&self, notice: Notice, message: &str);
}
