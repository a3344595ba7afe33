pub mod controller;
pub mod models;

// Re-export commonly used types
pub use controller::{ControllerState, JobController, JobOutcome};
pub use models::{Job, JobStatus};
