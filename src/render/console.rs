use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::form::Field;
use crate::job::Job;
use crate::render::{Notice, Render};

/// Terminal renderer: a progress bar while the job runs, plain lines for
/// everything else.
pub struct ConsoleRenderer {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    /// Print a line without tearing the progress bar, if one is active
    fn println(&self, line: &str) {
        match &*self.bar.lock().unwrap() {
            Some(bar) => bar.println(line),
            None => println!("{line}"),
        }
    }

    fn progress_style() -> ProgressStyle {
        ProgressStyle::with_template("[{bar:40}] {percent:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ConsoleRenderer {
    fn field_error(&self, field: Field, visible: bool) {
        // Nothing to take back on a terminal once printed
        if visible {
            self.println(&format!("  - {}", field.message()));
        }
    }

    fn set_form_busy(&self, busy: bool) {
        if busy {
            self.println("Creating mashup job...");
        }
    }

    fn show_progress(&self) {
        let bar = ProgressBar::new(100);
        bar.set_style(Self::progress_style());
        *self.bar.lock().unwrap() = Some(bar);
    }

    fn update_progress(&self, percent: u8, step: &str) {
        if let Some(bar) = &*self.bar.lock().unwrap() {
            bar.set_position(u64::from(percent));
            bar.set_message(step.to_string());
        }
    }

    fn hide_progress(&self) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }

    fn show_success(&self, job: &Job, download_url: Option<&str>) {
        self.println("Mashup created successfully!");
        if let Some(url) = download_url {
            self.println(&format!("  Download: {url}"));
        }
        if let Some(size) = &job.file_size {
            self.println(&format!("  Size: {size}"));
        }
        if let Some(clips) = job.clips_count {
            self.println(&format!("  Clips: {clips}"));
        }
        if let Some(sent) = job.email_sent {
            self.println(if sent {
                "  A copy was emailed to you."
            } else {
                "  Sending the email copy failed."
            });
        }
    }

    fn hide_success(&self) {}

    fn notify(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Success => self.println(message),
            Notice::Error => self.println(&format!("error: {message}")),
        }
    }
}
