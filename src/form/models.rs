use serde::Serialize;
use validator::Validate;

use crate::form::validation;
use crate::render::{Notice, Render};

/// Form fields that carry their own error indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Singer,
    Count,
    Duration,
    Email,
}

impl Field {
    /// Message shown next to the field when its value is rejected
    pub fn message(&self) -> &'static str {
        match self {
            Field::Singer => "Singer name is required",
            Field::Count => "Number of videos must be greater than 10",
            Field::Duration => "Duration must be greater than 20 seconds",
            Field::Email => "Invalid email address",
        }
    }
}

/// Raw form input, exactly as the user typed it
#[derive(Debug, Clone, Default)]
pub struct MashupForm {
    pub singer: String,
    pub count: String,
    pub duration: String,
    pub email: String,
}

/// Payload for the job-creation request, produced from a fully validated form
#[derive(Debug, Clone, Serialize, Validate)]
pub struct MashupRequest {
    #[validate(custom(function = "crate::form::validation::validate_singer_present"))]
    pub singer: String,
    #[validate(range(min = 11, message = "Number of videos must be greater than 10"))]
    pub count: u32,
    #[validate(range(min = 21, message = "Duration must be greater than 20 seconds"))]
    pub duration: u32,
    #[validate(custom(function = "crate::form::validation::validate_email_format"))]
    pub email: Option<String>,
}

impl MashupForm {
    /// Check the singer field and toggle its error indicator
    pub fn check_singer(&self, renderer: &dyn Render) -> bool {
        let ok = !self.singer.trim().is_empty();
        renderer.field_error(Field::Singer, !ok);
        ok
    }

    /// Check the videos-count field and toggle its error indicator
    pub fn check_count(&self, renderer: &dyn Render) -> bool {
        let ok = validation::parse_count(&self.count).is_some();
        renderer.field_error(Field::Count, !ok);
        ok
    }

    /// Check the clip-duration field and toggle its error indicator
    pub fn check_duration(&self, renderer: &dyn Render) -> bool {
        let ok = validation::parse_duration(&self.duration).is_some();
        renderer.field_error(Field::Duration, !ok);
        ok
    }

    /// Check the optional email field and toggle its error indicator.
    /// An empty field is valid.
    pub fn check_email(&self, renderer: &dyn Render) -> bool {
        let value = self.email.trim();
        let ok = value.is_empty() || validation::email_valid(value);
        renderer.field_error(Field::Email, !ok);
        ok
    }

    /// Run all four field checks and assemble the request payload.
    ///
    /// Every check runs even after one fails so each field's indicator
    /// reflects its current value. When any field is rejected a transient
    /// notification is shown and `None` is returned, blocking submission.
    pub fn validate(&self, renderer: &dyn Render) -> Option<MashupRequest> {
        let singer_ok = self.check_singer(renderer);
        let count_ok = self.check_count(renderer);
        let duration_ok = self.check_duration(renderer);
        let email_ok = self.check_email(renderer);

        if !(singer_ok && count_ok && duration_ok && email_ok) {
            renderer.notify(Notice::Error, "Please fix all validation errors");
            return None;
        }

        let email = self.email.trim();
        let request = MashupRequest {
            singer: self.singer.trim().to_string(),
            count: validation::parse_count(&self.count)?,
            duration: validation::parse_duration(&self.duration)?,
            email: (!email.is_empty()).then(|| email.to_string()),
        };

        // Structural re-check of the assembled payload before it goes on
        // the wire; with the field checks above this cannot fail.
        if request.validate().is_err() {
            renderer.notify(Notice::Error, "Please fix all validation errors");
            return None;
        }

        Some(request)
    }
}
