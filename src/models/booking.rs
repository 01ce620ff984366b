use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$").unwrap()
});

/// Appointment request as sent by the agent or the booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// ISO-8601 datetime with offset, e.g. `2025-09-26T10:00:00+10:00`.
    pub slot_iso: String,
    /// `video` or `display-suite`. Passed through as given.
    pub mode: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(AppError::Validation(format!(
                "email: '{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub ok: bool,
    pub booking_id: String,
    pub message: String,
}
