#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const NO_SUBJECT: &str = "No subject";
pub const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub timestamp: String,
}

impl ContactSubmission {
    /// Builds a submission from raw form values. Purely local, nothing is
    /// sent from here.
    pub fn validate(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        timestamp: &str,
    ) -> Result<ContactSubmission, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let subject = subject.trim();
        let message = message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        let subject = if subject.is_empty() {
            None
        } else {
            Some(subject.to_string())
        };

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject,
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        })
    }

    pub fn into_params(self, to_name: &str) -> EmailParams {
        EmailParams {
            from_name: self.name,
            reply_to: self.email.clone(),
            from_email: self.email,
            subject: self.subject.unwrap_or_else(|| NO_SUBJECT.to_string()),
            message: self.message,
            to_name: to_name.to_string(),
            date: self.timestamp,
        }
    }
}

/// Template parameters handed to the email-delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
    pub date: String,
}

pub fn failure_text(fallback_email: &str) -> String {
    format!("Failed to send message. Please try again or email me directly at {fallback_email}.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResponseKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormResponse {
    pub kind: FormResponseKind,
    pub text: String,
    /// Bumped for every new response so a delayed clear only removes the one
    /// that scheduled it.
    pub generation: u64,
}
