//! Contact form model and submit lifecycle.
//!
//! The form itself is plain data; the interesting part is the submit state
//! machine. `Submitting` blocks duplicate submits, success clears the fields
//! and shows a confirmation, failure keeps everything typed so the visitor
//! can retry.

use super::models::ContactMessage;

/// Fixed copy shown when a submission fails. The transport error is logged
/// to the console, never rendered.
pub const SUBMIT_RETRY_MESSAGE: &str = "Failed to send message. Please try again.";

/// The four required contact fields, bound to the form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// All four fields must be non-blank before a submit is allowed.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current fields as an outgoing payload.
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// Submit lifecycle. `Submitting` is the only state that refuses a new
/// submit; `Submitted` is left through the explicit reset control.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

impl SubmitStatus {
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmitStatus::Submitting)
    }
}

/// Apply a finished submission to the form. Success clears the fields and
/// confirms; failure keeps the typed fields in place for retry.
pub fn settle_submission(form: &mut ContactForm, outcome: Result<(), String>) -> SubmitStatus {
    match outcome {
        Ok(()) => {
            form.clear();
            SubmitStatus::Submitted
        }
        Err(_) => SubmitStatus::Error(SUBMIT_RETRY_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn test_is_complete_requires_all_fields() {
        assert!(filled_form().is_complete());

        let mut form = filled_form();
        form.subject = String::new();
        assert!(!form.is_complete());

        let mut form = filled_form();
        form.message = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_success_clears_fields_and_confirms() {
        let mut form = filled_form();
        let status = settle_submission(&mut form, Ok(()));

        assert_eq!(status, SubmitStatus::Submitted);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failure_preserves_fields_for_retry() {
        let mut form = filled_form();
        let status = settle_submission(&mut form, Err("connection refused".to_string()));

        assert_eq!(status, SubmitStatus::Error(SUBMIT_RETRY_MESSAGE.to_string()));
        assert_eq!(form, filled_form());
    }

    #[test]
    fn test_only_submitting_blocks_resubmit() {
        assert!(SubmitStatus::Idle.can_submit());
        assert!(!SubmitStatus::Submitting.can_submit());
        assert!(SubmitStatus::Submitted.can_submit());
        assert!(SubmitStatus::Error("x".to_string()).can_submit());
    }

    #[test]
    fn test_to_message_snapshots_fields() {
        let message = filled_form().to_message();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.subject, "Hello");
        assert_eq!(message.message, "Nice site");
    }
}
