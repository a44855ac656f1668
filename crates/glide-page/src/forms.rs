//! Quote Request Form
//!
//! Validates a submission and reflects the outcome into the feedback
//! element. The error display strings are the exact user-facing
//! feedback text.

use glide_dom::{DomSurface, NodeId};
use thiserror::Error;

/// Document id of the quote form's feedback element
pub const QUOTE_FEEDBACK_ID: &str = "quote-feedback";
/// Class flag on failed feedback
pub const ERROR_CLASS: &str = "is-error";
/// Class flag on successful feedback
pub const SUCCESS_CLASS: &str = "is-success";

const SUCCESS_TEXT: &str = "Thank you! We'll call you back within 24 hours.";

/// Validation failure, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteFormError {
    #[error("Please enter your full name.")]
    EmptyName,
    #[error("Please provide a valid phone number.")]
    InvalidPhone,
    #[error("Please choose the service you need.")]
    MissingService,
}

/// Raw field values as the host collected them
#[derive(Debug, Clone, Default)]
pub struct QuoteSubmission {
    pub name: String,
    pub phone: String,
    pub service: String,
}

impl QuoteSubmission {
    /// Check fields in order: name, then phone, then service. A phone
    /// number needs at least six digits once separators are stripped.
    pub fn validate(&self) -> Result<(), QuoteFormError> {
        if self.name.trim().is_empty() {
            return Err(QuoteFormError::EmptyName);
        }
        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if digits < 6 {
            return Err(QuoteFormError::InvalidPhone);
        }
        if self.service.is_empty() {
            return Err(QuoteFormError::MissingService);
        }
        Ok(())
    }
}

/// Quote form binding
#[derive(Debug)]
pub struct QuoteForm {
    feedback: NodeId,
}

impl QuoteForm {
    /// Bind to the feedback element; `None` means the page has no form
    pub fn bind(surface: &dyn DomSurface) -> Option<Self> {
        let feedback = surface.element_by_id(QUOTE_FEEDBACK_ID)?;
        Some(Self { feedback })
    }

    /// Validate and reflect the outcome into the feedback element.
    /// Returns the validation result so the host can reset its inputs
    /// on success.
    pub fn submit(
        &self,
        surface: &mut dyn DomSurface,
        submission: &QuoteSubmission,
    ) -> Result<(), QuoteFormError> {
        surface.remove_class(self.feedback, ERROR_CLASS);
        surface.remove_class(self.feedback, SUCCESS_CLASS);

        match submission.validate() {
            Err(err) => {
                surface.set_text(self.feedback, &err.to_string());
                surface.add_class(self.feedback, ERROR_CLASS);
                Err(err)
            }
            Ok(()) => {
                surface.set_text(self.feedback, SUCCESS_TEXT);
                surface.add_class(self.feedback, SUCCESS_CLASS);
                Ok(())
            }
        }
    }
}
