use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation failures raised by the registration form.
///
/// Both are blocking: a modal dialog must be dismissed, the signup
/// intent is not emitted, and the form keeps its editable state. Empty
/// required fields never reach this type; the browser's native
/// `required` handling blocks those submissions first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SignupError {
    /// The password and confirmation fields differ.
    PasswordMismatch,
    /// The terms checkbox was left unchecked.
    TermsNotAccepted,
}

impl SignupError {
    /// Short heading for the blocking dialog.
    pub fn title(&self) -> &'static str {
        match self {
            SignupError::PasswordMismatch => "Passwords do not match",
            SignupError::TermsNotAccepted => "Terms not accepted",
        }
    }

    /// Message shown in the dialog body.
    pub fn message(&self) -> &'static str {
        match self {
            SignupError::PasswordMismatch => {
                "The password and confirmation must be identical. Re-enter them and try again."
            }
            SignupError::TermsNotAccepted => {
                "Please agree to the Terms & Conditions and Privacy Policy before creating an account."
            }
        }
    }
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SignupError {}

/// Failure leg of the authentication backend callbacks.
///
/// The current backend is a stub that always succeeds; this type gives
/// the callback contract the shape a real backend will need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}
