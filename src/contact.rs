//! Contact form validation
//!
//! Mirrors the checks the page runs on submit. Every failing field is
//! reported, not just the first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum message length (characters, after trimming)
pub const MIN_MESSAGE_LEN: usize = 10;

/// Feedback shown after a valid submission
pub const SUCCESS_FEEDBACK: &str = "Message sent successfully! I'll get back to you soon.";
/// Feedback shown when any field fails
pub const ERROR_FEEDBACK: &str = "Please fix the errors above";

/// Which form input an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// DOM id of the error label under the input
    pub fn error_element_id(&self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Message => "message-error",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NameRequired => write!(f, "Name is required"),
            FieldError::EmailRequired => write!(f, "Email is required"),
            FieldError::EmailInvalid => write!(f, "Please enter a valid email"),
            FieldError::MessageRequired => write!(f, "Message is required"),
            FieldError::MessageTooShort => {
                write!(f, "Message must be at least {} characters", MIN_MESSAGE_LEN)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Submitted contact form values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check every field; on failure returns the errors in field order
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if trim(&self.name).is_empty() {
            errors.push(FieldError::NameRequired);
        }

        if trim(&self.email).is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }

        let message = trim(&self.message);
        if message.is_empty() {
            errors.push(FieldError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("Contact form rejected: {} error(s)", errors.len());
            Err(errors)
        }
    }
}

/// Whitespace as the browser sees it: BOM counts, NEL (U+0085) does not
fn is_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, non-empty
/// local part, and a `.` inside the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
