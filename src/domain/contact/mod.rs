// SPDX-License-Identifier: MPL-2.0
//! Contact submission types.
//!
//! A submission is what the contact form hands to a relay. Validation mirrors
//! what the form requires before it lets a request go out. Pages configured
//! for email skip the form and open a `mailto:` link instead.

use std::fmt;

/// Field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Name,
    Email,
    Message,
}

impl InvalidField {
    /// Returns the i18n message key describing this field's problem.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            InvalidField::Name => "contact-invalid-name",
            InvalidField::Email => "contact-invalid-email",
            InvalidField::Message => "contact-invalid-message",
        }
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidField::Name => write!(f, "name is required"),
            InvalidField::Email => write!(f, "a valid email address is required"),
            InvalidField::Message => write!(f, "message is required"),
        }
    }
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub subject: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw form input, trimming the single-line
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns the first field that is empty, or [`InvalidField::Email`] when
    /// the address has no `@` with text on both sides.
    pub fn new(
        subject: &str,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, InvalidField> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(InvalidField::Name);
        }
        if !looks_like_email(email) {
            return Err(InvalidField::Email);
        }
        if message.trim().is_empty() {
            return Err(InvalidField::Message);
        }

        Ok(Self {
            subject: subject.trim().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}

/// Terminal outcome of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

impl Outcome {
    /// Returns the i18n message key for the static text shown to the user.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Outcome::Sent => "contact-result-sent",
            Outcome::Failed => "contact-result-failed",
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Subject and prefilled message a contact button starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub subject: String,
    pub message: String,
}

/// How the page delivers a contact request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactChannel {
    /// Modal form posting to a relay.
    #[default]
    Form,
    /// Pre-filled message in the user's mail client.
    Email { address: String },
}

/// Builds a `mailto:` link with the subject and body filled in.
///
/// ```
/// use iced_showcase::domain::contact::mailto_uri;
///
/// assert_eq!(
///     mailto_uri("me@example.com", "Quick Fix", "Hi!\n"),
///     "mailto:me@example.com?subject=Quick%20Fix&body=Hi%21%0A"
/// );
/// ```
#[must_use]
pub fn mailto_uri(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address.trim(),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
